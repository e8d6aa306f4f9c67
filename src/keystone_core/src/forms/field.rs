use crate::forms::errors::FormErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

/// Static display metadata for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: &'static str,
    pub css_class: &'static str,
    pub required: bool,
    pub help_text: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, input_type: InputType) -> Self {
        Self {
            name,
            label,
            input_type,
            placeholder: "",
            css_class: "form-control",
            required: false,
            help_text: "",
        }
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn help_text(mut self, help_text: &'static str) -> Self {
        self.help_text = help_text;
        self
    }
}

/// A field ready to be written into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub css_class: &'static str,
    pub required: bool,
    pub help_text: &'static str,
    pub value: String,
    pub errors: Vec<String>,
}

/// Combines field metadata with current values and errors. Password inputs
/// are always rendered empty.
pub fn render_fields<F>(
    specs: &[FieldSpec],
    value_of: F,
    errors: Option<&FormErrors>,
) -> Vec<RenderedField>
where
    F: Fn(&str) -> Option<String>,
{
    specs
        .iter()
        .map(|spec| RenderedField {
            name: spec.name,
            label: spec.label,
            input_type: spec.input_type.as_str(),
            placeholder: spec.placeholder,
            css_class: spec.css_class,
            required: spec.required,
            help_text: spec.help_text,
            value: match spec.input_type {
                InputType::Password => String::new(),
                _ => value_of(spec.name).unwrap_or_default(),
            },
            errors: errors
                .map(|errors| errors.for_field(spec.name).to_vec())
                .unwrap_or_default(),
        })
        .collect()
}

pub trait Form {
    const FIELDS: &'static [FieldSpec];

    /// Current non-secret value of a field, for redisplay.
    fn value_of(&self, field: &str) -> Option<String>;

    fn render(&self, errors: Option<&FormErrors>) -> Vec<RenderedField> {
        render_fields(Self::FIELDS, |field| self.value_of(field), errors)
    }

    fn render_unbound() -> Vec<RenderedField>
    where
        Self: Sized,
    {
        render_fields(Self::FIELDS, |_| None, None)
    }
}
