use std::fmt;

/// Post-login redirect target supplied by the client.
///
/// Only path-absolute values (starting with `/`) are accepted. Protocol-relative
/// values such as `//host/path` also start with `/` and are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextUrl(String);

impl NextUrl {
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.starts_with('/') || raw.chars().any(char::is_control) {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    /// Picks the first non-empty candidate, then validates it. A rejected
    /// first choice does not fall through to the second.
    pub fn resolve(form_value: Option<&str>, query_value: Option<&str>) -> Option<Self> {
        let chosen = [form_value, query_value]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())?;
        Self::parse(chosen)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NextUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NextUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
