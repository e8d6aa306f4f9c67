use askama::Template;
use keystone_core::{Account, FlashMessage, RenderedField};

/// Data every page's base layout needs.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub messages: Vec<FlashMessage>,
    /// Shown in the navigation bar when someone is signed in.
    pub username: Option<String>,
}

impl Layout {
    pub fn new(messages: &[FlashMessage], account: Option<&Account>) -> Self {
        Self {
            messages: messages.to_vec(),
            username: account.map(|account| account.username().to_string()),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub layout: Layout,
    pub fields: Vec<RenderedField>,
    pub non_field_errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub layout: Layout,
    pub fields: Vec<RenderedField>,
    pub non_field_errors: Vec<String>,
    pub next: String,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage {
    pub layout: Layout,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_joined: String,
}

impl ProfilePage {
    pub fn new(layout: Layout, account: &Account) -> Self {
        let profile = account.profile();
        Self {
            layout,
            username: account.username().to_string(),
            first_name: profile.first_name().to_string(),
            last_name: profile.last_name().to_string(),
            email: profile
                .email()
                .map(|email| email.to_string())
                .unwrap_or_default(),
            date_joined: account.date_joined().format("%d/%m/%Y").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "edit_profile.html")]
pub struct EditProfilePage {
    pub layout: Layout,
    pub fields: Vec<RenderedField>,
    pub non_field_errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "delete_account.html")]
pub struct DeleteAccountPage {
    pub layout: Layout,
    pub username: String,
}

#[derive(Template)]
#[template(path = "logout.html")]
pub struct LogoutPage {
    pub layout: Layout,
}

#[derive(Template, Default)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub layout: Layout,
}
