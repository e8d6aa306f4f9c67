pub mod env {
    pub const ENVIRONMENT_ENV_VAR: &str = "KEYSTONE_ENVIRONMENT";
    pub const SETTINGS_ENV_PREFIX: &str = "KEYSTONE";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub mod routes {
    pub const LANDING_ROUTE: &str = "/";
    pub const REGISTER_ROUTE: &str = "/accounts/register";
    pub const LOGIN_ROUTE: &str = "/accounts/login";
    pub const LOGOUT_ROUTE: &str = "/accounts/logout";
    pub const PROFILE_ROUTE: &str = "/accounts/profile";
    pub const EDIT_PROFILE_ROUTE: &str = "/accounts/profile/edit";
    pub const DELETE_ACCOUNT_ROUTE: &str = "/accounts/delete";
    pub const STATIC_ROUTE: &str = "/static";
}

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "keystone_session";
pub const DEFAULT_FLASH_COOKIE_NAME: &str = "keystone_messages";
/// Two weeks.
pub const DEFAULT_SESSION_TTL_IN_SECONDS: u64 = 1_209_600;

pub mod prod {
    pub const APP_HOST: &str = "0.0.0.0";
    pub const APP_PORT: u16 = 3000;
    pub const ASSETS_DIR: &str = "assets";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
