pub mod delete_account;
pub mod landing;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;

pub use delete_account::{delete_account, delete_account_page};
pub use landing::landing;
pub use login::{NextQuery, login, login_page};
pub use logout::{logout, logout_page};
pub use profile::{edit_profile, edit_profile_page, profile};
pub use register::{register, register_page};
