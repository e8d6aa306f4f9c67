//! Askama page templates.

pub mod pages;

pub use pages::{
    DeleteAccountPage, EditProfilePage, ErrorPage, IndexPage, Layout, LoginPage, LogoutPage,
    ProfilePage, RegisterPage,
};
