mod accounts_service;
pub mod helpers;
pub mod tracing;

pub use accounts_service::AccountsService;
