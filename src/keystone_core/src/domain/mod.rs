pub mod account;
pub mod account_id;
pub mod email;
pub mod flash;
pub mod next_url;
pub mod password;
pub mod profile;
pub mod session_id;
pub mod username;
