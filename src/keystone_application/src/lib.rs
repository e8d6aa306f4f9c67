pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    current_account::{CurrentAccountError, CurrentAccountUseCase},
    delete_account::{DeleteAccountError, DeleteAccountUseCase},
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
    update_profile::{UpdateProfileError, UpdateProfileUseCase},
};
