use keystone_core::{Account, AccountId, AccountStore, AccountStoreError, Profile};

#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Update profile use case - replaces the editable attributes of an account
pub struct UpdateProfileUseCase<'a, A>
where
    A: AccountStore,
{
    account_store: &'a A,
}

impl<'a, A> UpdateProfileUseCase<'a, A>
where
    A: AccountStore,
{
    pub fn new(account_store: &'a A) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, profile))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        profile: Profile,
    ) -> Result<Account, UpdateProfileError> {
        Ok(self.account_store.update_profile(account_id, profile).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockAccountStore;
    use keystone_core::Email;

    #[tokio::test]
    async fn test_update_profile_persists_changes() {
        let accounts = MockAccountStore::default();
        let account = accounts.seed("alopez", "marea-Alta-2024").await;
        let profile = Profile::new(
            "Ana",
            "López",
            Some(Email::parse("ana@instituto.edu").unwrap()),
        )
        .unwrap();

        let updated = UpdateProfileUseCase::new(&accounts)
            .execute(account.id(), profile.clone())
            .await
            .unwrap();

        assert_eq!(updated.profile(), &profile);
        assert_eq!(updated.username(), account.username());
    }

    #[tokio::test]
    async fn test_update_profile_of_missing_account() {
        let accounts = MockAccountStore::default();

        let result = UpdateProfileUseCase::new(&accounts)
            .execute(AccountId::new(), Profile::default())
            .await;

        assert!(matches!(
            result,
            Err(UpdateProfileError::AccountStoreError(
                AccountStoreError::AccountNotFound
            ))
        ));
    }
}
