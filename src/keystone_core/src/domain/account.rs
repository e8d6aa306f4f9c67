use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    account_id::AccountId, password::Password, profile::Profile, username::Username,
};

/// A persisted user identity. The password hash is owned by the store and
/// never travels with this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    username: Username,
    profile: Profile,
    date_joined: DateTime<Utc>,
}

impl Account {
    pub fn new(username: Username, profile: Profile) -> Self {
        Self {
            id: AccountId::new(),
            username,
            profile,
            date_joined: Utc::now(),
        }
    }

    /// Rebuilds an account from stored columns.
    pub fn restore(
        id: AccountId,
        username: Username,
        profile: Profile,
        date_joined: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            profile,
            date_joined,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        Self { profile, ..self }
    }

    /// Full name when one is set, otherwise the username.
    pub fn display_name(&self) -> String {
        self.profile
            .full_name()
            .unwrap_or_else(|| self.username.to_string())
    }
}

/// A validated registration, ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password: Password,
    pub profile: Profile,
}
