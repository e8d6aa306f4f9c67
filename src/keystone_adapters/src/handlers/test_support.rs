//! Response builder and stores for exercising handlers without a framework.

use std::time::Duration;

use keystone_core::{
    Account, AccountStore, FlashMessage, NewAccount, Password, Profile, SessionId,
    ViewResponseBuilder, Username,
};
use secrecy::Secret;

use crate::persistence::{HashMapAccountStore, HashMapSessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    Unchanged,
    Established(SessionId),
    Ended,
}

#[derive(Debug)]
pub struct RecordedResponse {
    pub status: u16,
    pub body: String,
    pub location: Option<String>,
    pub session: SessionChange,
    /// Messages left for the next request.
    pub carried_messages: Vec<FlashMessage>,
}

#[derive(Debug)]
pub struct RecordingBuilder {
    messages: Vec<FlashMessage>,
    session: SessionChange,
}

impl Default for RecordingBuilder {
    fn default() -> Self {
        Self::with_pending(Vec::new())
    }
}

impl RecordingBuilder {
    pub fn with_pending(pending: Vec<FlashMessage>) -> Self {
        Self {
            messages: pending,
            session: SessionChange::Unchanged,
        }
    }
}

impl ViewResponseBuilder for RecordingBuilder {
    type Response = RecordedResponse;

    fn flash(mut self, message: FlashMessage) -> Self {
        self.messages.push(message);
        self
    }

    fn establish_session(mut self, session_id: SessionId) -> Self {
        self.session = SessionChange::Established(session_id);
        self
    }

    fn end_session(mut self) -> Self {
        self.session = SessionChange::Ended;
        self
    }

    fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    fn render(self, status: u16, html: String) -> Self::Response {
        RecordedResponse {
            status,
            body: html,
            location: None,
            session: self.session,
            carried_messages: Vec::new(),
        }
    }

    fn redirect(self, location: &str) -> Self::Response {
        RecordedResponse {
            status: 302,
            body: String::new(),
            location: Some(location.to_string()),
            session: self.session,
            carried_messages: self.messages,
        }
    }
}

pub fn stores() -> (HashMapAccountStore, HashMapSessionStore) {
    (
        HashMapAccountStore::new(),
        HashMapSessionStore::new(Duration::from_secs(300)),
    )
}

/// Adds an account named `username` with password `marea-Alta-2024` and
/// first name `Ana`.
pub async fn seed_account(accounts: &HashMapAccountStore, username: &str) -> Account {
    accounts
        .add_account(NewAccount {
            username: Username::parse(username).unwrap(),
            password: Password::parse(Secret::new("marea-Alta-2024".to_string())).unwrap(),
            profile: Profile::new("Ana", "", None).unwrap(),
        })
        .await
        .unwrap()
}
