//! Framework-agnostic response building for the account pages.
//!
//! Web frameworks implement [`ViewResponseBuilder`] on a newtype over their
//! own cookie and response types, so the handlers in the adapters crate never
//! see a framework type.

use crate::domain::{flash::FlashMessage, session_id::SessionId};

pub const STATUS_OK: u16 = 200;
pub const STATUS_FOUND: u16 = 302;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Accumulates session and flash-message changes for one response.
///
/// Flash messages queued by earlier requests are visible through
/// [`messages`](Self::messages). Rendering a page consumes every queued
/// message; redirecting keeps them for the next request.
pub trait ViewResponseBuilder: Sized {
    type Response;

    /// Queue a one-shot message for the next rendered page.
    fn flash(self, message: FlashMessage) -> Self;

    /// Bind the client to `session_id`, replacing any previous session
    /// cookie.
    fn establish_session(self, session_id: SessionId) -> Self;

    /// Remove the client's session cookie.
    fn end_session(self) -> Self;

    /// Pending messages from earlier requests followed by those queued on
    /// this builder.
    fn messages(&self) -> &[FlashMessage];

    /// Respond with an HTML page, consuming every pending message.
    fn render(self, status: u16, html: String) -> Self::Response;

    /// Respond with `302 Found` to `location`.
    fn redirect(self, location: &str) -> Self::Response;
}
