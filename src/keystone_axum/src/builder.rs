//! [`ViewResponseBuilder`] for Axum, backed by private cookies.
//!
//! The session id and pending flash messages each live in their own
//! encrypted cookie. Flash messages are stored as a JSON array.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use keystone_adapters::config::{CookieSettings, routes::LANDING_ROUTE};
use keystone_core::{FlashMessage, SessionId, ViewResponseBuilder};

pub struct AxumViewBuilder {
    jar: PrivateCookieJar,
    cookies: Arc<CookieSettings>,
    messages: Vec<FlashMessage>,
    had_pending: bool,
}

impl AxumViewBuilder {
    /// Starts a response, picking up any flash messages left by earlier
    /// requests. An unreadable flash cookie counts as empty.
    pub fn new(jar: PrivateCookieJar, cookies: Arc<CookieSettings>) -> Self {
        let pending = jar.get(&cookies.flash_cookie_name);
        let had_pending = pending.is_some();
        let messages = pending
            .and_then(|cookie| serde_json::from_str::<Vec<FlashMessage>>(cookie.value()).ok())
            .unwrap_or_default();

        Self {
            jar,
            cookies,
            messages,
            had_pending,
        }
    }

    fn cookie(&self, name: &str, value: String) -> Cookie<'static> {
        Cookie::build((name.to_string(), value))
            .path("/")
            .http_only(true)
            .secure(self.cookies.secure)
            .same_site(SameSite::Lax)
            .build()
    }

    fn removal(name: &str) -> Cookie<'static> {
        Cookie::build((name.to_string(), String::new()))
            .path("/")
            .build()
    }

    fn clear_pending(mut self) -> Self {
        if self.had_pending {
            self.jar = self.jar.remove(Self::removal(&self.cookies.flash_cookie_name));
            self.had_pending = false;
        }
        self
    }
}

impl ViewResponseBuilder for AxumViewBuilder {
    type Response = Response;

    fn flash(mut self, message: FlashMessage) -> Self {
        self.messages.push(message);
        self
    }

    fn establish_session(mut self, session_id: SessionId) -> Self {
        let cookie = self.cookie(&self.cookies.session_cookie_name, session_id.to_string());
        self.jar = self.jar.add(cookie);
        self
    }

    fn end_session(mut self) -> Self {
        self.jar = self
            .jar
            .remove(Self::removal(&self.cookies.session_cookie_name));
        self
    }

    fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    fn render(self, status: u16, html: String) -> Self::Response {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let builder = self.clear_pending();
        (status, builder.jar, Html(html)).into_response()
    }

    fn redirect(mut self, location: &str) -> Self::Response {
        if self.messages.is_empty() {
            self = self.clear_pending();
        } else {
            match serde_json::to_string(&self.messages) {
                Ok(value) => {
                    let cookie = self.cookie(&self.cookies.flash_cookie_name, value);
                    self.jar = self.jar.add(cookie);
                }
                Err(e) => tracing::error!("Failed to encode flash messages: {e}"),
            }
        }

        let location = HeaderValue::from_str(location).unwrap_or_else(|_| {
            tracing::warn!("Redirect target is not a valid header value");
            HeaderValue::from_static(LANDING_ROUTE)
        });
        (StatusCode::FOUND, self.jar, [(header::LOCATION, location)]).into_response()
    }
}
