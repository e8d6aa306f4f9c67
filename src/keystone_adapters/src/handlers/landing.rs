//! Framework-agnostic landing page handler.

use askama::Template;
use keystone_core::{STATUS_OK, ViewResponseBuilder};

use crate::{
    handlers::{HandlerError, SignedIn},
    views::{IndexPage, Layout},
};

/// Renders the landing page and any pending flash messages.
pub fn render_landing<B>(signed_in: Option<&SignedIn>, builder: B) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = IndexPage {
        layout: Layout::new(builder.messages(), signed_in.map(|s| &s.account)),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}
