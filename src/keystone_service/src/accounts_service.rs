use axum::{Router, routing::get};
use keystone_adapters::config::routes::{
    DELETE_ACCOUNT_ROUTE, EDIT_PROFILE_ROUTE, LANDING_ROUTE, LOGIN_ROUTE, LOGOUT_ROUTE,
    PROFILE_ROUTE, REGISTER_ROUTE, STATIC_ROUTE,
};
use keystone_axum::{
    AppState,
    routes::{
        delete_account, delete_account_page, edit_profile, edit_profile_page, landing, login,
        login_page, logout, logout_page, profile, register, register_page,
    },
};
use keystone_core::{AccountStore, SessionStore};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The account pages as one router: registration, login, logout, profile
/// and account deletion, plus static assets.
pub struct AccountsService {
    router: Router,
}

impl AccountsService {
    /// Create the service from the shared application state
    ///
    /// # Arguments
    /// * `state` - Stores, cookie key and cookie settings shared by every route
    /// * `assets_dir` - Directory served under `/static`
    pub fn new<A, S>(state: AppState<A, S>, assets_dir: &str) -> Self
    where
        A: AccountStore + 'static,
        S: SessionStore + 'static,
    {
        let router = Router::new()
            .route(LANDING_ROUTE, get(landing::<A, S>))
            .route(
                REGISTER_ROUTE,
                get(register_page::<A, S>).post(register::<A, S>),
            )
            .route(LOGIN_ROUTE, get(login_page::<A, S>).post(login::<A, S>))
            .route(LOGOUT_ROUTE, get(logout_page::<A, S>).post(logout::<A, S>))
            .route(PROFILE_ROUTE, get(profile::<A, S>))
            .route(
                EDIT_PROFILE_ROUTE,
                get(edit_profile_page::<A, S>).post(edit_profile::<A, S>),
            )
            .route(
                DELETE_ACCOUNT_ROUTE,
                get(delete_account_page::<A, S>).post(delete_account::<A, S>),
            )
            .nest_service(STATIC_ROUTE, ServeDir::new(assets_dir))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be merged into another
    /// application
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Keystone listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
