use crate::interface_adapters::handlers::login::{login_page, login_submit};
use crate::interface_adapters::handlers::pages::{hello, home};
use crate::interface_adapters::handlers::signup::{signup_page, signup_submit};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the page routes to their handlers.
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page).post(login_submit))
        .route("/signup", get(signup_page).post(signup_submit))
        .route("/hello", get(hello))
        .with_state(state)
}
