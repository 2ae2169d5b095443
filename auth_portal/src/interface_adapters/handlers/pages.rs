use crate::interface_adapters::handlers::{
    forwarded_cookies, html_response, log_submit_error, status_for,
};
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views;
use crate::use_cases::greeting::FetchGreetingUseCase;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, Response};
use std::sync::Arc;

pub async fn home() -> Html<String> {
    Html(views::home_page())
}

#[tracing::instrument(name = "hello", skip_all)]
pub async fn hello(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let use_case = FetchGreetingUseCase {
        api: state.auth.as_deref(),
    };
    let result = use_case.execute(&forwarded_cookies(&headers)).await;

    // The greeting page always renders; failures show up as a notice.
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            log_submit_error(err);
            status_for(err)
        }
    };
    html_response(status, views::greeting_page(&result))
}
