// HTTP handlers for the rendered pages.

pub mod login;
pub mod pages;
pub mod signup;

use crate::domain::{ForwardedCookies, SetCookies, SubmitError};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use uuid::Uuid;

// Joins every Cookie header the browser sent into one forwarded value.
pub(crate) fn forwarded_cookies(headers: &HeaderMap) -> ForwardedCookies {
    let joined = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");
    if joined.is_empty() {
        ForwardedCookies::none()
    } else {
        ForwardedCookies(Some(joined))
    }
}

// Keeps the posted form id so repeat submits of one form collide; a missing
// or garbled id gets a fresh one.
pub(crate) fn parse_form_id(value: Option<&str>) -> Uuid {
    value
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}

pub(crate) fn append_set_cookies(response: &mut Response, cookies: SetCookies) {
    for cookie in cookies.0 {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(error) => tracing::warn!(%error, "dropping unrelayable upstream cookie."),
        }
    }
}

pub(crate) fn redirect_with_cookies(to: &str, cookies: SetCookies) -> Response {
    let mut response = Redirect::to(to).into_response();
    append_set_cookies(&mut response, cookies);
    response
}

pub(crate) fn html_response(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

// Maps submission failures to the status of the re-rendered page.
pub(crate) fn status_for(err: &SubmitError) -> StatusCode {
    match err {
        SubmitError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitError::Configuration => StatusCode::SERVICE_UNAVAILABLE,
        SubmitError::InFlight | SubmitError::AlreadyRegistered => StatusCode::CONFLICT,
        SubmitError::Transport => StatusCode::BAD_GATEWAY,
        SubmitError::Rejected { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(StatusCode::is_client_error)
            .unwrap_or(StatusCode::BAD_GATEWAY),
    }
}

pub(crate) fn log_submit_error(err: &SubmitError) {
    match err {
        SubmitError::Validation(errors) => {
            tracing::debug!(fields = errors.len(), "submission blocked by validation.")
        }
        SubmitError::Configuration => {
            tracing::error!("submission refused: AUTH_API_URL is not configured.")
        }
        SubmitError::InFlight => tracing::warn!("duplicate submission rejected."),
        SubmitError::Transport => tracing::warn!("auth api unreachable."),
        SubmitError::Rejected { status, message } => {
            tracing::info!(status, message = %message, "auth api rejected submission.")
        }
        SubmitError::AlreadyRegistered => tracing::info!("email already registered."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_browser_sends_split_cookie_headers_then_they_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("session=abc"));
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));

        assert_eq!(
            forwarded_cookies(&headers),
            ForwardedCookies(Some("session=abc; theme=dark".to_string()))
        );
        assert_eq!(forwarded_cookies(&HeaderMap::new()), ForwardedCookies::none());
    }

    #[test]
    fn when_upstream_rejects_with_server_error_then_page_status_is_bad_gateway() {
        let server_error = SubmitError::Rejected {
            status: 500,
            message: "boom".to_string(),
        };
        let unauthorized = SubmitError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };

        assert_eq!(status_for(&server_error), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(&unauthorized), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn when_form_id_is_garbled_then_a_fresh_one_is_issued() {
        let id = Uuid::new_v4();

        assert_eq!(parse_form_id(Some(&id.to_string())), id);
        assert_ne!(parse_form_id(Some("not-a-uuid")), Uuid::nil());
    }
}
