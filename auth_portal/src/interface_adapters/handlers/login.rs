use crate::domain::{Credentials, FieldName, FormState, SubmitError};
use crate::interface_adapters::handlers::{
    forwarded_cookies, html_response, log_submit_error, parse_form_id, redirect_with_cookies,
    status_for,
};
use crate::interface_adapters::protocol::LoginFormInput;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views::{self, FormView, Notice};
use crate::use_cases::login::LoginUseCase;
use crate::use_cases::session_precheck::{PrecheckOutcome, SessionPrecheckUseCase};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, extract::State};
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "login_page", skip_all)]
pub async fn login_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    // Skip the form entirely when the browser already holds a session.
    let precheck = SessionPrecheckUseCase {
        api: state.auth.as_deref(),
    };
    if let PrecheckOutcome::Redirect(to) = precheck.execute(&forwarded_cookies(&headers)).await {
        tracing::info!("active session found; skipping login form.");
        return Redirect::to(to).into_response();
    }

    render(&state, &FormState::new(), Uuid::new_v4(), None, StatusCode::OK)
}

#[tracing::instrument(
    name = "login_submit",
    skip_all,
    fields(form_id = tracing::field::Empty)
)]
pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(input): Form<LoginFormInput>,
) -> Response {
    let form_id = parse_form_id(input.form_id.as_deref());
    tracing::Span::current().record("form_id", tracing::field::display(form_id));

    let mut form = FormState::<Credentials>::new();
    form.edit(FieldName::Email, input.email);
    form.edit(FieldName::Password, input.password);

    // One outstanding request per rendered form.
    let Some(_permit) = state.in_flight.try_begin(form_id) else {
        let err = SubmitError::InFlight;
        log_submit_error(&err);
        let notice = Notice::error(err.to_string());
        return render(&state, &form, form_id, Some(notice), status_for(&err));
    };

    let use_case = LoginUseCase {
        api: state.auth.as_deref(),
    };
    match use_case.execute(&mut form, &forwarded_cookies(&headers)).await {
        Ok(success) => {
            tracing::info!("login accepted.");
            redirect_with_cookies(success.redirect_to, success.set_cookies)
        }
        Err(err) => {
            log_submit_error(&err);
            let notice = Notice::error(err.to_string());
            render(&state, &form, form_id, Some(notice), status_for(&err))
        }
    }
}

fn render(
    state: &AppState,
    form: &FormState<Credentials>,
    form_id: Uuid,
    notice: Option<Notice>,
    status: StatusCode,
) -> Response {
    let html = views::login_page(&FormView {
        form,
        form_id,
        notice,
        configured: state.is_configured(),
    });
    html_response(status, html)
}
