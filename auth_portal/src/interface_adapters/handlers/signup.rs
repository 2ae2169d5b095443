use crate::domain::{FieldName, FormState, Registration, SubmitError};
use crate::interface_adapters::handlers::{
    append_set_cookies, forwarded_cookies, html_response, log_submit_error, parse_form_id,
    status_for,
};
use crate::interface_adapters::protocol::SignupFormInput;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views::{self, FormView, Notice};
use crate::use_cases::signup::SignupUseCase;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::{Form, extract::State};
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "signup_page", skip_all)]
pub async fn signup_page(State(state): State<Arc<AppState>>) -> Response {
    render(&state, &FormState::new(), Uuid::new_v4(), None, StatusCode::OK)
}

#[tracing::instrument(
    name = "signup_submit",
    skip_all,
    fields(form_id = tracing::field::Empty)
)]
pub async fn signup_submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(input): Form<SignupFormInput>,
) -> Response {
    let form_id = parse_form_id(input.form_id.as_deref());
    tracing::Span::current().record("form_id", tracing::field::display(form_id));

    let mut form = FormState::<Registration>::new();
    form.edit(FieldName::Name, input.name);
    form.edit(FieldName::Email, input.email);
    form.edit(FieldName::MobileNumber, input.mobile_number);
    form.edit(FieldName::Password, input.password);
    form.edit(FieldName::ConfirmPassword, input.confirm_password);

    let Some(_permit) = state.in_flight.try_begin(form_id) else {
        let err = SubmitError::InFlight;
        log_submit_error(&err);
        let notice = Notice::error(err.to_string());
        return render(&state, &form, form_id, Some(notice), status_for(&err));
    };

    let use_case = SignupUseCase {
        api: state.auth.as_deref(),
    };
    match use_case.execute(&mut form, &forwarded_cookies(&headers)).await {
        Ok(success) => {
            tracing::info!("signup accepted; verification email pending.");
            let mut response =
                html_response(StatusCode::OK, views::signup_success_page(&success.email));
            append_set_cookies(&mut response, success.set_cookies);
            response
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
    form: &FormState<Registration>,
    form_id: Uuid,
    notice: Option<Notice>,
    status: StatusCode,
) -> Response {
    let html = views::signup_page(&FormView {
        form,
        form_id,
        notice,
        configured: state.is_configured(),
    });
    html_response(status, html)
}
