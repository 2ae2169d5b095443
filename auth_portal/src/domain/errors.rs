use std::fmt;

use crate::domain::auth::ApiErrorBody;
use crate::domain::fields::FieldErrors;

pub const CONFIGURATION_MESSAGE: &str =
    "The authentication service is not configured. Set AUTH_API_URL and restart the portal.";
pub const TRANSPORT_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";
pub const ALREADY_REGISTERED_MESSAGE: &str =
    "An account with this email already exists. Try logging in instead.";
pub const IN_FLIGHT_MESSAGE: &str = "A submission is already in progress.";
pub const VALIDATION_MESSAGE: &str = "Please fix the highlighted fields.";

// Failures reported by the auth API port.
#[derive(Debug)]
pub enum AuthApiError {
    // The request never produced a response.
    Transport(String),
    // Non-2xx response; `body` is set only when it parsed as JSON.
    Upstream {
        status: u16,
        body: Option<ApiErrorBody>,
    },
    // 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for AuthApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthApiError::Transport(err) => write!(f, "auth api transport error: {err}"),
            AuthApiError::Upstream { status, body } => {
                match body.as_ref().and_then(ApiErrorBody::message) {
                    Some(message) => write!(f, "auth api upstream error {status}: {message}"),
                    None => write!(f, "auth api upstream error {status}"),
                }
            }
            AuthApiError::Decode(err) => write!(f, "auth api response decode error: {err}"),
        }
    }
}

impl std::error::Error for AuthApiError {}

// Outcome of a failed submission or fetch, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    // No base URL; nothing was sent.
    Configuration,
    // Local field errors; nothing was sent.
    Validation(FieldErrors),
    // The same form instance already has a request outstanding.
    InFlight,
    Transport,
    Rejected { status: u16, message: String },
    AlreadyRegistered,
}

impl SubmitError {
    // Maps an upstream failure to the message the page displays.
    pub fn from_api(err: AuthApiError) -> Self {
        match err {
            AuthApiError::Transport(_) => SubmitError::Transport,
            AuthApiError::Upstream { status, body } => {
                let message = body
                    .as_ref()
                    .and_then(ApiErrorBody::message)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Request failed with status {status}"));
                SubmitError::Rejected { status, message }
            }
            // A 2xx we could not read is still a server-side problem.
            AuthApiError::Decode(_) => SubmitError::Rejected {
                status: 200,
                message: "The server sent an unexpected response.".to_string(),
            },
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Configuration => f.write_str(CONFIGURATION_MESSAGE),
            SubmitError::Validation(_) => f.write_str(VALIDATION_MESSAGE),
            SubmitError::InFlight => f.write_str(IN_FLIGHT_MESSAGE),
            SubmitError::Transport => f.write_str(TRANSPORT_MESSAGE),
            SubmitError::Rejected { message, .. } => f.write_str(message),
            SubmitError::AlreadyRegistered => f.write_str(ALREADY_REGISTERED_MESSAGE),
        }
    }
}

impl std::error::Error for SubmitError {}
