// Domain layer: form records, validation rules and the auth API port.

pub mod auth;
pub mod entities;
pub mod errors;
pub mod fields;
pub mod form;
pub mod validation;

// Re-export the domain boundary types and ports.
pub use auth::{
    ApiErrorBody, AuthApi, ForwardedCookies, Greeting, LoginPayload, SessionInfo, SetCookies,
    SignupPayload,
};
pub use entities::{Credentials, FormRecord, Registration};
pub use errors::{AuthApiError, SubmitError};
pub use fields::{FieldErrors, FieldName};
pub use form::FormState;
