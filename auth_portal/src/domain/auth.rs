use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{Credentials, Registration};
use crate::domain::errors::AuthApiError;

// The serialization within this layer is a dependency leak, but it keeps the
// wire shape next to the records it is built from.

// Body of POST /api/auth/login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginPayload {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.trim().to_string(),
            password: credentials.password.clone(),
        }
    }
}

// Body of POST /api/auth/signup. The confirmation never leaves the portal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
}

impl From<&Registration> for SignupPayload {
    fn from(registration: &Registration) -> Self {
        Self {
            name: registration.name.trim().to_string(),
            email: registration.email.trim().to_string(),
            mobile_number: registration.mobile_number.trim().to_string(),
            password: registration.password.clone(),
        }
    }
}

// Optional JSON error envelope on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorBody {
    pub const ALREADY_REGISTERED_CODE: &'static str = "already_registered";

    // `error` wins over `message`; blank strings count as absent.
    pub fn message(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    pub fn is_already_registered(&self) -> bool {
        self.code.as_deref() == Some(Self::ALREADY_REGISTERED_CODE)
    }
}

// Body of GET /api/auth/session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub user: Option<Value>,
}

impl SessionInfo {
    pub fn is_active(&self) -> bool {
        matches!(&self.user, Some(user) if !user.is_null())
    }
}

// Body of GET /api/hello.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Greeting {
    pub message: String,
}

// Raw Cookie header received from the browser, forwarded on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedCookies(pub Option<String>);

impl ForwardedCookies {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_header(&self) -> Option<&str> {
        self.0.as_deref().filter(|value| !value.is_empty())
    }
}

// Set-Cookie header values from upstream, relayed to the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCookies(pub Vec<String>);

// Handlers and use cases depend on this trait, not on the reqwest client.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(
        &self,
        cookies: &ForwardedCookies,
        req: &LoginPayload,
    ) -> Result<SetCookies, AuthApiError>;

    async fn signup(
        &self,
        cookies: &ForwardedCookies,
        req: &SignupPayload,
    ) -> Result<SetCookies, AuthApiError>;

    async fn session(&self, cookies: &ForwardedCookies) -> Result<SessionInfo, AuthApiError>;

    async fn greeting(&self, cookies: &ForwardedCookies) -> Result<Greeting, AuthApiError>;
}
