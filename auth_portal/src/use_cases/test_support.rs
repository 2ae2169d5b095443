use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::{
    ApiErrorBody, AuthApi, AuthApiError, ForwardedCookies, Greeting, LoginPayload, SessionInfo,
    SetCookies, SignupPayload,
};

// Scripted reply for one endpoint of the fake auth API.
#[derive(Clone)]
pub(crate) enum Canned {
    Accept(Vec<String>),
    Reject {
        status: u16,
        body: Option<ApiErrorBody>,
    },
    Unreachable,
}

impl Canned {
    pub(crate) fn reject_with_error(status: u16, error: &str) -> Self {
        Canned::Reject {
            status,
            body: Some(ApiErrorBody {
                error: Some(error.to_string()),
                ..ApiErrorBody::default()
            }),
        }
    }

    fn into_result(self) -> Result<SetCookies, AuthApiError> {
        match self {
            Canned::Accept(cookies) => Ok(SetCookies(cookies)),
            Canned::Reject { status, body } => Err(AuthApiError::Upstream { status, body }),
            Canned::Unreachable => Err(AuthApiError::Transport("connection refused".to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RecordedCall {
    pub endpoint: &'static str,
    pub cookies: Option<String>,
    pub body: Option<Value>,
}

// Fake auth API that records every call so tests can assert on traffic.
#[derive(Clone)]
pub(crate) struct RecordingApi {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    login: Canned,
    signup: Canned,
    session: Canned,
    session_user: Option<Value>,
    greeting: Canned,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            login: Canned::Accept(vec!["session=abc; Path=/; HttpOnly".to_string()]),
            signup: Canned::Accept(Vec::new()),
            session: Canned::Accept(Vec::new()),
            session_user: None,
            greeting: Canned::Accept(Vec::new()),
        }
    }

    pub(crate) fn with_login(mut self, reply: Canned) -> Self {
        self.login = reply;
        self
    }

    pub(crate) fn with_signup(mut self, reply: Canned) -> Self {
        self.signup = reply;
        self
    }

    pub(crate) fn with_session(mut self, reply: Canned) -> Self {
        self.session = reply;
        self
    }

    pub(crate) fn with_session_user(mut self, user: Value) -> Self {
        self.session_user = Some(user);
        self
    }

    pub(crate) fn with_greeting(mut self, reply: Canned) -> Self {
        self.greeting = reply;
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, endpoint: &'static str, cookies: &ForwardedCookies, body: Option<Value>) {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(RecordedCall {
                endpoint,
                cookies: cookies.as_header().map(str::to_string),
                body,
            });
    }
}

#[async_trait]
impl AuthApi for RecordingApi {
    async fn login(
        &self,
        cookies: &ForwardedCookies,
        req: &LoginPayload,
    ) -> Result<SetCookies, AuthApiError> {
        self.record(
            "login",
            cookies,
            Some(json!({ "email": req.email, "password": req.password })),
        );
        self.login.clone().into_result()
    }

    async fn signup(
        &self,
        cookies: &ForwardedCookies,
        req: &SignupPayload,
    ) -> Result<SetCookies, AuthApiError> {
        self.record(
            "signup",
            cookies,
            Some(serde_json::to_value(req).expect("signup payload serializes")),
        );
        self.signup.clone().into_result()
    }

    async fn session(&self, cookies: &ForwardedCookies) -> Result<SessionInfo, AuthApiError> {
        self.record("session", cookies, None);
        self.session.clone().into_result()?;
        Ok(SessionInfo {
            user: self.session_user.clone(),
        })
    }

    async fn greeting(&self, cookies: &ForwardedCookies) -> Result<Greeting, AuthApiError> {
        self.record("greeting", cookies, None);
        self.greeting.clone().into_result()?;
        Ok(Greeting {
            message: "Hello from the auth API".to_string(),
        })
    }
}
