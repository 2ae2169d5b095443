use crate::domain::{
    ApiErrorBody, AuthApi, AuthApiError, ForwardedCookies, Greeting, LoginPayload, SessionInfo,
    SetCookies, SignupPayload,
};
use async_trait::async_trait;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, RequestBuilder, Response};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const SESSION_PATH: &str = "/api/auth/session";
pub const GREETING_PATH: &str = "/api/hello";

// Thin wrapper around reqwest for the remote auth API. One request per call,
// no retries, no local timeout.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    pub base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // Sends with the browser's cookies attached and splits off non-2xx
    // responses.
    async fn send(
        &self,
        request: RequestBuilder,
        cookies: &ForwardedCookies,
    ) -> Result<Response, AuthApiError> {
        let request = match cookies.as_header() {
            Some(value) => request.header(COOKIE, value),
            None => request,
        };
        let res = request
            .send()
            .await
            .map_err(|err| AuthApiError::Transport(err.to_string()))?;
        let status = res.status();

        // Keep upstream status/message so the page can show the server's reason.
        if !status.is_success() {
            let body = res.json::<ApiErrorBody>().await.ok();
            return Err(AuthApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res)
    }
}

fn set_cookies(res: &Response) -> SetCookies {
    SetCookies(
        res.headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect(),
    )
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(
        &self,
        cookies: &ForwardedCookies,
        req: &LoginPayload,
    ) -> Result<SetCookies, AuthApiError> {
        let request = self.http.post(self.url(LOGIN_PATH)).json(req);
        let res = self.send(request, cookies).await?;
        Ok(set_cookies(&res))
    }

    async fn signup(
        &self,
        cookies: &ForwardedCookies,
        req: &SignupPayload,
    ) -> Result<SetCookies, AuthApiError> {
        let request = self.http.post(self.url(SIGNUP_PATH)).json(req);
        let res = self.send(request, cookies).await?;
        Ok(set_cookies(&res))
    }

    async fn session(&self, cookies: &ForwardedCookies) -> Result<SessionInfo, AuthApiError> {
        let request = self.http.get(self.url(SESSION_PATH));
        let res = self.send(request, cookies).await?;

        // An empty or non-JSON body simply means "no session".
        let bytes = res
            .bytes()
            .await
            .map_err(|err| AuthApiError::Transport(err.to_string()))?;
        Ok(serde_json::from_slice::<SessionInfo>(&bytes).unwrap_or_default())
    }

    async fn greeting(&self, cookies: &ForwardedCookies) -> Result<Greeting, AuthApiError> {
        let request = self.http.get(self.url(GREETING_PATH));
        let res = self.send(request, cookies).await?;
        res.json::<Greeting>()
            .await
            .map_err(|err| AuthApiError::Decode(err.to_string()))
    }
}
