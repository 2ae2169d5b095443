use crate::domain::{AuthApi, ForwardedCookies, Greeting, SubmitError};

// Fetches the demo greeting shown on /hello.
pub struct FetchGreetingUseCase<'a, A: ?Sized> {
    pub api: Option<&'a A>,
}

impl<A> FetchGreetingUseCase<'_, A>
where
    A: AuthApi + ?Sized,
{
    pub async fn execute(&self, cookies: &ForwardedCookies) -> Result<Greeting, SubmitError> {
        let api = self.api.ok_or(SubmitError::Configuration)?;
        api.greeting(cookies).await.map_err(SubmitError::from_api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{Canned, RecordingApi};

    #[tokio::test]
    async fn when_api_answers_then_greeting_is_returned() {
        let api = RecordingApi::new();
        let use_case = FetchGreetingUseCase { api: Some(&api) };

        let greeting = use_case
            .execute(&ForwardedCookies::none())
            .await
            .expect("expected greeting");

        assert_eq!(greeting.message, "Hello from the auth API");
    }

    #[tokio::test]
    async fn when_api_rejects_then_status_fallback_message_is_returned() {
        let api = RecordingApi::new().with_greeting(Canned::Reject {
            status: 500,
            body: None,
        });
        let use_case = FetchGreetingUseCase { api: Some(&api) };

        let err = use_case
            .execute(&ForwardedCookies::none())
            .await
            .expect_err("expected rejection");

        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[tokio::test]
    async fn when_base_url_is_unset_then_configuration_error_is_returned() {
        let use_case = FetchGreetingUseCase::<RecordingApi> { api: None };

        let err = use_case
            .execute(&ForwardedCookies::none())
            .await
            .expect_err("expected configuration error");

        assert!(matches!(err, SubmitError::Configuration));
    }
}
