use crate::domain::{
    ApiErrorBody, AuthApi, AuthApiError, ForwardedCookies, FormState, Registration, SetCookies,
    SignupPayload, SubmitError,
};

const CONFLICT: u16 = 409;

// Result of an accepted signup: a verification email is on its way.
#[derive(Debug)]
pub struct SignupSuccess {
    pub email: String,
    pub set_cookies: SetCookies,
}

// Signup submission with the auth API injected.
pub struct SignupUseCase<'a, A: ?Sized> {
    pub api: Option<&'a A>,
}

impl<A> SignupUseCase<'_, A>
where
    A: AuthApi + ?Sized,
{
    pub async fn execute(
        &self,
        form: &mut FormState<Registration>,
        cookies: &ForwardedCookies,
    ) -> Result<SignupSuccess, SubmitError> {
        let api = self.api.ok_or(SubmitError::Configuration)?;
        let registration = form.begin_submit()?;
        let payload = SignupPayload::from(&registration);

        let result = api.signup(cookies, &payload).await;
        form.finish_submit();

        let set_cookies = result.map_err(map_signup_error)?;
        Ok(SignupSuccess {
            email: payload.email,
            set_cookies,
        })
    }
}

// Only structured signals count as "already registered"; free-text
// messages are shown as-is.
fn map_signup_error(err: AuthApiError) -> SubmitError {
    if let AuthApiError::Upstream { status, body } = &err {
        if *status == CONFLICT || body.as_ref().is_some_and(ApiErrorBody::is_already_registered) {
            return SubmitError::AlreadyRegistered;
        }
    }
    SubmitError::from_api(err)
}
