use crate::domain::{
    AuthApi, Credentials, ForwardedCookies, FormState, LoginPayload, SetCookies, SubmitError,
};
use crate::use_cases::HOME_ROUTE;

// Result of an accepted login.
#[derive(Debug)]
pub struct LoginSuccess {
    pub redirect_to: &'static str,
    pub set_cookies: SetCookies,
}

// Login submission with the auth API injected. `None` means the base URL
// was never configured.
pub struct LoginUseCase<'a, A: ?Sized> {
    pub api: Option<&'a A>,
}

impl<A> LoginUseCase<'_, A>
where
    A: AuthApi + ?Sized,
{
    pub async fn execute(
        &self,
        form: &mut FormState<Credentials>,
        cookies: &ForwardedCookies,
    ) -> Result<LoginSuccess, SubmitError> {
        let api = self.api.ok_or(SubmitError::Configuration)?;
        let credentials = form.begin_submit()?;

        let result = api.login(cookies, &LoginPayload::from(&credentials)).await;
        form.finish_submit();

        let set_cookies = result.map_err(SubmitError::from_api)?;
        Ok(LoginSuccess {
            redirect_to: HOME_ROUTE,
            set_cookies,
        })
    }
}
