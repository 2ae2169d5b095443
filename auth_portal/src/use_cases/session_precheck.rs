use crate::domain::{AuthApi, ForwardedCookies};
use crate::use_cases::HOME_ROUTE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecheckOutcome {
    // An active session exists; skip the form.
    Redirect(&'static str),
    ShowForm,
}

// Single-shot check for an existing session before the login form renders.
pub struct SessionPrecheckUseCase<'a, A: ?Sized> {
    pub api: Option<&'a A>,
}

impl<A> SessionPrecheckUseCase<'_, A>
where
    A: AuthApi + ?Sized,
{
    pub async fn execute(&self, cookies: &ForwardedCookies) -> PrecheckOutcome {
        let Some(api) = self.api else {
            return PrecheckOutcome::ShowForm;
        };

        match api.session(cookies).await {
            Ok(info) if info.is_active() => PrecheckOutcome::Redirect(HOME_ROUTE),
            Ok(_) => PrecheckOutcome::ShowForm,
            Err(error) => {
                // Never block the form on a failed check.
                tracing::warn!(%error, "session precheck failed.");
                PrecheckOutcome::ShowForm
            }
        }
    }
}
