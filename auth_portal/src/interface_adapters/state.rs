use crate::domain::AuthApi;
use crate::use_cases::in_flight::InFlightForms;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    // None when AUTH_API_URL is not configured.
    pub auth: Option<Arc<dyn AuthApi>>,
    pub in_flight: InFlightForms,
}

impl AppState {
    pub fn new(auth: Option<Arc<dyn AuthApi>>) -> Self {
        Self {
            auth,
            in_flight: InFlightForms::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.auth.is_some()
    }
}
