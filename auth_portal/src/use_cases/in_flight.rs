use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

// Registry of form instances with a submission outstanding. Each rendered
// form carries its own id, so this enforces one request per form across
// separate HTTP requests.
#[derive(Clone, Default)]
pub struct InFlightForms {
    ids: Arc<Mutex<HashSet<Uuid>>>,
}

impl InFlightForms {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns None while another submission for `form_id` is outstanding.
    pub fn try_begin(&self, form_id: Uuid) -> Option<InFlightPermit> {
        if !self.lock().insert(form_id) {
            return None;
        }
        Some(InFlightPermit {
            ids: Arc::clone(&self.ids),
            form_id,
        })
    }

    #[cfg(test)]
    pub fn is_in_flight(&self, form_id: Uuid) -> bool {
        self.lock().contains(&form_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<Uuid>> {
        // The set stays consistent even if a holder panicked.
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// Releases the form id when dropped, including when the request future is
// abandoned mid-flight.
pub struct InFlightPermit {
    ids: Arc<Mutex<HashSet<Uuid>>>,
    form_id: Uuid,
}

#[cfg(test)]
impl InFlightPermit {
    pub fn form_id(&self) -> Uuid {
        self.form_id
    }
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.form_id);
    }
}
