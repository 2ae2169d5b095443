use crate::domain::entities::FormRecord;
use crate::domain::errors::SubmitError;
use crate::domain::fields::{FieldErrors, FieldName};

// Current values and field errors of one form instance, plus whether a
// submission is outstanding.
#[derive(Debug, Clone, Default)]
pub struct FormState<R> {
    record: R,
    errors: FieldErrors,
    in_flight: bool,
}

impl<R: FormRecord> FormState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_record(record: R) -> Self {
        Self {
            record,
            errors: FieldErrors::new(),
            in_flight: false,
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.record.field(field).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    // Stores a new value and drops the stale error for that field.
    pub fn edit(&mut self, field: FieldName, value: impl Into<String>) {
        if !self.record.set_field(field, value.into()) {
            return;
        }
        self.errors.clear(field);
        for resolved in self.record.resolved_by_edit(field) {
            self.errors.clear(resolved);
        }
    }

    // Runs the validator and marks the form in flight when it passes.
    pub fn begin_submit(&mut self) -> Result<R, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        match self.record.validate() {
            Ok(()) => {
                self.errors = FieldErrors::new();
                self.in_flight = true;
                Ok(self.record.clone())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Validation(errors))
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }
}
