use crate::domain::fields::{FieldErrors, FieldName};
use crate::domain::validation::{validate_credentials, validate_registration};

// Login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Signup form values. Lives only for one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
}

// A set of form values the form state holder can edit and validate.
pub trait FormRecord: Clone + Default {
    // Returns false when the record has no such field.
    fn set_field(&mut self, field: FieldName, value: String) -> bool;

    fn field(&self, field: FieldName) -> Option<&str>;

    fn validate(&self) -> Result<(), FieldErrors>;

    // Errors on other fields that an edit to `field` may have resolved.
    fn resolved_by_edit(&self, _field: FieldName) -> Vec<FieldName> {
        Vec::new()
    }
}

impl FormRecord for Credentials {
    fn set_field(&mut self, field: FieldName, value: String) -> bool {
        match field {
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
            _ => return false,
        }
        true
    }

    fn field(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Email => Some(self.email.as_str()),
            FieldName::Password => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        validate_credentials(self)
    }
}

impl FormRecord for Registration {
    fn set_field(&mut self, field: FieldName, value: String) -> bool {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::MobileNumber => self.mobile_number = value,
            FieldName::Password => self.password = value,
            FieldName::ConfirmPassword => self.confirm_password = value,
        }
        true
    }

    fn field(&self, field: FieldName) -> Option<&str> {
        Some(match field {
            FieldName::Name => self.name.as_str(),
            FieldName::Email => self.email.as_str(),
            FieldName::MobileNumber => self.mobile_number.as_str(),
            FieldName::Password => self.password.as_str(),
            FieldName::ConfirmPassword => self.confirm_password.as_str(),
        })
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        validate_registration(self)
    }

    fn resolved_by_edit(&self, field: FieldName) -> Vec<FieldName> {
        // The mismatch is reported on confirmPassword, so fixing the
        // password side must be able to clear it too.
        if field == FieldName::Password && self.password == self.confirm_password {
            vec![FieldName::ConfirmPassword]
        } else {
            Vec::new()
        }
    }
}
