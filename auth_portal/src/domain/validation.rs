use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::{Credentials, Registration};
use crate::domain::fields::{FieldErrors, FieldName};

pub const PASSWORD_MIN_LEN: usize = 6;
pub const MOBILE_NUMBER_MIN_LEN: usize = 8;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MOBILE_NUMBER_TOO_SHORT: &str = "Mobile number must be at least 8 characters";
pub const MOBILE_NUMBER_INVALID: &str = "Please enter a valid mobile number";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static MOBILE_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn mobile_number_regex() -> &'static Regex {
    MOBILE_NUMBER_RE.get_or_init(|| {
        // Length is checked separately; this only constrains the charset.
        Regex::new(r"^\+?[0-9\s-]+$")
            .unwrap_or_else(|error| panic!("mobile number regex failed to compile: {error}"))
    })
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_email(&credentials.email, &mut errors);
    check_password(&credentials.password, &mut errors);
    into_result(errors)
}

pub fn validate_registration(registration: &Registration) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if registration.name.trim().is_empty() {
        errors.insert(FieldName::Name, NAME_REQUIRED);
    }
    check_email(&registration.email, &mut errors);
    check_mobile_number(&registration.mobile_number, &mut errors);
    check_password(&registration.password, &mut errors);
    if registration.confirm_password != registration.password {
        errors.insert(FieldName::ConfirmPassword, PASSWORDS_DO_NOT_MATCH);
    }
    into_result(errors)
}

fn check_email(value: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.insert(FieldName::Email, EMAIL_REQUIRED);
    } else if !email_regex().is_match(value.trim()) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }
}

fn check_password(value: &str, errors: &mut FieldErrors) {
    if value.chars().count() < PASSWORD_MIN_LEN {
        errors.insert(FieldName::Password, PASSWORD_TOO_SHORT);
    }
}

fn check_mobile_number(value: &str, errors: &mut FieldErrors) {
    // Checked as sent: the signup payload trims the number.
    let value = value.trim();
    if value.chars().count() < MOBILE_NUMBER_MIN_LEN {
        errors.insert(FieldName::MobileNumber, MOBILE_NUMBER_TOO_SHORT);
    } else if !mobile_number_regex().is_match(value) {
        errors.insert(FieldName::MobileNumber, MOBILE_NUMBER_INVALID);
    }
}

fn into_result(errors: FieldErrors) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
