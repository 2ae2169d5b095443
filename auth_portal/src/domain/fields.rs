use std::collections::BTreeMap;
use std::fmt;

// Form fields known to the portal. The string form matches the HTML input
// names and the upstream JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    MobileNumber,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::MobileNumber => "mobileNumber",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Per-field validation messages. A field is present only while its current
// value is invalid; at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    // Keeps the first violation reported for a field.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.messages.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn clear(&mut self, field: FieldName) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
