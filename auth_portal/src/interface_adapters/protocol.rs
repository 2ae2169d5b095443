use serde::Deserialize;

// Form-encoded bodies posted by the rendered pages. Missing fields default
// to empty so the validator, not the extractor, reports them.

// POST /login.
#[derive(Deserialize)]
pub struct LoginFormInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    // Identifies the rendered form instance for the in-flight guard.
    #[serde(default)]
    pub form_id: Option<String>,
}

// POST /signup. Field names match the upstream JSON keys.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default, rename = "form_id")]
    pub form_id: Option<String>,
}
