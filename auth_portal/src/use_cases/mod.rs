// Use cases layer: submission, session precheck and greeting workflows.

pub mod greeting;
pub mod in_flight;
pub mod login;
pub mod session_precheck;
pub mod signup;

#[cfg(test)]
pub(crate) mod test_support;

// Where a successful login or an existing session sends the browser.
pub const HOME_ROUTE: &str = "/";
