use std::fmt::Write;

use uuid::Uuid;

use crate::domain::errors::CONFIGURATION_MESSAGE;
use crate::domain::{
    Credentials, FieldName, FormRecord, FormState, Greeting, Registration, SubmitError,
};

// Server-rendered pages. Every interpolated value goes through `escape`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }
}

// Everything a form page needs to render one form instance.
pub struct FormView<'a, R> {
    pub form: &'a FormState<R>,
    pub form_id: Uuid,
    pub notice: Option<Notice>,
    pub configured: bool,
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn notice_html(notice: &Notice) -> String {
    let (class, role) = match notice.kind {
        NoticeKind::Error => ("notice notice-error", "alert"),
        NoticeKind::Success => ("notice notice-success", "status"),
    };
    format!(
        "<p class=\"{class}\" role=\"{role}\">{}</p>\n",
        escape(&notice.text)
    )
}

fn configuration_banner(configured: bool) -> String {
    if configured {
        String::new()
    } else {
        notice_html(&Notice::error(CONFIGURATION_MESSAGE))
    }
}

#[derive(Clone, Copy)]
enum InputKind {
    Text,
    Email,
    Tel,
    Password,
}

impl InputKind {
    fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Password => "password",
        }
    }
}

fn input_html<R: FormRecord>(
    out: &mut String,
    form: &FormState<R>,
    field: FieldName,
    label: &str,
    kind: InputKind,
) {
    let name = field.as_str();
    // Passwords are never echoed back into the page.
    let value = match kind {
        InputKind::Password => "",
        _ => form.value(field),
    };
    let error = form.errors().get(field);
    let invalid = if error.is_some() {
        " aria-invalid=\"true\""
    } else {
        ""
    };

    let _ = write!(
        out,
        "<label for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{value}\"{invalid}>\n",
        label = escape(label),
        kind = kind.as_str(),
        value = escape(value),
    );
    if let Some(message) = error {
        let _ = writeln!(
            out,
            "<p class=\"field-error\" id=\"{name}-error\">{}</p>",
            escape(message)
        );
    }
}

fn form_open(out: &mut String, action: &str, form_id: Uuid) {
    // Disable the trigger once the browser submits, one request per form.
    let _ = write!(
        out,
        "<form method=\"post\" action=\"{action}\" \
         onsubmit=\"this.querySelector('button[type=submit]').disabled = true\">\n\
         <input type=\"hidden\" name=\"form_id\" value=\"{form_id}\">\n"
    );
}

fn form_close(out: &mut String, label: &str, configured: bool) {
    let disabled = if configured { "" } else { " disabled" };
    let _ = write!(
        out,
        "<button type=\"submit\"{disabled}>{}</button>\n</form>\n",
        escape(label)
    );
}

pub fn login_page(view: &FormView<'_, Credentials>) -> String {
    let mut body = String::from("<h1>Log in</h1>\n");
    body.push_str(&configuration_banner(view.configured));
    if let Some(notice) = &view.notice {
        body.push_str(&notice_html(notice));
    }

    form_open(&mut body, "/login", view.form_id);
    input_html(&mut body, view.form, FieldName::Email, "Email", InputKind::Email);
    input_html(&mut body, view.form, FieldName::Password, "Password", InputKind::Password);
    form_close(&mut body, "Log in", view.configured);

    body.push_str("<p>No account yet? <a href=\"/signup\">Sign up</a></p>\n");
    layout("Log in", &body)
}

pub fn signup_page(view: &FormView<'_, Registration>) -> String {
    let mut body = String::from("<h1>Create an account</h1>\n");
    body.push_str(&configuration_banner(view.configured));
    if let Some(notice) = &view.notice {
        body.push_str(&notice_html(notice));
    }

    form_open(&mut body, "/signup", view.form_id);
    input_html(&mut body, view.form, FieldName::Name, "Name", InputKind::Text);
    input_html(&mut body, view.form, FieldName::Email, "Email", InputKind::Email);
    input_html(
        &mut body,
        view.form,
        FieldName::MobileNumber,
        "Mobile number",
        InputKind::Tel,
    );
    input_html(&mut body, view.form, FieldName::Password, "Password", InputKind::Password);
    input_html(
        &mut body,
        view.form,
        FieldName::ConfirmPassword,
        "Confirm password",
        InputKind::Password,
    );
    form_close(&mut body, "Sign up", view.configured);

    body.push_str("<p>Already registered? <a href=\"/login\">Log in</a></p>\n");
    layout("Sign up", &body)
}

pub fn signup_success_page(email: &str) -> String {
    let body = format!(
        "<h1>Check your email</h1>\n{}\
         <p>Follow the link in the message to verify your account, \
         then <a href=\"/login\">log in</a>.</p>\n",
        notice_html(&Notice::success(format!(
            "We sent a verification link to {email}."
        ))),
    );
    layout("Check your email", &body)
}

pub fn home_page() -> String {
    let body = "<h1>Welcome</h1>\n\
                <ul>\n\
                <li><a href=\"/login\">Log in</a></li>\n\
                <li><a href=\"/signup\">Sign up</a></li>\n\
                <li><a href=\"/hello\">Say hello to the API</a></li>\n\
                </ul>\n";
    layout("Home", body)
}

pub fn greeting_page(result: &Result<Greeting, SubmitError>) -> String {
    let mut body = String::from("<h1>Hello</h1>\n");
    match result {
        Ok(greeting) => {
            let _ = writeln!(body, "<p class=\"greeting\">{}</p>", escape(&greeting.message));
        }
        Err(err) => body.push_str(&notice_html(&Notice::error(err.to_string()))),
    }
    body.push_str("<p><a href=\"/\">Back home</a></p>\n");
    layout("Hello", &body)
}
