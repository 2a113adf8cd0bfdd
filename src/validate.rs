//! Form field validation rules.
//!
//! The contact and newsletter forms are submitted by the embedded runtime
//! script to an endpoint configured in the content tree; the generator never
//! performs the POST itself. What it does own is the validation contract:
//! the rules below are the single source of truth, used to emit the HTML
//! constraint attributes (`minlength`, `maxlength`, `required`, `type`) and
//! re-implemented verbatim in `static/site.js` for inline feedback.
//!
//! Validation failures are field-scoped and block submission; they are never
//! network faults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message length bounds, shared with the textarea's constraint attributes.
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;
/// Name length bounds.
pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
/// Minimum phone length, applied only when a phone number was entered.
pub const PHONE_MIN: usize = 10;
/// Minimum subject length, applied only when a subject was entered.
pub const SUBJECT_MIN: usize = 3;

/// A contact form payload as it would be POSTed to the submit endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// A newsletter signup payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The form field an error is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        };
        f.write_str(s)
    }
}

/// A single field-scoped validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a contact submission. Returns every failing field, not just the
/// first, so the form can surface all inline errors at once.
pub fn validate_contact(submission: &ContactSubmission) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = submission.name.trim();
    if name.chars().count() < NAME_MIN {
        errors.push(FieldError::new(
            Field::Name,
            format!("Name must be at least {NAME_MIN} characters"),
        ));
    } else if name.chars().count() > NAME_MAX {
        errors.push(FieldError::new(
            Field::Name,
            format!("Name must be at most {NAME_MAX} characters"),
        ));
    }

    if !is_valid_email(submission.email.trim()) {
        errors.push(FieldError::new(Field::Email, "Invalid email address"));
    }

    // Phone and subject are optional; an empty string counts as absent.
    if let Some(phone) = non_empty(submission.phone.as_deref())
        && phone.chars().count() < PHONE_MIN
    {
        errors.push(FieldError::new(
            Field::Phone,
            format!("Phone number must be at least {PHONE_MIN} digits"),
        ));
    }
    if let Some(subject) = non_empty(submission.subject.as_deref())
        && subject.chars().count() < SUBJECT_MIN
    {
        errors.push(FieldError::new(
            Field::Subject,
            format!("Subject must be at least {SUBJECT_MIN} characters"),
        ));
    }

    let message_len = submission.message.trim().chars().count();
    if message_len < MESSAGE_MIN {
        errors.push(FieldError::new(
            Field::Message,
            format!("Message must be at least {MESSAGE_MIN} characters"),
        ));
    } else if message_len > MESSAGE_MAX {
        errors.push(FieldError::new(
            Field::Message,
            format!("Message must be at most {MESSAGE_MAX} characters"),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a newsletter signup: email syntax, optional name length.
pub fn validate_newsletter(signup: &NewsletterSignup) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !is_valid_email(signup.email.trim()) {
        errors.push(FieldError::new(Field::Email, "Invalid email address"));
    }
    if let Some(name) = non_empty(signup.name.as_deref())
        && name.chars().count() < NAME_MIN
    {
        errors.push(FieldError::new(
            Field::Name,
            format!("Name must be at least {NAME_MIN} characters"),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Minimal email syntax check: one `@` with a non-empty local part and a
/// dotted domain, no whitespace. Deliverability is the endpoint's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn rejects_short_name_bad_email_short_message() {
        let submission = ContactSubmission {
            name: "Jo".to_string(),
            email: "not-an-email".to_string(),
            message: "short".to_string(),
            ..Default::default()
        };
        let errors = validate_contact(&submission).unwrap_err();
        // "Jo" is exactly 2 chars, which passes; email and message fail.
        assert_eq!(fields(&errors), vec![Field::Email, Field::Message]);
    }

    #[test]
    fn accepts_well_formed_submission() {
        let submission = ContactSubmission {
            name: "Jo Smith".to_string(),
            email: "jo@x.com".to_string(),
            message: "This is a long enough message.".to_string(),
            ..Default::default()
        };
        assert!(validate_contact(&submission).is_ok());
    }

    #[test]
    fn name_under_two_chars_fails() {
        let submission = ContactSubmission {
            name: "J".to_string(),
            email: "jo@x.com".to_string(),
            message: "This is a long enough message.".to_string(),
            ..Default::default()
        };
        let errors = validate_contact(&submission).unwrap_err();
        assert_eq!(fields(&errors), vec![Field::Name]);
    }

    #[test]
    fn empty_phone_and_subject_are_not_errors() {
        let submission = ContactSubmission {
            name: "Jo Smith".to_string(),
            email: "jo@x.com".to_string(),
            phone: Some(String::new()),
            subject: Some("   ".to_string()),
            message: "This is a long enough message.".to_string(),
        };
        assert!(validate_contact(&submission).is_ok());
    }

    #[test]
    fn short_phone_fails_when_provided() {
        let submission = ContactSubmission {
            name: "Jo Smith".to_string(),
            email: "jo@x.com".to_string(),
            phone: Some("12345".to_string()),
            message: "This is a long enough message.".to_string(),
            ..Default::default()
        };
        let errors = validate_contact(&submission).unwrap_err();
        assert_eq!(fields(&errors), vec![Field::Phone]);
    }

    #[test]
    fn short_subject_fails_when_provided() {
        let submission = ContactSubmission {
            name: "Jo Smith".to_string(),
            email: "jo@x.com".to_string(),
            subject: Some("hi".to_string()),
            message: "This is a long enough message.".to_string(),
            ..Default::default()
        };
        let errors = validate_contact(&submission).unwrap_err();
        assert_eq!(fields(&errors), vec![Field::Subject]);
    }

    #[test]
    fn message_over_max_fails() {
        let submission = ContactSubmission {
            name: "Jo Smith".to_string(),
            email: "jo@x.com".to_string(),
            message: "x".repeat(MESSAGE_MAX + 1),
            ..Default::default()
        };
        let errors = validate_contact(&submission).unwrap_err();
        assert_eq!(fields(&errors), vec![Field::Message]);
    }

    #[test]
    fn email_syntax_cases() {
        assert!(is_valid_email("jo@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jo@"));
        assert!(!is_valid_email("jo@nodot"));
        assert!(!is_valid_email("jo@x.c"));
        assert!(!is_valid_email("jo smith@x.com"));
        assert!(!is_valid_email("jo@@x.com"));
    }

    #[test]
    fn newsletter_requires_valid_email_only() {
        assert!(
            validate_newsletter(&NewsletterSignup {
                email: "jo@x.com".to_string(),
                name: None,
            })
            .is_ok()
        );
        let errors = validate_newsletter(&NewsletterSignup {
            email: "nope".to_string(),
            name: Some("J".to_string()),
        })
        .unwrap_err();
        assert_eq!(fields(&errors), vec![Field::Email, Field::Name]);
    }
}
