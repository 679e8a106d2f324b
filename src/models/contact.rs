use serde::Deserialize;

use super::{ConstraintError, Field, FieldErrors, ValidationResult};

// Constraint bounds, counted in Unicode scalar values on both sides of the
// wire (the page script counts code points the same way).
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const CONTENT_MIN_CHARS_CLIENT: usize = 10;
pub const CONTENT_MAX_CHARS: usize = 250;
pub const CONTENT_MIN_CHARS_SERVER: usize = 12;

/// Field values exactly as they arrived in the form body. Every field is
/// optional so an absent key stays distinguishable from an empty string.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

/// A submission that has passed the authoritative server-side checks. Not
/// persisted anywhere; it is acknowledged and dropped by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub content: String,
}

/// Pre-submission rules. The page script is rendered from these constants
/// and messages, so this module is the single definition the browser-side
/// gate mirrors. Stricter than the server for `email` (full grammar vs.
/// "contains @") and looser for `content` (minimum 10 vs. 12).
pub mod client {
    use super::*;

    pub fn validate(name: &str, email: &str, content: &str) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(err) = ensure_name(name) {
            errors.insert(Field::Name, err);
        }
        if let Err(err) = ensure_email(email) {
            errors.insert(Field::Email, err);
        }
        if let Err(err) = ensure_content(content) {
            errors.insert(Field::Content, err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn ensure_name(value: &str) -> ValidationResult<()> {
        let len = value.chars().count();
        if len < NAME_MIN_CHARS {
            return Err(ConstraintError::NameTooShort);
        }
        if len > NAME_MAX_CHARS {
            return Err(ConstraintError::NameTooLong);
        }
        Ok(())
    }

    pub(crate) fn ensure_email(value: &str) -> ValidationResult<()> {
        let mut parts = value.split('@');
        let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
            tracing::debug!("Email validation failed: missing @");
            return Err(ConstraintError::InvalidEmail);
        };
        if parts.next().is_some() {
            tracing::debug!("Email validation failed: multiple @ symbols");
            return Err(ConstraintError::InvalidEmail);
        }

        if local.is_empty() || domain.len() < 3 || !domain.contains('.') {
            tracing::debug!(
                local_empty = local.is_empty(),
                domain_length = domain.len(),
                has_dot = domain.contains('.'),
                "Email validation failed: invalid local or domain part"
            );
            return Err(ConstraintError::InvalidEmail);
        }

        if !value.chars().all(|c| c.is_ascii_graphic()) {
            tracing::debug!("Email validation failed: contains invalid characters");
            return Err(ConstraintError::InvalidEmail);
        }

        Ok(())
    }

    pub(crate) fn ensure_content(value: &str) -> ValidationResult<()> {
        let len = value.chars().count();
        if len < CONTENT_MIN_CHARS_CLIENT {
            return Err(ConstraintError::MessageTooShort);
        }
        if len > CONTENT_MAX_CHARS {
            return Err(ConstraintError::MessageTooLong);
        }
        Ok(())
    }
}

/// Authoritative rules applied by the request handler. A missing field is
/// reported as its own failure; for present fields the first failing rule
/// wins, one message per field.
pub mod server {
    use super::*;

    pub fn validate(raw: &RawContactSubmission) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = check(&mut errors, Field::Name, raw.name.as_deref(), ensure_name);
        let email = check(&mut errors, Field::Email, raw.email.as_deref(), ensure_email);
        let content = check(
            &mut errors,
            Field::Content,
            raw.content.as_deref(),
            ensure_content,
        );

        match (name, email, content) {
            (Some(name), Some(email), Some(content)) => Ok(ContactSubmission {
                name: name.to_owned(),
                email: email.to_owned(),
                content: content.to_owned(),
            }),
            _ => Err(errors),
        }
    }

    fn check<'a>(
        errors: &mut FieldErrors,
        field: Field,
        value: Option<&'a str>,
        rule: fn(&str) -> ValidationResult<()>,
    ) -> Option<&'a str> {
        let Some(value) = value else {
            errors.insert(field, ConstraintError::Missing(field));
            return None;
        };

        match rule(value) {
            Ok(()) => Some(value),
            Err(err) => {
                errors.insert(field, err);
                None
            }
        }
    }

    pub(crate) fn ensure_name(value: &str) -> ValidationResult<()> {
        if value.chars().count() < NAME_MIN_CHARS {
            return Err(ConstraintError::NameTooShort);
        }
        Ok(())
    }

    // Accepts any address containing an '@'; the page gate applies the full
    // grammar.
    pub(crate) fn ensure_email(value: &str) -> ValidationResult<()> {
        if !value.contains('@') {
            return Err(ConstraintError::InvalidEmail);
        }
        Ok(())
    }

    pub(crate) fn ensure_content(value: &str) -> ValidationResult<()> {
        if value.chars().count() < CONTENT_MIN_CHARS_SERVER {
            return Err(ConstraintError::ContentTooShort);
        }
        Ok(())
    }
}
