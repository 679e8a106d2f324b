use std::fmt;

/// Sanitized wrapper for email addresses that masks the local part before
/// the address reaches any log line.
#[derive(Debug, Clone)]
pub struct SanitizedEmail(String);

impl SanitizedEmail {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self(Self::sanitize(&email))
    }

    fn sanitize(email: &str) -> String {
        if let Some((local, domain)) = email.split_once('@') {
            let masked_local = if local.len() <= 2 {
                "*".repeat(local.len())
            } else {
                format!("{}***", &local[..1])
            };
            format!("{}@{}", masked_local, domain)
        } else {
            // Invalid email format, mask entirely
            "***@***".to_string()
        }
    }
}

impl fmt::Display for SanitizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact-form event types for structured logging
#[derive(Debug, Clone, Copy)]
pub enum ContactEvent {
    SubmissionAccepted,
    SubmissionRejected,
    MalformedSubmission,
}

impl ContactEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactEvent::SubmissionAccepted => "submission_accepted",
            ContactEvent::SubmissionRejected => "submission_rejected",
            ContactEvent::MalformedSubmission => "malformed_submission",
        }
    }

    /// Malformed payloads bypassed the page entirely and are logged louder.
    pub fn is_noteworthy(&self) -> bool {
        matches!(self, ContactEvent::MalformedSubmission)
    }
}

impl fmt::Display for ContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log a contact-form event with sanitized context
#[macro_export]
macro_rules! log_contact_event {
    ($event:expr, $($field:tt)*) => {
        if $event.is_noteworthy() {
            tracing::warn!(
                contact_event = %$event,
                event_type = "contact",
                $($field)*
            );
        } else {
            tracing::info!(
                contact_event = %$event,
                event_type = "contact",
                $($field)*
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_email() {
        assert_eq!(
            SanitizedEmail::new("user@example.com").to_string(),
            "u***@example.com"
        );
        assert_eq!(
            SanitizedEmail::new("ab@test.com").to_string(),
            "**@test.com"
        );
        assert_eq!(SanitizedEmail::new("a@test.com").to_string(), "*@test.com");
        assert_eq!(SanitizedEmail::new("invalid-email").to_string(), "***@***");
    }

    #[test]
    fn test_event_severity() {
        assert!(ContactEvent::MalformedSubmission.is_noteworthy());
        assert!(!ContactEvent::SubmissionAccepted.is_noteworthy());
        assert!(!ContactEvent::SubmissionRejected.is_noteworthy());
    }
}
