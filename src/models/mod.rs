pub mod contact;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The form's field identifiers. Every place a field name appears — input
/// `name` attributes, JSON error keys, log output — goes through this enum
/// rather than a repeated string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Content];

    /// Wire name: form key and JSON error key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Content => "content",
        }
    }

    /// User-facing label, as rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Content => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-field constraint failures with their user-facing messages. These
/// strings are also what the page template embeds for the client-side gate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Name must have at least 2 characters.")]
    NameTooShort,
    #[error("Name must not exceed 50 characters.")]
    NameTooLong,
    #[error("Invalid email.")]
    InvalidEmail,
    #[error("Message must have at least 10 characters.")]
    MessageTooShort,
    #[error("Message must not exceed 250 characters.")]
    MessageTooLong,
    #[error("Content must have at least 12 characters.")]
    ContentTooShort,
    #[error("{} is required.", .0.label())]
    Missing(Field),
}

pub type ValidationResult<T> = Result<T, ConstraintError>;

/// Field-to-message mapping reported when validation fails. Holds at most
/// one message per field; once a field has failed, later rules for it are
/// not recorded.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, error: ConstraintError) {
        self.0.entry(field).or_insert_with(|| error.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Comma-separated field names, for log lines.
    pub fn field_list(&self) -> String {
        self.fields()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
