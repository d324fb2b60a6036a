use thiserror::Error;

/// Errors that can occur while validating QR-bill data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrBillError {
    /// A single field violates a length, format or domain rule.
    #[error("validation failed: {0}")]
    Field(ValidationError),

    /// Two or more fields are individually valid but not together
    /// (QR-IBAN without QRR reference, additional information too long).
    #[error("inconsistent bill: {0}")]
    CrossField(ValidationError),

    /// A mandatory field was never supplied.
    #[error("missing mandatory field: {0}")]
    Missing(String),

    /// The value was supplied in a representation that is not accepted,
    /// e.g. a floating point amount.
    #[error("type error: {0}")]
    Type(String),
}

impl QrBillError {
    /// Shorthand for a [`QrBillError::Field`] error.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field(ValidationError::new(field, message))
    }

    /// Shorthand for a [`QrBillError::CrossField`] error.
    pub fn cross_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CrossField(ValidationError::new(field, message))
    }

    /// Name of the field the error originates from, if it concerns one.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field(e) | Self::CrossField(e) => Some(&e.field),
            Self::Missing(field) => Some(field),
            Self::Type(_) => None,
        }
    }

    /// Prefix the field path, e.g. `name` becomes `creditor.name`.
    pub(crate) fn within(self, prefix: &str) -> Self {
        match self {
            Self::Field(e) => Self::Field(e.within(prefix)),
            Self::CrossField(e) => Self::CrossField(e.within(prefix)),
            other => other,
        }
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "creditor.postal_code").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn within(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            message: self.message,
        }
    }
}
