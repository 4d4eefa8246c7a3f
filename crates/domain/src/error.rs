//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomecareError`] via `#[from]` (or a manual `From` for boxed sources).

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum HomecareError {
    /// Input failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record looked up by identifier does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A uniqueness constraint was violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The backing store failed in a way callers cannot recover from.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),
}

impl FieldError {
    /// Name of the field this error is about.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(field) | Self::InvalidEmail(field) | Self::TooShort { field, .. } => {
                *field
            }
        }
    }
}

/// Validation failures for insertable shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed their rules, in declaration order.
    #[error("Validation error: {}", join(.0))]
    Fields(Vec<FieldError>),

    /// The request body could not be decoded into the expected shape.
    #[error("Validation error: {0}")]
    Body(String),
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human readable entity name, e.g. `"Service category"`.
    pub entity: &'static str,
    /// The identifier that was looked up, as text.
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

/// A uniqueness constraint rejected an insert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Username already taken")]
    UsernameTaken(String),
}
