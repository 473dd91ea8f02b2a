//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// A closed taxonomy of deterministic domain failures, compared by kind
/// (variant), never by instance identity. Infrastructure failures belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Recipe name missing at construction or update.
    #[error("recipe name is required")]
    NameRequired,

    /// Ingredient list missing or empty at construction or update.
    #[error("at least one ingredient is required")]
    IngredientsRequired,

    /// Instructions missing; enforced by the service layer around
    /// construction/update, not by the factory itself.
    #[error("recipe instructions are required")]
    InstructionsRequired,

    /// A value failed validation (e.g. negative amount, non-positive yield).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Malformed textual input (e.g. a quantity string).
    #[error("parse failed: {0}")]
    Parse(String),

    /// Requested unit conversion has no defined rule.
    #[error("conversion from {from} to {to} not supported")]
    UnsupportedConversion { from: String, to: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Stable wire code for this error kind, used by boundary layers when
    /// mapping to client-facing responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::IngredientsRequired => "ingredients_required",
            Self::InstructionsRequired => "instructions_required",
            Self::Validation(_) => "validation_error",
            Self::Parse(_) => "parse_error",
            Self::UnsupportedConversion { .. } => "unsupported_conversion",
            Self::InvalidId(_) => "invalid_id",
            Self::NotFound => "not_found",
        }
    }
}
