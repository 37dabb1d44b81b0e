//! Uniform result envelope returned by every rule-engine operation.
//!
//! The engines never let an error cross the service boundary: success and
//! failure alike are expressed as envelope values, and the HTTP adapter maps
//! the error category to a status code.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure category carried by a failed envelope.
///
/// The serialized strings are part of the wire contract and must stay exactly
/// as written. `ValidationError` is deliberately overloaded: it covers
/// malformed input, duplicates, and missing records on lookup, because the
/// HTTP adapter keys its 404-vs-409 decision on the category plus the
/// operation, not on a finer taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ErrorCategory {
    /// Input or state failed a validation rule (including not-found lookups).
    ValidationError,
    /// A referenced related entity is absent.
    NotFound,
    /// The persistence collaborator failed unexpectedly.
    ServerError,
}

/// Field-level detail describing which input field and rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationDetail {
    /// Input field the rule applies to.
    pub field: String,
    /// Short rule identifier, e.g. `invalid`, `duplicate`, `not_found`.
    pub rule: String,
}

impl ValidationDetail {
    /// Build a detail record from a field/rule pair.
    pub fn new(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
        }
    }
}

/// Generic success/failure wrapper produced by the rule engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Operation payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure category, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCategory>,
    /// Human-readable outcome message.
    pub message: String,
    /// True unless the operation failed.
    pub success: bool,
    /// Field-level validation details, empty unless a rule failed.
    pub details: Vec<ValidationDetail>,
}

impl<T> ResponseEnvelope<T> {
    /// Successful outcome carrying a payload.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            error: None,
            message: message.into(),
            success: true,
            details: Vec::new(),
        }
    }

    /// Failed outcome with a category and no payload.
    pub fn failure(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(category),
            message: message.into(),
            success: false,
            details: Vec::new(),
        }
    }

    /// Attach a field/rule validation detail.
    pub fn with_detail(mut self, field: impl Into<String>, rule: impl Into<String>) -> Self {
        self.details.push(ValidationDetail::new(field, rule));
        self
    }

    /// Failure category, if the envelope represents a failure.
    pub fn category(&self) -> Option<ErrorCategory> {
        self.error
    }
}
