//! Boundary validation helpers for inbound HTTP payloads.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{ErrorCategory, ResponseEnvelope};

static CPF_PATTERN: OnceLock<Regex> = OnceLock::new();

/// CPF input pattern accepted at the boundary: `000.000.000-00` or eleven
/// bare digits. Shape semantics beyond the pattern (repeated digits) belong
/// to the rule engine, not the boundary.
fn cpf_pattern() -> &'static Regex {
    CPF_PATTERN.get_or_init(|| {
        let pattern = r"^(\d{3}\.\d{3}\.\d{3}-\d{2}|\d{11})$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("CPF pattern failed to compile: {error}"))
    })
}

/// Check a CPF against the boundary input pattern.
pub(crate) fn cpf_matches_pattern(cpf: &str) -> bool {
    cpf_pattern().is_match(cpf)
}

/// Envelope returned with a 400 when a CPF misses the input pattern.
pub(crate) fn cpf_format_envelope<T>() -> ResponseEnvelope<T> {
    ResponseEnvelope::failure(
        ErrorCategory::ValidationError,
        "CPF must match 000.000.000-00 or 00000000000",
    )
    .with_detail("cpf", "format")
}
