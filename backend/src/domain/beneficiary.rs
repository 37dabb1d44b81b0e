//! Beneficiary entity and enrolment status.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Enrolment status of a beneficiary.
///
/// Serializes to the wire strings `ACTIVE` and `INACTIVE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeneficiaryStatus {
    /// Enrolled and covered.
    Active,
    /// Enrolment suspended.
    Inactive,
}

impl BeneficiaryStatus {
    /// Stable storage string for the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for BeneficiaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown beneficiary status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for BeneficiaryStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// A person enrolled under a health plan.
///
/// ## Invariants
/// - `cpf` is unique across all beneficiaries (enforced by the store).
/// - `plan_id` references an existing [`crate::domain::Plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    /// Store-assigned identifier.
    pub id: i32,
    /// Full legal name.
    pub full_name: String,
    /// CPF as given at registration, punctuation preserved.
    pub cpf: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Registration timestamp, defaulted to creation time.
    pub registered_at: DateTime<Utc>,
    /// Enrolment status, defaulted to [`BeneficiaryStatus::Active`].
    pub status: BeneficiaryStatus,
    /// Foreign key to the owning plan.
    pub plan_id: i32,
}
