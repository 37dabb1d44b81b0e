//! Health-plan entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A health-insurance product beneficiaries are enrolled in.
///
/// The relation to beneficiaries is one-directional: a beneficiary holds a
/// `plan_id`, and the plan does not carry its beneficiary collection. This
/// keeps the serialized entity cycle-free.
///
/// ## Invariants
/// - `name` is unique across all plans (enforced by the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Store-assigned identifier.
    pub id: i32,
    /// Unique plan name.
    pub name: String,
    /// External ANS registry code.
    pub ans_registry_code: String,
}
