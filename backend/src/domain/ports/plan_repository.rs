//! Port abstraction for plan persistence adapters.

use async_trait::async_trait;

use crate::domain::Plan;

/// Persistence errors raised by plan repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanRepositoryError {
    /// Repository connection could not be established.
    #[error("plan repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("plan repository query failed: {message}")]
    Query { message: String },
}

impl PlanRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Plan record ready for insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlan {
    pub name: String,
    pub ans_registry_code: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Fetch a plan by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Plan>, PlanRepositoryError>;

    /// Check whether any stored plan carries this exact name.
    async fn name_exists(&self, name: &str) -> Result<bool, PlanRepositoryError>;

    /// Insert a record and return it with the store-assigned identifier.
    async fn insert(&self, record: &NewPlan) -> Result<Plan, PlanRepositoryError>;

    /// Persist the mutable fields of an existing plan.
    async fn update(&self, plan: &Plan) -> Result<Plan, PlanRepositoryError>;

    /// Remove a plan by identifier.
    async fn delete(&self, id: i32) -> Result<(), PlanRepositoryError>;

    /// All plans in store-native order.
    async fn list(&self) -> Result<Vec<Plan>, PlanRepositoryError>;
}
