//! Port abstraction for beneficiary persistence adapters.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Beneficiary, BeneficiaryStatus};

/// Persistence errors raised by beneficiary repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BeneficiaryRepositoryError {
    /// Repository connection could not be established.
    #[error("beneficiary repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("beneficiary repository query failed: {message}")]
    Query { message: String },
}

impl BeneficiaryRepositoryError {
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

/// Fully defaulted beneficiary record ready for insertion.
///
/// The rule engine fills `registered_at` and `status` before handing the
/// record to the adapter; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBeneficiary {
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub registered_at: DateTime<Utc>,
    pub status: BeneficiaryStatus,
    pub plan_id: i32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeneficiaryRepository: Send + Sync {
    /// Fetch a beneficiary by identifier.
    async fn find_by_id(&self, id: i32)
        -> Result<Option<Beneficiary>, BeneficiaryRepositoryError>;

    /// Check whether any stored beneficiary carries this exact CPF string.
    ///
    /// Comparison is literal; stored and candidate values are not normalised.
    async fn cpf_exists(&self, cpf: &str) -> Result<bool, BeneficiaryRepositoryError>;

    /// Insert a record and return it with the store-assigned identifier.
    async fn insert(
        &self,
        record: &NewBeneficiary,
    ) -> Result<Beneficiary, BeneficiaryRepositoryError>;

    /// Persist the mutable fields of an existing beneficiary.
    async fn update(
        &self,
        beneficiary: &Beneficiary,
    ) -> Result<Beneficiary, BeneficiaryRepositoryError>;

    /// Remove a beneficiary by identifier.
    async fn delete(&self, id: i32) -> Result<(), BeneficiaryRepositoryError>;

    /// All beneficiaries in store-native order.
    async fn list(&self) -> Result<Vec<Beneficiary>, BeneficiaryRepositoryError>;
}
