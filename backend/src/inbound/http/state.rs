//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BeneficiaryOperations, PlanOperations};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub beneficiaries: Arc<dyn BeneficiaryOperations>,
    pub plans: Arc<dyn PlanOperations>,
}

impl HttpState {
    /// Construct state from the two rule-engine ports.
    pub fn new(
        beneficiaries: Arc<dyn BeneficiaryOperations>,
        plans: Arc<dyn PlanOperations>,
    ) -> Self {
        Self {
            beneficiaries,
            plans,
        }
    }
}
