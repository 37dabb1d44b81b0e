//! Domain ports: repository contracts consumed by the rule engines and
//! driving operation traits consumed by inbound adapters.

mod beneficiary_repository;
mod operations;
mod plan_repository;

pub use beneficiary_repository::{
    BeneficiaryRepository, BeneficiaryRepositoryError, NewBeneficiary,
};
pub use operations::{
    BeneficiaryOperations, CreateBeneficiaryRequest, CreatePlanRequest, PlanOperations,
    UpdateBeneficiaryRequest, UpdatePlanRequest,
};
pub use plan_repository::{NewPlan, PlanRepository, PlanRepositoryError};

#[cfg(test)]
pub use beneficiary_repository::MockBeneficiaryRepository;
#[cfg(test)]
pub use plan_repository::MockPlanRepository;
