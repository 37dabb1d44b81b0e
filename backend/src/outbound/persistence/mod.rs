//! Database-backed adapters for the repository ports.

mod diesel_beneficiary_repository;
mod diesel_plan_repository;
mod models;
mod pool;
pub mod schema;

pub use diesel_beneficiary_repository::DieselBeneficiaryRepository;
pub use diesel_plan_repository::DieselPlanRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
