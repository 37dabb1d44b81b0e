//! Domain entities, validation rules, and the rule-engine services.
//!
//! Purpose: keep the business rules transport- and storage-agnostic. The
//! engines consume repository ports from [`ports`] and produce
//! [`ResponseEnvelope`] values; inbound adapters translate the envelope's
//! error category into protocol responses.

pub mod beneficiary;
mod beneficiary_service;
pub mod cpf;
pub mod envelope;
mod plan;
mod plan_service;
pub mod ports;

pub use self::beneficiary::{Beneficiary, BeneficiaryStatus, ParseStatusError};
pub use self::beneficiary_service::BeneficiaryService;
pub use self::envelope::{ErrorCategory, ResponseEnvelope, ValidationDetail};
pub use self::plan::Plan;
pub use self::plan_service::PlanService;
