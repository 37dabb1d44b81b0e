//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API. It registers every beneficiary and plan endpoint plus
//! the health probes, along with the envelope and request schemas.
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Beneficiary, BeneficiaryStatus, ErrorCategory, Plan, ValidationDetail};
use crate::inbound::http::beneficiaries::{BeneficiaryCreateRequest, BeneficiaryUpdateRequest};
use crate::inbound::http::plans::{PlanCreateRequest, PlanUpdateRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beneficiary registry API",
        description = "HTTP interface for managing health-plan beneficiaries and plans."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::beneficiaries::create_beneficiary,
        crate::inbound::http::beneficiaries::list_beneficiaries,
        crate::inbound::http::beneficiaries::get_beneficiary,
        crate::inbound::http::beneficiaries::update_beneficiary,
        crate::inbound::http::beneficiaries::delete_beneficiary,
        crate::inbound::http::plans::create_plan,
        crate::inbound::http::plans::list_plans,
        crate::inbound::http::plans::get_plan,
        crate::inbound::http::plans::update_plan,
        crate::inbound::http::plans::delete_plan,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Beneficiary,
        BeneficiaryStatus,
        Plan,
        ErrorCategory,
        ValidationDetail,
        BeneficiaryCreateRequest,
        BeneficiaryUpdateRequest,
        PlanCreateRequest,
        PlanUpdateRequest,
    ))
)]
pub struct ApiDoc;
