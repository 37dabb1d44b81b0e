//! Beneficiary HTTP handlers.
//!
//! ```text
//! POST   /api/v1/beneficiaries
//! GET    /api/v1/beneficiaries
//! GET    /api/v1/beneficiaries/{id}
//! PUT    /api/v1/beneficiaries/{id}
//! DELETE /api/v1/beneficiaries/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::{CreateBeneficiaryRequest, UpdateBeneficiaryRequest};
use crate::domain::{Beneficiary, BeneficiaryStatus, ResponseEnvelope};
use crate::inbound::http::respond;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{cpf_format_envelope, cpf_matches_pattern};

/// Request payload for creating a beneficiary.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryCreateRequest {
    /// Full legal name.
    pub full_name: String,
    /// CPF in `000.000.000-00` or bare eleven-digit form.
    #[schema(example = "123.456.789-10")]
    pub cpf: String,
    /// Date of birth (ISO 8601 date).
    pub birth_date: NaiveDate,
    /// Identifier of an existing plan.
    pub plan_id: i32,
}

/// Request payload for editing a beneficiary.
///
/// The body identifier is authoritative; the path segment is informational.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryUpdateRequest {
    pub id: i32,
    pub full_name: String,
    #[schema(example = "123.456.789-10")]
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub status: BeneficiaryStatus,
}

/// Create a beneficiary.
#[utoipa::path(
    post,
    path = "/api/v1/beneficiaries",
    request_body = BeneficiaryCreateRequest,
    responses(
        (status = 201, description = "Beneficiary created", body = ResponseEnvelope<Beneficiary>),
        (status = 400, description = "CPF misses the input pattern", body = ResponseEnvelope<Beneficiary>),
        (status = 404, description = "Referenced plan does not exist", body = ResponseEnvelope<Beneficiary>),
        (status = 409, description = "CPF invalid or already registered", body = ResponseEnvelope<Beneficiary>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Beneficiary>)
    ),
    tags = ["beneficiaries"],
    operation_id = "createBeneficiary"
)]
#[post("/beneficiaries")]
pub async fn create_beneficiary(
    state: web::Data<HttpState>,
    payload: web::Json<BeneficiaryCreateRequest>,
) -> HttpResponse {
    let payload = payload.into_inner();
    if !cpf_matches_pattern(&payload.cpf) {
        return HttpResponse::BadRequest().json(cpf_format_envelope::<Beneficiary>());
    }

    let envelope = state
        .beneficiaries
        .create(CreateBeneficiaryRequest {
            full_name: payload.full_name,
            cpf: payload.cpf,
            birth_date: payload.birth_date,
            plan_id: payload.plan_id,
        })
        .await;

    respond::created(envelope, |beneficiary| {
        format!("/api/v1/beneficiaries/{}", beneficiary.id)
    })
}

/// List all beneficiaries.
///
/// The list is unfiltered and unpaginated; status/plan filtering is a
/// caller-side concern.
#[utoipa::path(
    get,
    path = "/api/v1/beneficiaries",
    responses(
        (status = 200, description = "All beneficiaries", body = ResponseEnvelope<Vec<Beneficiary>>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Vec<Beneficiary>>)
    ),
    tags = ["beneficiaries"],
    operation_id = "listBeneficiaries"
)]
#[get("/beneficiaries")]
pub async fn list_beneficiaries(state: web::Data<HttpState>) -> HttpResponse {
    respond::listed(state.beneficiaries.list().await)
}

/// Fetch a beneficiary by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/beneficiaries/{id}",
    params(("id" = i32, Path, description = "Beneficiary identifier")),
    responses(
        (status = 200, description = "Beneficiary found", body = ResponseEnvelope<Beneficiary>),
        (status = 404, description = "Beneficiary not found", body = ResponseEnvelope<Beneficiary>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Beneficiary>)
    ),
    tags = ["beneficiaries"],
    operation_id = "getBeneficiary"
)]
#[get("/beneficiaries/{id}")]
pub async fn get_beneficiary(state: web::Data<HttpState>, id: web::Path<i32>) -> HttpResponse {
    respond::found(state.beneficiaries.get(id.into_inner()).await)
}

/// Edit an existing beneficiary.
#[utoipa::path(
    put,
    path = "/api/v1/beneficiaries/{id}",
    params(("id" = i32, Path, description = "Beneficiary identifier")),
    request_body = BeneficiaryUpdateRequest,
    responses(
        (status = 200, description = "Beneficiary updated", body = ResponseEnvelope<Beneficiary>),
        (status = 404, description = "Beneficiary not found", body = ResponseEnvelope<Beneficiary>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Beneficiary>)
    ),
    tags = ["beneficiaries"],
    operation_id = "updateBeneficiary"
)]
#[put("/beneficiaries/{id}")]
pub async fn update_beneficiary(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<BeneficiaryUpdateRequest>,
) -> HttpResponse {
    let payload = payload.into_inner();
    debug!(path_id = *path, body_id = payload.id, "updating beneficiary");

    let envelope = state
        .beneficiaries
        .update(UpdateBeneficiaryRequest {
            id: payload.id,
            full_name: payload.full_name,
            cpf: payload.cpf,
            birth_date: payload.birth_date,
            status: payload.status,
        })
        .await;

    respond::found(envelope)
}

/// Delete a beneficiary by identifier.
#[utoipa::path(
    delete,
    path = "/api/v1/beneficiaries/{id}",
    params(("id" = i32, Path, description = "Beneficiary identifier")),
    responses(
        (status = 200, description = "Beneficiary removed", body = ResponseEnvelope<Beneficiary>),
        (status = 404, description = "Beneficiary not found", body = ResponseEnvelope<Beneficiary>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Beneficiary>)
    ),
    tags = ["beneficiaries"],
    operation_id = "deleteBeneficiary"
)]
#[delete("/beneficiaries/{id}")]
pub async fn delete_beneficiary(state: web::Data<HttpState>, id: web::Path<i32>) -> HttpResponse {
    respond::found(state.beneficiaries.delete(id.into_inner()).await)
}
