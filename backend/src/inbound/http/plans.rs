//! Plan HTTP handlers.
//!
//! ```text
//! POST   /api/v1/plans
//! GET    /api/v1/plans
//! GET    /api/v1/plans/{id}
//! PUT    /api/v1/plans/{id}
//! DELETE /api/v1/plans/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::{CreatePlanRequest, UpdatePlanRequest};
use crate::domain::{Plan, ResponseEnvelope};
use crate::inbound::http::respond;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a plan.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanCreateRequest {
    /// Unique plan name.
    pub name: String,
    /// External ANS registry code.
    pub ans_registry_code: String,
}

/// Request payload for editing a plan.
///
/// The body identifier is authoritative; the path segment is informational.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdateRequest {
    pub id: i32,
    pub name: String,
    pub ans_registry_code: String,
}

/// Create a plan.
#[utoipa::path(
    post,
    path = "/api/v1/plans",
    request_body = PlanCreateRequest,
    responses(
        (status = 201, description = "Plan created", body = ResponseEnvelope<Plan>),
        (status = 409, description = "Plan name already in use", body = ResponseEnvelope<Plan>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Plan>)
    ),
    tags = ["plans"],
    operation_id = "createPlan"
)]
#[post("/plans")]
pub async fn create_plan(
    state: web::Data<HttpState>,
    payload: web::Json<PlanCreateRequest>,
) -> HttpResponse {
    let payload = payload.into_inner();
    let envelope = state
        .plans
        .create(CreatePlanRequest {
            name: payload.name,
            ans_registry_code: payload.ans_registry_code,
        })
        .await;

    respond::created(envelope, |plan| format!("/api/v1/plans/{}", plan.id))
}

/// List all plans.
#[utoipa::path(
    get,
    path = "/api/v1/plans",
    responses(
        (status = 200, description = "All plans", body = ResponseEnvelope<Vec<Plan>>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Vec<Plan>>)
    ),
    tags = ["plans"],
    operation_id = "listPlans"
)]
#[get("/plans")]
pub async fn list_plans(state: web::Data<HttpState>) -> HttpResponse {
    respond::listed(state.plans.list().await)
}

/// Fetch a plan by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/plans/{id}",
    params(("id" = i32, Path, description = "Plan identifier")),
    responses(
        (status = 200, description = "Plan found", body = ResponseEnvelope<Plan>),
        (status = 404, description = "Plan not found", body = ResponseEnvelope<Plan>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Plan>)
    ),
    tags = ["plans"],
    operation_id = "getPlan"
)]
#[get("/plans/{id}")]
pub async fn get_plan(state: web::Data<HttpState>, id: web::Path<i32>) -> HttpResponse {
    respond::found(state.plans.get(id.into_inner()).await)
}

/// Edit an existing plan.
#[utoipa::path(
    put,
    path = "/api/v1/plans/{id}",
    params(("id" = i32, Path, description = "Plan identifier")),
    request_body = PlanUpdateRequest,
    responses(
        (status = 200, description = "Plan updated", body = ResponseEnvelope<Plan>),
        (status = 404, description = "Plan not found", body = ResponseEnvelope<Plan>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Plan>)
    ),
    tags = ["plans"],
    operation_id = "updatePlan"
)]
#[put("/plans/{id}")]
pub async fn update_plan(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<PlanUpdateRequest>,
) -> HttpResponse {
    let payload = payload.into_inner();
    debug!(path_id = *path, body_id = payload.id, "updating plan");

    let envelope = state
        .plans
        .update(UpdatePlanRequest {
            id: payload.id,
            name: payload.name,
            ans_registry_code: payload.ans_registry_code,
        })
        .await;

    respond::found(envelope)
}

/// Delete a plan by identifier.
#[utoipa::path(
    delete,
    path = "/api/v1/plans/{id}",
    params(("id" = i32, Path, description = "Plan identifier")),
    responses(
        (status = 200, description = "Plan removed", body = ResponseEnvelope<Plan>),
        (status = 404, description = "Plan not found", body = ResponseEnvelope<Plan>),
        (status = 500, description = "Internal server error", body = ResponseEnvelope<Plan>)
    ),
    tags = ["plans"],
    operation_id = "deletePlan"
)]
#[delete("/plans/{id}")]
pub async fn delete_plan(state: web::Data<HttpState>, id: web::Path<i32>) -> HttpResponse {
    respond::found(state.plans.delete(id.into_inner()).await)
}
