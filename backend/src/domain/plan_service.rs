//! Plan rule engine.
//!
//! Mirrors the beneficiary engine structurally: a name-uniqueness check
//! guards creation, lookups report missing records as `ValidationError`, and
//! storage failures surface as `ServerError` envelopes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    CreatePlanRequest, NewPlan, PlanOperations, PlanRepository, PlanRepositoryError,
    UpdatePlanRequest,
};
use crate::domain::{ErrorCategory, Plan, ResponseEnvelope};

/// Plan service implementing the driving port.
#[derive(Clone)]
pub struct PlanService<P> {
    plans: Arc<P>,
}

impl<P> PlanService<P> {
    /// Create a new service with the given repository.
    pub fn new(plans: Arc<P>) -> Self {
        Self { plans }
    }
}

impl<P> PlanService<P>
where
    P: PlanRepository,
{
    fn storage_failure<T>(error: &PlanRepositoryError) -> ResponseEnvelope<T> {
        warn!(error = %error, "plan operation hit a storage failure");
        ResponseEnvelope::failure(ErrorCategory::ServerError, error.to_string())
    }

    fn not_found_envelope<T>() -> ResponseEnvelope<T> {
        ResponseEnvelope::failure(ErrorCategory::ValidationError, "plan not found")
            .with_detail("id", "not_found")
    }
}

#[async_trait]
impl<P> PlanOperations for PlanService<P>
where
    P: PlanRepository,
{
    async fn create(&self, request: CreatePlanRequest) -> ResponseEnvelope<Plan> {
        match self.plans.name_exists(&request.name).await {
            Ok(true) => {
                // The duplicate-name failure carries an `id`/`not_found`
                // detail. Kept verbatim for wire compatibility.
                return ResponseEnvelope::failure(
                    ErrorCategory::ValidationError,
                    "plan already created",
                )
                .with_detail("id", "not_found");
            }
            Ok(false) => {}
            Err(error) => return Self::storage_failure(&error),
        }

        let record = NewPlan {
            name: request.name,
            ans_registry_code: request.ans_registry_code,
        };

        match self.plans.insert(&record).await {
            Ok(plan) => ResponseEnvelope::success(plan, "plan created successfully"),
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn get(&self, id: i32) -> ResponseEnvelope<Plan> {
        match self.plans.find_by_id(id).await {
            Ok(Some(plan)) => ResponseEnvelope::success(plan, "plan retrieved successfully"),
            Ok(None) => Self::not_found_envelope(),
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn update(&self, request: UpdatePlanRequest) -> ResponseEnvelope<Plan> {
        let existing = match self.plans.find_by_id(request.id).await {
            Ok(Some(plan)) => plan,
            Ok(None) => return Self::not_found_envelope(),
            Err(error) => return Self::storage_failure(&error),
        };

        let updated = Plan {
            id: existing.id,
            name: request.name,
            ans_registry_code: request.ans_registry_code,
        };

        match self.plans.update(&updated).await {
            Ok(plan) => ResponseEnvelope::success(plan, "plan updated successfully"),
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn delete(&self, id: i32) -> ResponseEnvelope<Plan> {
        let plan = match self.plans.find_by_id(id).await {
            Ok(Some(plan)) => plan,
            Ok(None) => return Self::not_found_envelope(),
            Err(error) => return Self::storage_failure(&error),
        };

        match self.plans.delete(id).await {
            Ok(()) => ResponseEnvelope::success(plan, "plan removed successfully"),
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn list(&self) -> ResponseEnvelope<Vec<Plan>> {
        match self.plans.list().await {
            Ok(plans) => ResponseEnvelope::success(plans, "plans listed successfully"),
            Err(error) => Self::storage_failure(&error),
        }
    }
}
