//! Stub driving-port implementations for handler tests.

use async_trait::async_trait;

use crate::domain::ports::{
    BeneficiaryOperations, CreateBeneficiaryRequest, CreatePlanRequest, PlanOperations,
    UpdateBeneficiaryRequest, UpdatePlanRequest,
};
use crate::domain::{Beneficiary, Plan, ResponseEnvelope};

/// Beneficiary engine stub returning one canned envelope for every operation.
pub(crate) struct StubBeneficiaryOperations {
    pub envelope: ResponseEnvelope<Beneficiary>,
}

#[async_trait]
impl BeneficiaryOperations for StubBeneficiaryOperations {
    async fn create(&self, _: CreateBeneficiaryRequest) -> ResponseEnvelope<Beneficiary> {
        self.envelope.clone()
    }

    async fn get(&self, _: i32) -> ResponseEnvelope<Beneficiary> {
        self.envelope.clone()
    }

    async fn update(&self, _: UpdateBeneficiaryRequest) -> ResponseEnvelope<Beneficiary> {
        self.envelope.clone()
    }

    async fn delete(&self, _: i32) -> ResponseEnvelope<Beneficiary> {
        self.envelope.clone()
    }

    async fn list(&self) -> ResponseEnvelope<Vec<Beneficiary>> {
        match self.envelope.category() {
            None => ResponseEnvelope::success(
                self.envelope.data.clone().into_iter().collect(),
                self.envelope.message.clone(),
            ),
            Some(category) => ResponseEnvelope::failure(category, self.envelope.message.clone()),
        }
    }
}

/// Plan engine stub returning one canned envelope for every operation.
pub(crate) struct StubPlanOperations {
    pub envelope: ResponseEnvelope<Plan>,
}

#[async_trait]
impl PlanOperations for StubPlanOperations {
    async fn create(&self, _: CreatePlanRequest) -> ResponseEnvelope<Plan> {
        self.envelope.clone()
    }

    async fn get(&self, _: i32) -> ResponseEnvelope<Plan> {
        self.envelope.clone()
    }

    async fn update(&self, _: UpdatePlanRequest) -> ResponseEnvelope<Plan> {
        self.envelope.clone()
    }

    async fn delete(&self, _: i32) -> ResponseEnvelope<Plan> {
        self.envelope.clone()
    }

    async fn list(&self) -> ResponseEnvelope<Vec<Plan>> {
        match self.envelope.category() {
            None => ResponseEnvelope::success(
                self.envelope.data.clone().into_iter().collect(),
                self.envelope.message.clone(),
            ),
            Some(category) => ResponseEnvelope::failure(category, self.envelope.message.clone()),
        }
    }
}
