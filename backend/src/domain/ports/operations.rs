//! Driving ports exposed by the rule engines to inbound adapters.
//!
//! HTTP handlers depend on these traits only, so they remain testable with
//! stub implementations and never touch persistence directly. Every operation
//! resolves to a [`ResponseEnvelope`]; failures are envelope values, never
//! `Err`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Beneficiary, BeneficiaryStatus, Plan, ResponseEnvelope};

/// Validated input for creating a beneficiary.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBeneficiaryRequest {
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub plan_id: i32,
}

/// Validated input for editing a beneficiary.
///
/// Registration timestamp and plan reference are immutable after creation;
/// only the listed fields are overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBeneficiaryRequest {
    pub id: i32,
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub status: BeneficiaryStatus,
}

/// Validated input for creating a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlanRequest {
    pub name: String,
    pub ans_registry_code: String,
}

/// Validated input for editing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlanRequest {
    pub id: i32,
    pub name: String,
    pub ans_registry_code: String,
}

/// Beneficiary rule engine operations.
#[async_trait]
pub trait BeneficiaryOperations: Send + Sync {
    /// Validate and persist a new beneficiary.
    async fn create(&self, request: CreateBeneficiaryRequest) -> ResponseEnvelope<Beneficiary>;

    /// Fetch a beneficiary by identifier.
    async fn get(&self, id: i32) -> ResponseEnvelope<Beneficiary>;

    /// Overwrite the mutable fields of an existing beneficiary.
    async fn update(&self, request: UpdateBeneficiaryRequest) -> ResponseEnvelope<Beneficiary>;

    /// Remove a beneficiary, returning the removed record as payload.
    async fn delete(&self, id: i32) -> ResponseEnvelope<Beneficiary>;

    /// All beneficiaries, unfiltered and unpaginated.
    async fn list(&self) -> ResponseEnvelope<Vec<Beneficiary>>;
}

/// Plan rule engine operations.
#[async_trait]
pub trait PlanOperations: Send + Sync {
    /// Validate and persist a new plan.
    async fn create(&self, request: CreatePlanRequest) -> ResponseEnvelope<Plan>;

    /// Fetch a plan by identifier.
    async fn get(&self, id: i32) -> ResponseEnvelope<Plan>;

    /// Overwrite the mutable fields of an existing plan.
    async fn update(&self, request: UpdatePlanRequest) -> ResponseEnvelope<Plan>;

    /// Remove a plan, returning the removed record as payload.
    async fn delete(&self, id: i32) -> ResponseEnvelope<Plan>;

    /// All plans, unfiltered and unpaginated.
    async fn list(&self) -> ResponseEnvelope<Vec<Plan>>;
}
