//! Beneficiary rule engine.
//!
//! Orchestrates create/read/update/delete/list for beneficiaries, applying
//! the CPF shape check, duplicate detection, and the plan existence check in
//! a fixed order before touching the store. Every outcome, including
//! repository failures, is expressed as a [`ResponseEnvelope`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::domain::cpf;
use crate::domain::ports::{
    BeneficiaryOperations, BeneficiaryRepository, BeneficiaryRepositoryError,
    CreateBeneficiaryRequest, NewBeneficiary, PlanRepository, PlanRepositoryError,
    UpdateBeneficiaryRequest,
};
use crate::domain::{Beneficiary, BeneficiaryStatus, ErrorCategory, ResponseEnvelope};

/// Beneficiary service implementing the driving port.
#[derive(Clone)]
pub struct BeneficiaryService<B, P> {
    beneficiaries: Arc<B>,
    plans: Arc<P>,
}

impl<B, P> BeneficiaryService<B, P> {
    /// Create a new service with the given repositories.
    pub fn new(beneficiaries: Arc<B>, plans: Arc<P>) -> Self {
        Self {
            beneficiaries,
            plans,
        }
    }
}

impl<B, P> BeneficiaryService<B, P>
where
    B: BeneficiaryRepository,
    P: PlanRepository,
{
    fn storage_failure<T>(error: &BeneficiaryRepositoryError) -> ResponseEnvelope<T> {
        warn!(error = %error, "beneficiary operation hit a storage failure");
        ResponseEnvelope::failure(ErrorCategory::ServerError, error.to_string())
    }

    fn plan_storage_failure<T>(error: &PlanRepositoryError) -> ResponseEnvelope<T> {
        warn!(error = %error, "plan lookup hit a storage failure");
        ResponseEnvelope::failure(ErrorCategory::ServerError, error.to_string())
    }

    fn not_found_envelope<T>() -> ResponseEnvelope<T> {
        ResponseEnvelope::failure(ErrorCategory::ValidationError, "beneficiary not found")
            .with_detail("id", "not_found")
    }
}

#[async_trait]
impl<B, P> BeneficiaryOperations for BeneficiaryService<B, P>
where
    B: BeneficiaryRepository,
    P: PlanRepository,
{
    async fn create(&self, request: CreateBeneficiaryRequest) -> ResponseEnvelope<Beneficiary> {
        // Check order is part of the contract: shape, then duplicate, then
        // plan existence.
        if !cpf::shape_is_valid(&request.cpf) {
            return ResponseEnvelope::failure(ErrorCategory::ValidationError, "invalid CPF")
                .with_detail("cpf", "invalid");
        }

        match self.beneficiaries.cpf_exists(&request.cpf).await {
            Ok(true) => {
                return ResponseEnvelope::failure(
                    ErrorCategory::ValidationError,
                    "CPF already registered",
                )
                .with_detail("cpf", "duplicate");
            }
            Ok(false) => {}
            Err(error) => return Self::storage_failure(&error),
        }

        match self.plans.find_by_id(request.plan_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return ResponseEnvelope::failure(ErrorCategory::NotFound, "plan not found");
            }
            Err(error) => return Self::plan_storage_failure(&error),
        }

        let record = NewBeneficiary {
            full_name: request.full_name,
            cpf: request.cpf,
            birth_date: request.birth_date,
            registered_at: Utc::now(),
            status: BeneficiaryStatus::Active,
            plan_id: request.plan_id,
        };

        match self.beneficiaries.insert(&record).await {
            Ok(beneficiary) => {
                ResponseEnvelope::success(beneficiary, "beneficiary created successfully")
            }
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn get(&self, id: i32) -> ResponseEnvelope<Beneficiary> {
        match self.beneficiaries.find_by_id(id).await {
            Ok(Some(beneficiary)) => {
                ResponseEnvelope::success(beneficiary, "beneficiary retrieved successfully")
            }
            Ok(None) => Self::not_found_envelope(),
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn update(&self, request: UpdateBeneficiaryRequest) -> ResponseEnvelope<Beneficiary> {
        let existing = match self.beneficiaries.find_by_id(request.id).await {
            Ok(Some(beneficiary)) => beneficiary,
            Ok(None) => {
                // A missing record on edit reports the CPF validation message
                // and detail. Kept verbatim for wire compatibility.
                return ResponseEnvelope::failure(ErrorCategory::ValidationError, "invalid CPF")
                    .with_detail("cpf", "invalid");
            }
            Err(error) => {
                // Edit storage failures surface as NotFound rather than
                // ServerError. Kept for wire compatibility.
                warn!(error = %error, "beneficiary update hit a storage failure");
                return ResponseEnvelope::failure(ErrorCategory::NotFound, error.to_string());
            }
        };

        // CPF shape and duplication are not re-checked on edit.
        let updated = Beneficiary {
            full_name: request.full_name,
            cpf: request.cpf,
            birth_date: request.birth_date,
            status: request.status,
            ..existing
        };

        match self.beneficiaries.update(&updated).await {
            Ok(beneficiary) => {
                ResponseEnvelope::success(beneficiary, "beneficiary updated successfully")
            }
            Err(error) => {
                warn!(error = %error, "beneficiary update hit a storage failure");
                ResponseEnvelope::failure(ErrorCategory::NotFound, error.to_string())
            }
        }
    }

    async fn delete(&self, id: i32) -> ResponseEnvelope<Beneficiary> {
        let beneficiary = match self.beneficiaries.find_by_id(id).await {
            Ok(Some(beneficiary)) => beneficiary,
            Ok(None) => return Self::not_found_envelope(),
            Err(error) => return Self::storage_failure(&error),
        };

        match self.beneficiaries.delete(id).await {
            Ok(()) => ResponseEnvelope::success(beneficiary, "beneficiary removed successfully"),
            Err(error) => Self::storage_failure(&error),
        }
    }

    async fn list(&self) -> ResponseEnvelope<Vec<Beneficiary>> {
        match self.beneficiaries.list().await {
            Ok(beneficiaries) => {
                ResponseEnvelope::success(beneficiaries, "beneficiaries listed successfully")
            }
            Err(error) => Self::storage_failure(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockBeneficiaryRepository, MockPlanRepository};
    use crate::domain::Plan;
    use chrono::NaiveDate;

    fn make_service(
        beneficiaries: MockBeneficiaryRepository,
        plans: MockPlanRepository,
    ) -> BeneficiaryService<MockBeneficiaryRepository, MockPlanRepository> {
        BeneficiaryService::new(Arc::new(beneficiaries), Arc::new(plans))
    }

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 4, 12).expect("valid date")
    }

    fn create_request(cpf: &str) -> CreateBeneficiaryRequest {
        CreateBeneficiaryRequest {
            full_name: "Maria da Silva".to_owned(),
            cpf: cpf.to_owned(),
            birth_date: birth_date(),
            plan_id: 1,
        }
    }

    fn stored_beneficiary(id: i32, status: BeneficiaryStatus) -> Beneficiary {
        Beneficiary {
            id,
            full_name: "Maria da Silva".to_owned(),
            cpf: "12345678910".to_owned(),
            birth_date: birth_date(),
            registered_at: Utc::now(),
            status,
            plan_id: 1,
        }
    }

    fn a_plan() -> Plan {
        Plan {
            id: 1,
            name: "Essential".to_owned(),
            ans_registry_code: "ANS-0001".to_owned(),
        }
    }

    #[tokio::test]
    async fn create_rejects_malformed_cpf_before_any_lookup() {
        // No expectations set: any repository call would panic.
        let service = make_service(
            MockBeneficiaryRepository::new(),
            MockPlanRepository::new(),
        );

        let envelope = service.create(create_request("123")).await;

        assert_eq!(envelope.category(), Some(ErrorCategory::ValidationError));
        assert_eq!(envelope.message, "invalid CPF");
        assert_eq!(envelope.details[0].field, "cpf");
        assert_eq!(envelope.details[0].rule, "invalid");
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_cpf_without_inserting() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_cpf_exists()
            .times(1)
            .return_once(|_| Ok(true));
        beneficiaries.expect_insert().times(0);

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.create(create_request("12345678910")).await;

        assert_eq!(envelope.category(), Some(ErrorCategory::ValidationError));
        assert_eq!(envelope.message, "CPF already registered");
        assert_eq!(envelope.details[0].rule, "duplicate");
    }

    #[tokio::test]
    async fn repeated_duplicate_create_fails_identically_with_no_side_effect() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_cpf_exists()
            .times(2)
            .returning(|_| Ok(true));
        beneficiaries.expect_insert().times(0);

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let first = service.create(create_request("12345678910")).await;
        let second = service.create(create_request("12345678910")).await;

        assert_eq!(first, second);
        assert_eq!(first.category(), Some(ErrorCategory::ValidationError));
    }

    #[tokio::test]
    async fn create_reports_missing_plan_as_not_found_without_inserting() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_cpf_exists()
            .times(1)
            .return_once(|_| Ok(false));
        beneficiaries.expect_insert().times(0);

        let mut plans = MockPlanRepository::new();
        plans.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let service = make_service(beneficiaries, plans);
        let envelope = service.create(create_request("12345678910")).await;

        assert_eq!(envelope.category(), Some(ErrorCategory::NotFound));
        assert_eq!(envelope.message, "plan not found");
        assert!(envelope.details.is_empty());
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn create_defaults_status_active_and_sets_registration_time() {
        let before = Utc::now();

        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_cpf_exists()
            .times(1)
            .return_once(|_| Ok(false));
        beneficiaries
            .expect_insert()
            .withf(move |record| {
                record.status == BeneficiaryStatus::Active && record.registered_at >= before
            })
            .times(1)
            .return_once(|record| {
                Ok(Beneficiary {
                    id: 42,
                    full_name: record.full_name.clone(),
                    cpf: record.cpf.clone(),
                    birth_date: record.birth_date,
                    registered_at: record.registered_at,
                    status: record.status,
                    plan_id: record.plan_id,
                })
            });

        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(Some(a_plan())));

        let service = make_service(beneficiaries, plans);
        let envelope = service.create(create_request("123.456.789-10")).await;

        assert!(envelope.success);
        assert_eq!(envelope.message, "beneficiary created successfully");
        let created = envelope.data.expect("payload");
        assert_eq!(created.id, 42);
        assert_eq!(created.status, BeneficiaryStatus::Active);
        // Punctuation is stored as given.
        assert_eq!(created.cpf, "123.456.789-10");
    }

    #[tokio::test]
    async fn create_surfaces_insert_failure_as_server_error() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_cpf_exists()
            .times(1)
            .return_once(|_| Ok(false));
        beneficiaries
            .expect_insert()
            .times(1)
            .return_once(|_| Err(BeneficiaryRepositoryError::query("duplicate key value")));

        let mut plans = MockPlanRepository::new();
        plans
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(Some(a_plan())));

        let service = make_service(beneficiaries, plans);
        let envelope = service.create(create_request("12345678910")).await;

        assert_eq!(envelope.category(), Some(ErrorCategory::ServerError));
        assert!(envelope.message.contains("duplicate key value"));
    }

    #[tokio::test]
    async fn get_reports_missing_record_as_validation_error() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.get(9).await;

        // Missing lookups are ValidationError, not NotFound.
        assert_eq!(envelope.category(), Some(ErrorCategory::ValidationError));
        assert_eq!(envelope.message, "beneficiary not found");
        assert_eq!(envelope.details[0].field, "id");
        assert_eq!(envelope.details[0].rule, "not_found");
    }

    #[tokio::test]
    async fn get_returns_stored_record() {
        let stored = stored_beneficiary(3, BeneficiaryStatus::Active);
        let expected = stored.clone();

        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(stored)));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.get(3).await;

        assert!(envelope.success);
        assert_eq!(envelope.data, Some(expected));
    }

    #[tokio::test]
    async fn update_persists_status_change_to_inactive() {
        let existing = stored_beneficiary(5, BeneficiaryStatus::Active);
        let registered_at = existing.registered_at;

        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(existing)));
        beneficiaries
            .expect_update()
            .withf(move |updated| {
                updated.status == BeneficiaryStatus::Inactive
                    && updated.registered_at == registered_at
            })
            .times(1)
            .return_once(|updated| Ok(updated.clone()));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service
            .update(UpdateBeneficiaryRequest {
                id: 5,
                full_name: "Maria da Silva".to_owned(),
                cpf: "12345678910".to_owned(),
                birth_date: birth_date(),
                status: BeneficiaryStatus::Inactive,
            })
            .await;

        assert!(envelope.success);
        assert_eq!(envelope.message, "beneficiary updated successfully");
        assert_eq!(
            envelope.data.expect("payload").status,
            BeneficiaryStatus::Inactive
        );
    }

    #[tokio::test]
    async fn update_on_missing_record_reuses_cpf_validation_message() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        beneficiaries.expect_update().times(0);

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service
            .update(UpdateBeneficiaryRequest {
                id: 404,
                full_name: "Maria da Silva".to_owned(),
                cpf: "12345678910".to_owned(),
                birth_date: birth_date(),
                status: BeneficiaryStatus::Active,
            })
            .await;

        assert_eq!(envelope.category(), Some(ErrorCategory::ValidationError));
        assert_eq!(envelope.message, "invalid CPF");
        assert_eq!(envelope.details[0].field, "cpf");
    }

    #[tokio::test]
    async fn update_storage_failure_maps_to_not_found_category() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Err(BeneficiaryRepositoryError::connection("pool exhausted")));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service
            .update(UpdateBeneficiaryRequest {
                id: 5,
                full_name: "Maria da Silva".to_owned(),
                cpf: "12345678910".to_owned(),
                birth_date: birth_date(),
                status: BeneficiaryStatus::Active,
            })
            .await;

        assert_eq!(envelope.category(), Some(ErrorCategory::NotFound));
        assert!(envelope.message.contains("pool exhausted"));
    }

    #[tokio::test]
    async fn delete_returns_removed_record_as_payload() {
        let stored = stored_beneficiary(8, BeneficiaryStatus::Active);
        let expected = stored.clone();

        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(stored)));
        beneficiaries
            .expect_delete()
            .times(1)
            .return_once(|_| Ok(()));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.delete(8).await;

        assert!(envelope.success);
        assert_eq!(envelope.message, "beneficiary removed successfully");
        assert_eq!(envelope.data, Some(expected));
    }

    #[tokio::test]
    async fn delete_on_missing_record_fails_without_mutation() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        beneficiaries.expect_delete().times(0);

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.delete(404).await;

        assert_eq!(envelope.category(), Some(ErrorCategory::ValidationError));
        assert_eq!(envelope.message, "beneficiary not found");
    }

    #[tokio::test]
    async fn list_returns_everything_and_filtering_stays_client_side() {
        let seed = vec![
            stored_beneficiary(1, BeneficiaryStatus::Active),
            Beneficiary {
                id: 2,
                cpf: "98765432100".to_owned(),
                status: BeneficiaryStatus::Inactive,
                plan_id: 2,
                ..stored_beneficiary(2, BeneficiaryStatus::Inactive)
            },
            Beneficiary {
                id: 3,
                cpf: "45678912300".to_owned(),
                ..stored_beneficiary(3, BeneficiaryStatus::Active)
            },
        ];
        let stored = seed.clone();

        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_list()
            .times(1)
            .return_once(move || Ok(stored));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.list().await;

        assert!(envelope.success);
        let all = envelope.data.expect("payload");
        assert_eq!(all.len(), 3);

        // The engine never filters; callers narrow the full list themselves.
        let active_on_plan_one: Vec<_> = all
            .iter()
            .filter(|b| b.status == BeneficiaryStatus::Active && b.plan_id == 1)
            .map(|b| b.id)
            .collect();
        assert_eq!(active_on_plan_one, vec![1, 3]);
    }

    #[tokio::test]
    async fn list_storage_failure_maps_to_server_error() {
        let mut beneficiaries = MockBeneficiaryRepository::new();
        beneficiaries
            .expect_list()
            .times(1)
            .return_once(|| Err(BeneficiaryRepositoryError::connection("refused")));

        let service = make_service(beneficiaries, MockPlanRepository::new());
        let envelope = service.list().await;

        assert_eq!(envelope.category(), Some(ErrorCategory::ServerError));
    }
}
