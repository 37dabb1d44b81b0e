//! PostgreSQL-backed `BeneficiaryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{BeneficiaryRepository, BeneficiaryRepositoryError, NewBeneficiary};
use crate::domain::{Beneficiary, BeneficiaryStatus};

use super::models::{BeneficiaryChangeset, BeneficiaryRow, NewBeneficiaryRow};
use super::pool::{DbPool, PoolError};
use super::schema::beneficiaries;

/// Diesel-backed implementation of the `BeneficiaryRepository` port.
#[derive(Clone)]
pub struct DieselBeneficiaryRepository {
    pool: DbPool,
}

impl DieselBeneficiaryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain beneficiary repository errors.
fn map_pool_error(error: PoolError) -> BeneficiaryRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            BeneficiaryRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain beneficiary repository errors.
fn map_diesel_error(error: diesel::result::Error) -> BeneficiaryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => BeneficiaryRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            // The unique index on cpf catches concurrent creates that slip
            // past the engine's duplicate check.
            BeneficiaryRepositoryError::query(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BeneficiaryRepositoryError::connection("database connection error")
        }
        _ => BeneficiaryRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain beneficiary.
fn row_to_beneficiary(row: BeneficiaryRow) -> Beneficiary {
    let status = row.status.parse::<BeneficiaryStatus>().unwrap_or_else(|_| {
        warn!(
            value = row.status,
            beneficiary_id = row.id,
            "unrecognised status value, defaulting to Active"
        );
        BeneficiaryStatus::Active
    });

    Beneficiary {
        id: row.id,
        full_name: row.full_name,
        cpf: row.cpf,
        birth_date: row.birth_date,
        registered_at: row.registered_at,
        status,
        plan_id: row.plan_id,
    }
}

#[async_trait]
impl BeneficiaryRepository for DieselBeneficiaryRepository {
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Beneficiary>, BeneficiaryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BeneficiaryRow> = beneficiaries::table
            .find(id)
            .select(BeneficiaryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_beneficiary))
    }

    async fn cpf_exists(&self, cpf: &str) -> Result<bool, BeneficiaryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            beneficiaries::table.filter(beneficiaries::cpf.eq(cpf)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(
        &self,
        record: &NewBeneficiary,
    ) -> Result<Beneficiary, BeneficiaryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewBeneficiaryRow {
            full_name: &record.full_name,
            cpf: &record.cpf,
            birth_date: record.birth_date,
            registered_at: record.registered_at,
            status: record.status.as_str(),
            plan_id: record.plan_id,
        };

        let row: BeneficiaryRow = diesel::insert_into(beneficiaries::table)
            .values(&new_row)
            .returning(BeneficiaryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_beneficiary(row))
    }

    async fn update(
        &self,
        beneficiary: &Beneficiary,
    ) -> Result<Beneficiary, BeneficiaryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = BeneficiaryChangeset {
            full_name: &beneficiary.full_name,
            cpf: &beneficiary.cpf,
            birth_date: beneficiary.birth_date,
            status: beneficiary.status.as_str(),
        };

        let row: BeneficiaryRow = diesel::update(beneficiaries::table.find(beneficiary.id))
            .set(&changeset)
            .returning(BeneficiaryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_beneficiary(row))
    }

    async fn delete(&self, id: i32) -> Result<(), BeneficiaryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(beneficiaries::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Beneficiary>, BeneficiaryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BeneficiaryRow> = beneficiaries::table
            .select(BeneficiaryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_beneficiary).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(
            repo_err,
            BeneficiaryRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, BeneficiaryRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    fn a_row(status: &str) -> BeneficiaryRow {
        BeneficiaryRow {
            id: 7,
            full_name: "Maria da Silva".to_owned(),
            cpf: "123.456.789-10".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).expect("valid date"),
            registered_at: Utc::now(),
            status: status.to_owned(),
            plan_id: 1,
        }
    }

    #[rstest]
    #[case("ACTIVE", BeneficiaryStatus::Active)]
    #[case("INACTIVE", BeneficiaryStatus::Inactive)]
    fn row_conversion_maps_status(#[case] stored: &str, #[case] expected: BeneficiaryStatus) {
        let beneficiary = row_to_beneficiary(a_row(stored));

        assert_eq!(beneficiary.status, expected);
        assert_eq!(beneficiary.id, 7);
        assert_eq!(beneficiary.cpf, "123.456.789-10");
    }

    #[rstest]
    fn row_conversion_defaults_unknown_status_to_active() {
        let beneficiary = row_to_beneficiary(a_row("SUSPENDED"));
        assert_eq!(beneficiary.status, BeneficiaryStatus::Active);
    }
}
