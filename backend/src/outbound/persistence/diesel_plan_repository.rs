//! PostgreSQL-backed `PlanRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{NewPlan, PlanRepository, PlanRepositoryError};
use crate::domain::Plan;

use super::models::{NewPlanRow, PlanChangeset, PlanRow};
use super::pool::{DbPool, PoolError};
use super::schema::plans;

/// Diesel-backed implementation of the `PlanRepository` port.
#[derive(Clone)]
pub struct DieselPlanRepository {
    pool: DbPool,
}

impl DieselPlanRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain plan repository errors.
fn map_pool_error(error: PoolError) -> PlanRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PlanRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain plan repository errors.
fn map_diesel_error(error: diesel::result::Error) -> PlanRepositoryError {
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
        DieselError::NotFound => PlanRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            // The unique index on name catches concurrent creates that slip
            // past the engine's uniqueness check.
            PlanRepositoryError::query(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PlanRepositoryError::connection("database connection error")
        }
        _ => PlanRepositoryError::query("database error"),
    }
}

fn row_to_plan(row: PlanRow) -> Plan {
    Plan {
        id: row.id,
        name: row.name,
        ans_registry_code: row.ans_registry_code,
    }
}

#[async_trait]
impl PlanRepository for DieselPlanRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Plan>, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PlanRow> = plans::table
            .find(id)
            .select(PlanRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_plan))
    }

    async fn name_exists(&self, name: &str) -> Result<bool, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            plans::table.filter(plans::name.eq(name)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(&self, record: &NewPlan) -> Result<Plan, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPlanRow {
            name: &record.name,
            ans_registry_code: &record.ans_registry_code,
        };

        let row: PlanRow = diesel::insert_into(plans::table)
            .values(&new_row)
            .returning(PlanRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_plan(row))
    }

    async fn update(&self, plan: &Plan) -> Result<Plan, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = PlanChangeset {
            name: &plan.name,
            ans_registry_code: &plan.ans_registry_code,
        };

        let row: PlanRow = diesel::update(plans::table.find(plan.id))
            .set(&changeset)
            .returning(PlanRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_plan(row))
    }

    async fn delete(&self, id: i32) -> Result<(), PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(plans::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Plan>, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PlanRow> = plans::table
            .select(PlanRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_plan).collect())
    }
}
