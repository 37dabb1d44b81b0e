//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's type
//! requirements for queries and mutations.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::{beneficiaries, plans};

/// Row struct for reading from the plans table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlanRow {
    pub id: i32,
    pub name: String,
    pub ans_registry_code: String,
}

/// Insertable struct for creating new plan records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plans)]
pub(crate) struct NewPlanRow<'a> {
    pub name: &'a str,
    pub ans_registry_code: &'a str,
}

/// Changeset struct for updating existing plan records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = plans)]
pub(crate) struct PlanChangeset<'a> {
    pub name: &'a str,
    pub ans_registry_code: &'a str,
}

/// Row struct for reading from the beneficiaries table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = beneficiaries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BeneficiaryRow {
    pub id: i32,
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    pub plan_id: i32,
}

/// Insertable struct for creating new beneficiary records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = beneficiaries)]
pub(crate) struct NewBeneficiaryRow<'a> {
    pub full_name: &'a str,
    pub cpf: &'a str,
    pub birth_date: NaiveDate,
    pub registered_at: DateTime<Utc>,
    pub status: &'a str,
    pub plan_id: i32,
}

/// Changeset struct for the fields an edit may overwrite.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = beneficiaries)]
pub(crate) struct BeneficiaryChangeset<'a> {
    pub full_name: &'a str,
    pub cpf: &'a str,
    pub birth_date: NaiveDate,
    pub status: &'a str,
}
