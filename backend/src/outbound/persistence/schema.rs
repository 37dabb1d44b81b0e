//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `migrations/` exactly;
//! they drive Diesel's compile-time query validation.

diesel::table! {
    /// Health-plan products.
    plans (id) {
        /// Primary key, store-assigned.
        id -> Int4,
        /// Unique plan name.
        name -> Varchar,
        /// External ANS registry code.
        ans_registry_code -> Varchar,
    }
}

diesel::table! {
    /// Enrolled beneficiaries.
    beneficiaries (id) {
        /// Primary key, store-assigned.
        id -> Int4,
        /// Full legal name.
        full_name -> Varchar,
        /// CPF as given at registration, unique.
        cpf -> Varchar,
        /// Date of birth.
        birth_date -> Date,
        /// Registration timestamp.
        registered_at -> Timestamptz,
        /// Enrolment status: ACTIVE or INACTIVE.
        status -> Varchar,
        /// Owning plan.
        plan_id -> Int4,
    }
}

diesel::joinable!(beneficiaries -> plans (plan_id));
diesel::allow_tables_to_appear_in_same_query!(beneficiaries, plans);
