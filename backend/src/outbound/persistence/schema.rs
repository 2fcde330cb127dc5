//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Employee records.
    employees (id) {
        /// Primary key, backed by the `employees_id_seq` identity sequence.
        id -> Int8,
        /// Display name.
        name -> Text,
    }
}
