//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered persons.
    persons (id) {
        /// Primary key drawn from the `BIGSERIAL` sequence.
        id -> Int8,
        /// Validated person name (at most 50 characters).
        name -> Varchar,
    }
}
