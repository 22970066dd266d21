//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local person store, used when no database is
//!   configured and throughout the test suites
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
