//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Rows (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`, and every Diesel or pool error is mapped to
//! [`PersonRepositoryError`](crate::domain::ports::PersonRepositoryError).
//!
//! # Example
//!
//! ```ignore
//! use person_registry::outbound::persistence::{
//!     DbPool, DieselPersonRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/persons").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/persons")).await?;
//! let repo = DieselPersonRepository::new(pool);
//! ```

mod diesel_person_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
