//! Driving port for person use-cases.
//!
//! HTTP handlers depend on this trait only, so they can be exercised with a
//! mock and stay free of persistence concerns.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, Person, PersonId};

/// Person CRUD use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonService: Send + Sync {
    /// List one page of persons.
    async fn list(&self, request: PageRequest) -> Result<Page<Person>, Error>;

    /// Register a person under `name`.
    async fn add(&self, name: &str) -> Result<Person, Error>;

    /// Fetch a person.
    async fn get_by_id(&self, id: PersonId) -> Result<Person, Error>;

    /// Rename a person.
    async fn update(&self, id: PersonId, name: &str) -> Result<Person, Error>;

    /// Delete a person; deleting an unknown id succeeds.
    async fn remove(&self, id: PersonId) -> Result<(), Error>;
}
