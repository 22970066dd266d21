//! Driven port for person persistence adapters and their errors.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Person, PersonId, PersonName};

use super::define_port_error;

/// Properties a person listing can be sorted by.
pub const PERSON_SORT_PROPERTIES: &[&str] = &["id", "name"];

define_port_error! {
    /// Persistence errors raised by person repository adapters.
    pub enum PersonRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "person repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "person repository query failed: {message}",
    }
}

/// Keyed person store.
///
/// Every method is a single atomic operation; callers get no ordering
/// guarantees across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Store a new person, assigning the next identifier.
    async fn insert(&self, name: &PersonName) -> Result<Person, PersonRepositoryError>;

    /// Fetch a person by identifier.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError>;

    /// Fetch one page ordered by `request.sort()`; ties are broken by
    /// ascending id. The sort property is one of [`PERSON_SORT_PROPERTIES`].
    async fn list_page(&self, request: &PageRequest)
    -> Result<Page<Person>, PersonRepositoryError>;

    /// Overwrite the name of an existing person.
    ///
    /// Returns `None` when no person is stored under `person.id()`.
    async fn update(&self, person: &Person) -> Result<Option<Person>, PersonRepositoryError>;

    /// Delete a person, returning whether a row was removed.
    async fn delete_by_id(&self, id: PersonId) -> Result<bool, PersonRepositoryError>;
}
