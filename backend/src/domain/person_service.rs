//! Person domain service.
//!
//! Implements the [`PersonService`] driving port on top of a
//! [`PersonRepository`]. Names are validated before any repository call, so
//! a rejected write never touches storage and an invalid rename never reveals
//! whether the id exists.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::{error, info};

use crate::domain::ports::{PersonRepository, PersonRepositoryError, PersonService};
use crate::domain::{Error, Person, PersonId, PersonName, TraceId};

fn map_repository_error(error: PersonRepositoryError) -> Error {
    let trace_id = TraceId::current().map(|id| id.to_string());
    error!(%error, trace_id = trace_id.as_deref(), "person repository failure");
    Error::unexpected(error.to_string())
}

/// Person service backed by a repository port.
#[derive(Clone)]
pub struct PersonServiceImpl {
    repository: Arc<dyn PersonRepository>,
}

impl PersonServiceImpl {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<dyn PersonRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PersonService for PersonServiceImpl {
    async fn list(&self, request: PageRequest) -> Result<Page<Person>, Error> {
        self.repository
            .list_page(&request)
            .await
            .map_err(map_repository_error)
    }

    async fn add(&self, name: &str) -> Result<Person, Error> {
        let name = PersonName::new(name)?;
        let person = self
            .repository
            .insert(&name)
            .await
            .map_err(map_repository_error)?;
        info!(person_id = %person.id(), "person added");
        Ok(person)
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Person, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or(Error::PersonNotFound(id))
    }

    async fn update(&self, id: PersonId, name: &str) -> Result<Person, Error> {
        let name = PersonName::new(name)?;
        let mut person = self.get_by_id(id).await?;
        person.rename(name);
        let updated = self
            .repository
            .update(&person)
            .await
            .map_err(map_repository_error)?
            .ok_or(Error::PersonNotFound(id))?;
        info!(person_id = %id, "person renamed");
        Ok(updated)
    }

    async fn remove(&self, id: PersonId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        info!(person_id = %id, removed, "person removal requested");
        Ok(())
    }
}

#[cfg(test)]
#[path = "person_service_tests.rs"]
mod tests;
