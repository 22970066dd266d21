//! In-memory `PersonRepository` adapter.
//!
//! Identifiers start at 1 and are never reused, matching the sequence-backed
//! PostgreSQL adapter. A single `RwLock` makes every operation atomic. Names
//! order bytewise, as the `persons.name` column's `"C"` collation does.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonId, PersonName};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<PersonId, PersonName>,
    last_id: i64,
}

/// Process-local person store.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    table: RwLock<Table>,
}

impl InMemoryPersonRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, PersonRepositoryError> {
        self.table
            .read()
            .map_err(|_| PersonRepositoryError::query("in-memory person table lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, PersonRepositoryError> {
        self.table
            .write()
            .map_err(|_| PersonRepositoryError::query("in-memory person table lock poisoned"))
    }
}

fn compare(request: &PageRequest, a: &Person, b: &Person) -> Ordering {
    let primary = match request.sort().property() {
        "name" => a.name().cmp(b.name()),
        _ => a.id().cmp(&b.id()),
    };
    let primary = if request.sort().direction().is_descending() {
        primary.reverse()
    } else {
        primary
    };
    primary.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn insert(&self, name: &PersonName) -> Result<Person, PersonRepositoryError> {
        let mut table = self.write()?;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| PersonRepositoryError::query("person id sequence exhausted"))?;
        table.last_id = next;
        let id = PersonId::new(next);
        table.rows.insert(id, name.clone());
        Ok(Person::new(id, name.clone()))
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let table = self.read()?;
        Ok(table
            .rows
            .get(&id)
            .map(|name| Person::new(id, name.clone())))
    }

    async fn list_page(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Person>, PersonRepositoryError> {
        let table = self.read()?;
        let mut persons: Vec<Person> = table
            .rows
            .iter()
            .map(|(id, name)| Person::new(*id, name.clone()))
            .collect();
        drop(table);

        persons.sort_by(|a, b| compare(request, a, b));
        let total = persons.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let content = persons.into_iter().skip(offset).take(limit).collect();
        Ok(Page::new(content, request, total))
    }

    async fn update(&self, person: &Person) -> Result<Option<Person>, PersonRepositoryError> {
        let mut table = self.write()?;
        match table.rows.get_mut(&person.id()) {
            Some(name) => {
                *name = person.name().clone();
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<bool, PersonRepositoryError> {
        let mut table = self.write()?;
        Ok(table.rows.remove(&id).is_some())
    }
}
