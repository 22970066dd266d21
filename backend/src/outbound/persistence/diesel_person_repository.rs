//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonId, PersonName};

use super::models::{NewPersonRow, PersonRow};
use super::pool::{DbPool, PoolError};
use super::schema::persons;

/// Diesel-backed implementation of the person repository port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PersonRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> PersonRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(_, info) => PersonRepositoryError::query(info.message()),
        other => PersonRepositoryError::query(other.to_string()),
    }
}

fn row_to_person(row: PersonRow) -> Result<Person, PersonRepositoryError> {
    let PersonRow { id, name } = row;
    let name = PersonName::new(name).map_err(|err| {
        PersonRepositoryError::query(format!("stored person {id} has an invalid name: {err}"))
    })?;
    Ok(Person::new(PersonId::new(id), name))
}

fn to_sql_bound(value: u64, what: &str) -> Result<i64, PersonRepositoryError> {
    i64::try_from(value)
        .map_err(|_| PersonRepositoryError::query(format!("page {what} {value} is out of range")))
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn insert(&self, name: &PersonName) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(persons::table)
            .values(NewPersonRow {
                name: name.as_ref(),
            })
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_person(row)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        persons::table
            .find(id.get())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_person)
            .transpose()
    }

    async fn list_page(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Person>, PersonRepositoryError> {
        let offset = to_sql_bound(request.offset(), "offset")?;
        let limit = to_sql_bound(request.limit(), "size")?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let descending = request.sort().direction().is_descending();
        let by_name = request.sort().property() == "name";

        let (total, rows) = conn
            .build_transaction()
            .repeatable_read()
            .read_only()
            .run(|conn| {
                async move {
                    let total: i64 = persons::table.count().get_result(conn).await?;
                    let query = persons::table
                        .select(PersonRow::as_select())
                        .into_boxed();
                    let query = match (by_name, descending) {
                        (true, false) => query.order((persons::name.asc(), persons::id.asc())),
                        (true, true) => query.order((persons::name.desc(), persons::id.asc())),
                        (false, true) => query.order(persons::id.desc()),
                        (false, false) => query.order(persons::id.asc()),
                    };
                    let rows: Vec<PersonRow> =
                        query.offset(offset).limit(limit).load(conn).await?;
                    Ok::<_, diesel::result::Error>((total, rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        let content = rows
            .into_iter()
            .map(row_to_person)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(
            content,
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn update(&self, person: &Person) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(persons::table.find(person.id().get()))
            .set(persons::name.eq(person.name().as_ref()))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_person)
            .transpose()
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<bool, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(persons::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
