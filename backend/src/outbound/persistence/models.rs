//! Diesel row types for the `persons` table.

use diesel::prelude::*;

use super::schema::persons;

/// Row read back from `persons`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i64,
    pub name: String,
}

/// Insertable row; the id comes from the sequence.
#[derive(Debug, Insertable)]
#[diesel(table_name = persons)]
pub(crate) struct NewPersonRow<'a> {
    pub name: &'a str,
}
