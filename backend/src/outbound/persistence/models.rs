//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! to domain types before returning.

use diesel::prelude::*;

use super::schema::employees;
use crate::domain::{Employee, EmployeeId};

/// Row read from the `employees` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(EmployeeId::new(row.id), row.name)
    }
}

/// Insert without an id; the sequence assigns one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub name: &'a str,
}

/// Insert with an explicit id, used for upserts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpsertRow<'a> {
    pub id: i64,
    pub name: &'a str,
}
