//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! Each port method checks out one pooled connection and runs one
//! transaction: reads use `READ ONLY`, mutations use `READ WRITE`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::models::{EmployeeRow, EmployeeUpsertRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Serialises sequence adjustments across concurrent explicit upserts.
const LOCK_ID_SEQUENCE: &str = "SELECT pg_advisory_xact_lock(hashtext('employees_id_seq'))";

/// Moves the identity sequence up to an explicitly upserted id. Never lowers
/// it: `nextval` is not transactional, so values above the committed maximum
/// may already belong to in-flight inserts.
const ADVANCE_ID_SEQUENCE: &str =
    "SELECT setval('employees_id_seq', $1) FROM employees_id_seq WHERE $1 >= last_value";

/// Diesel-backed implementation of the [`EmployeeRepository`] port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn connection(
        &self,
    ) -> Result<
        diesel_async::pooled_connection::bb8::PooledConnection<'_, AsyncPgConnection>,
        EmployeeRepositoryError,
    > {
        self.pool.get().await.map_err(map_pool_error)
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EmployeeRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            EmployeeRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeeRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            EmployeeRepositoryError::query("employee id already taken")
        }
        _ => EmployeeRepositoryError::query("database error"),
    }
}

async fn insert_generated(
    conn: &mut AsyncPgConnection,
    name: &str,
) -> Result<EmployeeRow, diesel::result::Error> {
    diesel::insert_into(employees::table)
        .values(&NewEmployeeRow { name })
        .returning(EmployeeRow::as_returning())
        .get_result(conn)
        .await
}

async fn upsert_explicit(
    conn: &mut AsyncPgConnection,
    id: EmployeeId,
    name: &str,
) -> Result<EmployeeRow, diesel::result::Error> {
    let row = diesel::insert_into(employees::table)
        .values(&EmployeeUpsertRow { id: id.get(), name })
        .on_conflict(employees::id)
        .do_update()
        .set(employees::name.eq(excluded(employees::name)))
        .returning(EmployeeRow::as_returning())
        .get_result(conn)
        .await?;
    diesel::sql_query(LOCK_ID_SEQUENCE).execute(conn).await?;
    diesel::sql_query(ADVANCE_ID_SEQUENCE)
        .bind::<BigInt, _>(id.get())
        .execute(conn)
        .await?;
    Ok(row)
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn save(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.connection().await?;

        let row = conn
            .build_transaction()
            .read_write()
            .run(|conn| {
                async move {
                    match draft.id {
                        Some(id) => upsert_explicit(conn, id, &draft.name).await,
                        None => insert_generated(conn, &draft.name).await,
                    }
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.connection().await?;

        let rows: Vec<EmployeeRow> = conn
            .build_transaction()
            .read_only()
            .run(|conn| {
                async move {
                    employees::table
                        .select(EmployeeRow::as_select())
                        .order_by(employees::id)
                        .load(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.connection().await?;

        let row: Option<EmployeeRow> = conn
            .build_transaction()
            .read_only()
            .run(|conn| {
                async move {
                    employees::table
                        .find(id.get())
                        .select(EmployeeRow::as_select())
                        .first(conn)
                        .await
                        .optional()
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.connection().await?;

        let deleted = conn
            .build_transaction()
            .read_write()
            .run(|conn| {
                async move { diesel::delete(employees::table.find(id.get())).execute(conn).await }
                    .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        debug!(%id, deleted, "employee delete executed");
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.connection().await?;

        let deleted = conn
            .build_transaction()
            .read_write()
            .run(|conn| async move { diesel::delete(employees::table).execute(conn).await }.scope_boxed())
            .await
            .map_err(map_diesel_error)?;

        debug!(deleted, "employee table cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(diesel::result::Error::NotFound, "record not found")]
    #[case(diesel::result::Error::RollbackTransaction, "database error")]
    fn diesel_errors_map_to_query_failures(
        #[case] error: diesel::result::Error,
        #[case] expected: &str,
    ) {
        assert_eq!(map_diesel_error(error), EmployeeRepositoryError::query(expected));
    }

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, EmployeeRepositoryError::connection("timed out"));
    }
}
