//! Port for employee persistence adapters and their errors.
//!
//! Every method is one atomic unit of work. Adapters backed by a
//! transactional store run `find_all` and `find_by_id` in read-only
//! transactions and the mutating methods in read-write transactions.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
    }
}

/// Store capability set over the employee table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert or upsert a draft and return the stored row.
    ///
    /// A draft without an id receives a store-assigned one.
    async fn save(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError>;

    /// Return every row ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch a row by id. A missing row is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Delete a row by id. Deleting a missing id succeeds.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError>;

    /// Delete every row.
    async fn delete_all(&self) -> Result<(), EmployeeRepositoryError>;
}

#[derive(Debug, Default)]
struct FixtureState {
    rows: BTreeMap<EmployeeId, Employee>,
    last_id: i64,
}

/// In-memory repository used when no database is configured.
///
/// Generated ids continue from the highest id seen so far, so explicit-id
/// upserts never collide with later generated ones.
#[derive(Debug, Default)]
pub struct FixtureEmployeeRepository {
    state: Mutex<FixtureState>,
}

impl FixtureEmployeeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut FixtureState) -> T,
    ) -> Result<T, EmployeeRepositoryError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| EmployeeRepositoryError::connection("in-memory store lock poisoned"))?;
        Ok(f(&mut state))
    }
}

#[async_trait]
impl EmployeeRepository for FixtureEmployeeRepository {
    async fn save(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        self.with_state(|state| {
            let id = match draft.id {
                Some(id) => id,
                None => state
                    .last_id
                    .checked_add(1)
                    .map(EmployeeId::new)
                    .ok_or_else(|| EmployeeRepositoryError::query("employee id space exhausted"))?,
            };
            state.last_id = state.last_id.max(id.get());
            let employee = draft.clone().into_employee(id);
            state.rows.insert(id, employee.clone());
            Ok(employee)
        })?
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        self.with_state(|state| state.rows.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        self.with_state(|state| state.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        self.with_state(|state| {
            state.rows.remove(&id);
        })
    }

    async fn delete_all(&self) -> Result<(), EmployeeRepositoryError> {
        self.with_state(|state| state.rows.clear())
    }
}
