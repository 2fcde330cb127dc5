//! Employee domain service.
//!
//! Implements the driving ports over an [`EmployeeRepository`]. Each call is
//! exactly one repository call, and therefore one transaction; failures abort
//! and propagate without retry.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    EmployeeCommand, EmployeeQuery, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Employee service implementing [`EmployeeCommand`] and [`EmployeeQuery`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn save(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.repository
            .save(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.save(draft).await
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), Error> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.repository
            .delete_all()
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn find_all(&self) -> Result<Vec<Employee>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("employee {id} not found")))
    }
}
