//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Domain use-case port for reading employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Return every employee ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, Error>;

    /// Return one employee or an [`ErrorCode::NotFound`] error.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, Error>;
}
