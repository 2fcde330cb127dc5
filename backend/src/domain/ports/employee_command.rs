//! Driving port for employee mutations.
//!
//! Inbound adapters call this port; they never reach the repository
//! directly.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Domain use-case port for creating, updating and deleting employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Insert or upsert an employee and return the stored record.
    async fn save(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Upsert an employee and return the stored record.
    ///
    /// Persistence behaves exactly like [`EmployeeCommand::save`]; callers
    /// that cache results must overwrite unconditionally.
    async fn update(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Delete one employee. Missing ids are not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), Error>;

    /// Delete every employee.
    async fn delete_all(&self) -> Result<(), Error>;
}
