//! JSON representation of an employee.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

/// Employee payload accepted by save/update and returned by every read.
///
/// `id` may be omitted on save to let the store assign one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    /// Store-assigned identifier; absent on save to request a new one.
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Display name, stored verbatim.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
}

impl From<EmployeeDto> for EmployeeDraft {
    fn from(value: EmployeeDto) -> Self {
        Self {
            id: value.id.map(EmployeeId::new),
            name: value.name,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        Self {
            id: Some(value.id.get()),
            name: value.name,
        }
    }
}
