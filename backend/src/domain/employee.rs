//! Employee entity and identifier.

use std::fmt;

/// Primary key of an employee row.
///
/// Any `i64` is representable; whether an id is worth caching is decided by
/// [`EmployeeId::is_cacheable`], not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether lookups for this id may be served from and stored in the cache.
    ///
    /// Only ids from `1` upward are cached. Lower ids still reach the store;
    /// they are never rejected.
    #[must_use]
    pub const fn is_cacheable(self) -> bool {
        self.0 >= 1
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Primary key.
    pub id: EmployeeId,
    /// Display name, stored verbatim.
    pub name: String,
}

impl Employee {
    /// Build an employee from its parts.
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Input to save and update.
///
/// `id: None` asks the store to assign an identifier. `Some(id)` upserts:
/// the row is inserted when absent and fully overwritten when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    /// Requested identifier, if any.
    pub id: Option<EmployeeId>,
    /// Display name, stored verbatim.
    pub name: String,
}

impl EmployeeDraft {
    /// Draft without an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Draft targeting an explicit identifier.
    pub fn with_id(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Materialise the draft under the given identifier.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee { id, name: self.name }
    }
}
