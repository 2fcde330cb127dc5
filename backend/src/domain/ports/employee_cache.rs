//! Port for the employee read-through/write-through cache.
use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::domain::{Employee, EmployeeId, Error};

/// Deferred backing read handed to [`EmployeeCache::get_or_load`].
pub type EmployeeLoader = BoxFuture<'static, Result<Employee, Error>>;

/// Cache of employees keyed by id.
#[async_trait]
pub trait EmployeeCache: Send + Sync {
    /// Return the cached employee, if any.
    async fn get(&self, id: EmployeeId) -> Option<Employee>;

    /// Store `employee` under its id, replacing any previous entry.
    async fn put(&self, employee: Employee);

    /// Remove the entry for `id`.
    async fn evict(&self, id: EmployeeId);

    /// Remove every entry.
    async fn evict_all(&self);

    /// Return the cached employee or populate the entry from `loader`.
    ///
    /// Calls for the same missing key run one at a time: the first runs its
    /// loader and later callers read the stored value without loading.
    /// Failed loads leave the cache untouched. A `put` or `evict` on the key
    /// issued while a load is in flight takes effect after it.
    async fn get_or_load(&self, id: EmployeeId, loader: EmployeeLoader) -> Result<Employee, Error>;
}
