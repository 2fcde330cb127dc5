//! Cache directives applied around the employee driving ports.
//!
//! | operation      | cache effect                                      |
//! |----------------|---------------------------------------------------|
//! | `save`         | put under the stored id                           |
//! | `update`       | put under the stored id, replacing any entry      |
//! | `find_all`     | none                                              |
//! | `find_by_id`   | single-flight read-through, only for ids `>= 1`   |
//! | `delete_by_id` | evict before the delete runs, again once it lands |
//! | `delete_all`   | evict everything after the delete succeeds        |

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::debug;

use crate::domain::ports::{EmployeeCache, EmployeeCommand, EmployeeQuery};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Decorator that applies the cache directives above to an inner service.
#[derive(Clone)]
pub struct CachedEmployeeService<S, C> {
    inner: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> CachedEmployeeService<S, C> {
    /// Wrap `inner` with `cache`.
    pub fn new(inner: Arc<S>, cache: Arc<C>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<S, C> EmployeeCommand for CachedEmployeeService<S, C>
where
    S: EmployeeCommand,
    C: EmployeeCache,
{
    async fn save(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        let stored = self.inner.save(draft).await?;
        self.cache.put(stored.clone()).await;
        Ok(stored)
    }

    async fn update(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        let stored = self.inner.update(draft).await?;
        self.cache.put(stored.clone()).await;
        Ok(stored)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), Error> {
        // Evicted even if the delete below fails.
        self.cache.evict(id).await;
        self.inner.delete_by_id(id).await?;
        // A read that began between the two steps may have cached the row.
        self.cache.evict(id).await;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.inner.delete_all().await?;
        self.cache.evict_all().await;
        Ok(())
    }
}

#[async_trait]
impl<S, C> EmployeeQuery for CachedEmployeeService<S, C>
where
    S: EmployeeQuery + 'static,
    C: EmployeeCache,
{
    async fn find_all(&self) -> Result<Vec<Employee>, Error> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, Error> {
        if !id.is_cacheable() {
            debug!(%id, "id outside cacheable range; reading store directly");
            return self.inner.find_by_id(id).await;
        }

        let inner = Arc::clone(&self.inner);
        let loader = async move {
            debug!(%id, "employee cache miss");
            inner.find_by_id(id).await
        }
        .boxed();
        self.cache.get_or_load(id, loader).await
    }
}
