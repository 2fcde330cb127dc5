//! In-process employee cache backed by `moka`.
//!
//! Every write to a key goes through moka's entry compute API, which runs
//! calls on the same key one at a time. A read-through load holds that slot
//! while the backing read runs, so concurrent misses collapse into one read
//! and a `put` or `evict` issued mid-load lands after the loaded value rather
//! than underneath it. `evict_all` cannot take per-key slots, so it bumps an
//! epoch instead; loads that straddle a clear do not keep their value.
//!
//! Bounding and eviction are left to moka's defaults; the only knob is the
//! entry capacity.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use tracing::debug;

use crate::domain::ports::{EmployeeCache, EmployeeLoader};
use crate::domain::{Employee, EmployeeId, Error};

/// Default number of entries kept before moka starts evicting.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// `moka`-backed implementation of the [`EmployeeCache`] port.
#[derive(Clone)]
pub struct MokaEmployeeCache {
    entries: Cache<EmployeeId, Employee>,
    clears: Arc<AtomicU64>,
}

impl MokaEmployeeCache {
    /// Create a cache holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(max_capacity).build(),
            clears: Arc::new(AtomicU64::new(0)),
        }
    }

    fn clear_epoch(&self) -> u64 {
        self.clears.load(Ordering::Acquire)
    }
}

impl Default for MokaEmployeeCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[async_trait]
impl EmployeeCache for MokaEmployeeCache {
    async fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.entries.get(&id).await
    }

    async fn put(&self, employee: Employee) {
        self.entries
            .entry(employee.id)
            .and_compute_with(move |_| async move { Op::Put(employee) })
            .await;
    }

    async fn evict(&self, id: EmployeeId) {
        self.entries
            .entry(id)
            .and_compute_with(|_| async { Op::Remove })
            .await;
    }

    async fn evict_all(&self) {
        self.clears.fetch_add(1, Ordering::AcqRel);
        self.entries.invalidate_all();
        debug!("employee cache cleared");
    }

    async fn get_or_load(&self, id: EmployeeId, loader: EmployeeLoader) -> Result<Employee, Error> {
        if let Some(hit) = self.entries.get(&id).await {
            return Ok(hit);
        }

        let epoch = self.clear_epoch();
        let clears = &self.clears;
        let mut loaded = None;
        let slot = &mut loaded;
        let outcome = self
            .entries
            .entry(id)
            .and_try_compute_with(move |current| async move {
                if current.is_some() {
                    return Ok::<_, Error>(Op::Nop);
                }
                let employee = loader.await?;
                *slot = Some(employee.clone());
                if clears.load(Ordering::Acquire) == epoch {
                    Ok(Op::Put(employee))
                } else {
                    Ok(Op::Nop)
                }
            })
            .await?;

        // A clear racing the insert above may have missed it.
        if self.clear_epoch() != epoch {
            self.entries.invalidate(&id).await;
        }

        match outcome {
            CompResult::Inserted(entry)
            | CompResult::ReplacedWith(entry)
            | CompResult::Unchanged(entry) => Ok(entry.into_value()),
            CompResult::Removed(_) | CompResult::StillNone(_) => loaded
                .ok_or_else(|| Error::internal(format!("employee cache lost entry {id}"))),
        }
    }
}
