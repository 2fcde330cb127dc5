//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::cache::DEFAULT_CACHE_CAPACITY;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    cache_capacity: u64,
}

impl ServerConfig {
    /// Construct a configuration binding to `bind_addr` over the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, employees are persisted in PostgreSQL instead of the
    /// in-memory fixture store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Bound the number of cached employees.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured cache capacity.
    #[must_use]
    pub fn cache_capacity(&self) -> u64 {
        self.cache_capacity
    }
}
