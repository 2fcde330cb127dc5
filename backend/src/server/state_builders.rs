//! Builders for the HTTP state: repository selection and cache wiring.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::domain::ports::{EmployeeRepository, FixtureEmployeeRepository};
use crate::domain::{CachedEmployeeService, EmployeeService};
use crate::inbound::http::state::HttpState;
use crate::outbound::cache::MokaEmployeeCache;
use crate::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

/// Wrap `repository` in the service layer and the cache decorator.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use backend::domain::ports::FixtureEmployeeRepository;
/// use backend::server::cached_state;
///
/// let _state = cached_state(Arc::new(FixtureEmployeeRepository::new()), 100);
/// ```
pub fn cached_state<R>(repository: Arc<R>, cache_capacity: u64) -> HttpState
where
    R: EmployeeRepository + 'static,
{
    let service = Arc::new(EmployeeService::new(repository));
    let cache = Arc::new(MokaEmployeeCache::new(cache_capacity));
    HttpState::from_service(Arc::new(CachedEmployeeService::new(service, cache)))
}

/// Build the shared HTTP state, using PostgreSQL when a pool is configured
/// and the in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("employee store: postgresql");
            cached_state(
                Arc::new(DieselEmployeeRepository::new(pool.clone())),
                config.cache_capacity(),
            )
        }
        None => {
            info!("employee store: in-memory fixture");
            cached_state(
                Arc::new(FixtureEmployeeRepository::new()),
                config.cache_capacity(),
            )
        }
    };
    web::Data::new(state)
}
