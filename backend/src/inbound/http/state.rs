//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeCommand, EmployeeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write side: save, update and deletes.
    pub employees: Arc<dyn EmployeeCommand>,
    /// Read side: list and lookup by id.
    pub employees_query: Arc<dyn EmployeeQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(employees: Arc<dyn EmployeeCommand>, employees_query: Arc<dyn EmployeeQuery>) -> Self {
        Self {
            employees,
            employees_query,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use backend::domain::EmployeeService;
    /// use backend::domain::ports::FixtureEmployeeRepository;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(EmployeeService::new(Arc::new(FixtureEmployeeRepository::default())));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: EmployeeCommand + EmployeeQuery + 'static,
    {
        Self {
            employees: service.clone(),
            employees_query: service,
        }
    }
}
