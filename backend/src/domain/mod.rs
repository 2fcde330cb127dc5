//! Domain primitives, services and ports.
//!
//! Purpose: hold the employee entity, the transport-agnostic error type and
//! the use-case services. Adapters in `inbound` and `outbound` depend on this
//! module, never the other way round.
//!
//! Public surface:
//! - [`Employee`], [`EmployeeDraft`], [`EmployeeId`]: the entity and its save input.
//! - [`Error`], [`ErrorCode`]: domain failures mapped by adapters.
//! - [`EmployeeService`]: service layer over the repository port.
//! - [`CachedEmployeeService`]: cache directives layered over the service.
//! - [`TraceId`]: request correlation identifier.

pub mod cached_employee_service;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::cached_employee_service::CachedEmployeeService;
pub use self::employee::{Employee, EmployeeDraft, EmployeeId};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorDto, ErrorValidationError};
pub use self::trace_id::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
