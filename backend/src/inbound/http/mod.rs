//! HTTP inbound adapter exposing the employee REST endpoints.

pub mod employee_dto;
pub mod employees;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;
