//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the employee endpoints and health probes from the
//! inbound layer together with their payload schemas. The document backs
//! Swagger UI in debug builds and is exported by `cargo run --bin
//! openapi-dump` for external tooling.

use crate::domain::{ErrorCode, ErrorDto};
use crate::inbound::http::employee_dto::EmployeeDto;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee service API",
        description = "CRUD operations over employees, served through a read-through cache."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::save,
        crate::inbound::http::employees::update,
        crate::inbound::http::employees::find_all,
        crate::inbound::http::employees::find_by_id,
        crate::inbound::http::employees::delete_by_id,
        crate::inbound::http::employees::delete_all,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeDto, ErrorDto, ErrorCode)),
    tags(
        (name = "employees", description = "Employee CRUD operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
