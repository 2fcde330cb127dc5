//! Employee HTTP handlers.
//!
//! ```text
//! POST   /api/employee/save
//! POST   /api/employee/update
//! GET    /api/employee/findAll
//! GET    /api/employee/findById/{id}
//! DELETE /api/employee/deleteById/{id}
//! DELETE /api/employee/deleteAll
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use tracing::info;

use crate::domain::{EmployeeDraft, EmployeeId, ErrorDto};
use crate::inbound::http::ApiResult;
use crate::inbound::http::employee_dto::EmployeeDto;
use crate::inbound::http::state::HttpState;

/// Base path shared by every employee route.
pub const EMPLOYEE_SCOPE: &str = "/api/employee";

/// Register the employee routes under [`EMPLOYEE_SCOPE`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(EMPLOYEE_SCOPE)
            .service(save)
            .service(update)
            .service(find_all)
            .service(find_by_id)
            .service(delete_by_id)
            .service(delete_all),
    );
}

/// Insert an employee, or upsert it when `id` is present.
#[utoipa::path(
    post,
    path = "/api/employee/save",
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Stored employee", body = EmployeeDto),
        (status = 400, description = "Malformed payload"),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Employee store unavailable", body = ErrorDto)
    ),
    tags = ["employees"],
    operation_id = "saveEmployee"
)]
#[post("/save")]
pub async fn save(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDto>,
) -> ApiResult<web::Json<EmployeeDto>> {
    let draft = EmployeeDraft::from(payload.into_inner());
    info!(id = ?draft.id.map(EmployeeId::get), name = %draft.name, "save employee");
    let stored = state.employees.save(draft).await?;
    Ok(web::Json(stored.into()))
}

/// Overwrite an employee; inserts it when the id is unknown.
#[utoipa::path(
    post,
    path = "/api/employee/update",
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Stored employee", body = EmployeeDto),
        (status = 400, description = "Malformed payload"),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Employee store unavailable", body = ErrorDto)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[post("/update")]
pub async fn update(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDto>,
) -> ApiResult<web::Json<EmployeeDto>> {
    let draft = EmployeeDraft::from(payload.into_inner());
    info!(id = ?draft.id.map(EmployeeId::get), name = %draft.name, "update employee");
    let stored = state.employees.update(draft).await?;
    Ok(web::Json(stored.into()))
}

/// List every employee ordered by id.
#[utoipa::path(
    get,
    path = "/api/employee/findAll",
    responses(
        (status = 200, description = "All employees", body = [EmployeeDto]),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Employee store unavailable", body = ErrorDto)
    ),
    tags = ["employees"],
    operation_id = "findAllEmployees"
)]
#[get("/findAll")]
pub async fn find_all(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<EmployeeDto>>> {
    info!("find all employees");
    let employees = state.employees_query.find_all().await?;
    Ok(web::Json(employees.into_iter().map(EmployeeDto::from).collect()))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/employee/findById/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeDto),
        (status = 404, description = "No employee with this id; empty body"),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Employee store unavailable", body = ErrorDto)
    ),
    tags = ["employees"],
    operation_id = "findEmployeeById"
)]
#[get("/findById/{id}")]
pub async fn find_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<EmployeeDto>> {
    let id = EmployeeId::new(path.into_inner());
    info!(%id, "find employee");
    let employee = state.employees_query.find_by_id(id).await?;
    Ok(web::Json(employee.into()))
}

/// Delete one employee. Unknown ids still answer 200.
#[utoipa::path(
    delete,
    path = "/api/employee/deleteById/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Employee store unavailable", body = ErrorDto)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployeeById"
)]
#[delete("/deleteById/{id}")]
pub async fn delete_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    info!(%id, "delete employee");
    state.employees.delete_by_id(id).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete every employee.
#[utoipa::path(
    delete,
    path = "/api/employee/deleteAll",
    responses(
        (status = 200, description = "Deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Employee store unavailable", body = ErrorDto)
    ),
    tags = ["employees"],
    operation_id = "deleteAllEmployees"
)]
#[delete("/deleteAll")]
pub async fn delete_all(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    info!("delete all employees");
    state.employees.delete_all().await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{MockEmployeeCommand, MockEmployeeQuery};
    use crate::domain::{Employee, Error};

    fn state(command: MockEmployeeCommand, query: MockEmployeeQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(command), Arc::new(query)))
    }

    macro_rules! app {
        ($command:expr, $query:expr) => {
            test::init_service(
                App::new()
                    .app_data(state($command, $query))
                    .configure(configure),
            )
            .await
        };
    }

    #[rstest]
    #[actix_web::test]
    async fn save_forwards_the_draft_and_returns_the_stored_employee() {
        let mut command = MockEmployeeCommand::new();
        command
            .expect_save()
            .with(eq(EmployeeDraft::new("Ada")))
            .times(1)
            .returning(|draft| Ok(draft.into_employee(EmployeeId::new(12))));
        let app = app!(command, MockEmployeeQuery::new());

        let req = test::TestRequest::post()
            .uri("/api/employee/save")
            .set_json(json!({"name": "Ada"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"id": 12, "name": "Ada"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn update_uses_the_update_port() {
        let mut command = MockEmployeeCommand::new();
        command.expect_save().never();
        command
            .expect_update()
            .with(eq(EmployeeDraft::with_id(EmployeeId::new(1), "B")))
            .times(1)
            .returning(|draft| Ok(draft.into_employee(EmployeeId::new(1))));
        let app = app!(command, MockEmployeeQuery::new());

        let req = test::TestRequest::post()
            .uri("/api/employee/update")
            .set_json(json!({"id": 1, "name": "B"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"id": 1, "name": "B"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_body_is_rejected_before_the_port() {
        let mut command = MockEmployeeCommand::new();
        command.expect_save().never();
        let app = app!(command, MockEmployeeQuery::new());

        let req = test::TestRequest::post()
            .uri("/api/employee/save")
            .set_json(json!({"id": "one"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_web::test]
    async fn find_all_returns_a_json_array() {
        let mut query = MockEmployeeQuery::new();
        query.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Employee::new(EmployeeId::new(1), "A"),
                Employee::new(EmployeeId::new(2), "B"),
            ])
        });
        let app = app!(MockEmployeeCommand::new(), query);

        let req = test::TestRequest::get()
            .uri("/api/employee/findAll")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn find_by_id_returns_the_employee() {
        let mut query = MockEmployeeQuery::new();
        query
            .expect_find_by_id()
            .with(eq(EmployeeId::new(5)))
            .times(1)
            .returning(|id| Ok(Employee::new(id, "E")));
        let app = app!(MockEmployeeCommand::new(), query);

        let req = test::TestRequest::get()
            .uri("/api/employee/findById/5")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"id": 5, "name": "E"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn find_by_id_missing_is_an_empty_404() {
        let mut query = MockEmployeeQuery::new();
        query
            .expect_find_by_id()
            .returning(|id| Err(Error::not_found(format!("employee {id} not found"))));
        let app = app!(MockEmployeeCommand::new(), query);

        let req = test::TestRequest::get()
            .uri("/api/employee/findById/404")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(res).await.is_empty());
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[actix_web::test]
    async fn find_by_id_passes_non_positive_ids_through(#[case] raw: &str) {
        let expected: i64 = raw.parse().expect("numeric case");
        let mut query = MockEmployeeQuery::new();
        query
            .expect_find_by_id()
            .with(eq(EmployeeId::new(expected)))
            .times(1)
            .returning(|id| Ok(Employee::new(id, "edge")));
        let app = app!(MockEmployeeCommand::new(), query);

        let req = test::TestRequest::get()
            .uri(&format!("/api/employee/findById/{raw}"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn non_numeric_id_never_reaches_the_port() {
        let mut query = MockEmployeeQuery::new();
        query.expect_find_by_id().never();
        let app = app!(MockEmployeeCommand::new(), query);

        let req = test::TestRequest::get()
            .uri("/api/employee/findById/abc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_client_error());
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_by_id_answers_200_with_empty_body() {
        let mut command = MockEmployeeCommand::new();
        command
            .expect_delete_by_id()
            .with(eq(EmployeeId::new(3)))
            .times(1)
            .returning(|_| Ok(()));
        let app = app!(command, MockEmployeeQuery::new());

        let req = test::TestRequest::delete()
            .uri("/api/employee/deleteById/3")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(test::read_body(res).await.is_empty());
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_all_answers_200() {
        let mut command = MockEmployeeCommand::new();
        command.expect_delete_all().times(1).returning(|| Ok(()));
        let app = app!(command, MockEmployeeQuery::new());

        let req = test::TestRequest::delete()
            .uri("/api/employee/deleteAll")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn store_outage_maps_to_503_envelope() {
        let mut query = MockEmployeeQuery::new();
        query
            .expect_find_all()
            .returning(|| Err(Error::service_unavailable("employee repository unavailable")));
        let app = app!(MockEmployeeCommand::new(), query);

        let req = test::TestRequest::get()
            .uri("/api/employee/findAll")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "service_unavailable");
    }
}
