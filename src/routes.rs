//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check
//! - `/companies*`  - Company API
//! - `/employees*`  - Employee API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::routes::{company_routes, employee_routes};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state and tracing applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(company_routes())
        .merge(employee_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{CompanyService, EmployeeService};
    use crate::domain::entities::{Company, Employee};
    use crate::domain::repositories::{MockCompanyRepository, MockEmployeeRepository};
    use crate::error::AppError;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn company(id: i64, name: &str) -> Company {
        Company::new(id, name.to_string(), Utc::now(), Utc::now())
    }

    fn employee(id: i64, company_id: Option<i64>) -> Employee {
        Employee {
            id,
            name: "Bob".to_string(),
            age: 22,
            gender: "Male".to_string(),
            salary: 10000,
            company_id,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Builds a server whose services share the given mocks.
    fn make_server(companies: MockCompanyRepository, employees: MockEmployeeRepository) -> TestServer {
        let companies: Arc<MockCompanyRepository> = Arc::new(companies);
        let employees: Arc<MockEmployeeRepository> = Arc::new(employees);

        let state = AppState::new(
            Arc::new(CompanyService::new(companies.clone(), employees.clone())),
            Arc::new(EmployeeService::new(employees, companies)),
        );

        TestServer::new(api_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_list_companies() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_list()
            .returning(|_| Ok(vec![company(1, "OOCL")]));

        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_count_active_by_companies()
            .returning(|_| Ok(HashMap::from([(1, 1)])));

        let response = make_server(companies, employees).get("/companies").await;

        response.assert_status_ok();
        response.assert_json(&json!([{ "id": 1, "name": "OOCL", "employeesCount": 1 }]));
    }

    #[tokio::test]
    async fn test_list_companies_invalid_page() {
        let response = make_server(MockCompanyRepository::new(), MockEmployeeRepository::new())
            .get("/companies")
            .add_query_param("pageNumber", "0")
            .add_query_param("pageSize", "2")
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_get_company_embeds_employees() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|id| Ok(Some(company(id, "Orient Overseas Container Line"))));

        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_list()
            .returning(|filter| Ok(vec![employee(5, filter.company_id)]));

        let response = make_server(companies, employees).get("/companies/1").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Orient Overseas Container Line");
        assert_eq!(body["employeesCount"], 1);
        assert_eq!(body["employees"][0]["id"], 5);
        assert_eq!(body["employees"][0]["name"], "Bob");
        assert_eq!(body["employees"][0]["age"], 22);
        assert_eq!(body["employees"][0]["gender"], "Male");
        assert_eq!(body["employees"][0]["salary"], 10000);
    }

    #[tokio::test]
    async fn test_get_company_not_found() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_find_by_id().returning(|_| Ok(None));

        let response = make_server(companies, MockEmployeeRepository::new())
            .get("/companies/9")
            .await;

        response.assert_status_not_found();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["details"]["id"], 9);
    }

    #[tokio::test]
    async fn test_create_company_from_bare_string() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_create()
            .times(1)
            .returning(|new_company| Ok(company(1, &new_company.name)));

        let response = make_server(companies, MockEmployeeRepository::new())
            .post("/companies")
            .json(&json!("Orient Overseas Container Line"))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "id": 1,
            "name": "Orient Overseas Container Line",
            "employeesCount": 0
        }));
    }

    #[tokio::test]
    async fn test_create_company_blank_name() {
        let response = make_server(MockCompanyRepository::new(), MockEmployeeRepository::new())
            .post("/companies")
            .json(&json!({ "name": "" }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_create_company_with_nul_character() {
        let response = make_server(MockCompanyRepository::new(), MockEmployeeRepository::new())
            .post("/companies")
            .json(&json!("OO\u{0}CL"))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_update_company_returns_no_content() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_update_name()
            .withf(|id, name| *id == 1 && name == "Meta")
            .times(1)
            .returning(|id, name| Ok(company(id, &name)));

        let response = make_server(companies, MockEmployeeRepository::new())
            .put("/companies/1")
            .json(&json!({ "name": "Meta" }))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_company_missing() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_delete()
            .returning(|id| Err(AppError::not_found("Company not found", json!({"id": id}))));

        let response = make_server(companies, MockEmployeeRepository::new())
            .delete("/companies/3")
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_company_employees() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_exists().returning(|_| Ok(true));

        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_list()
            .withf(|filter| filter.company_id == Some(2))
            .returning(|_| Ok(vec![employee(1, Some(2))]));

        let response = make_server(companies, employees)
            .get("/companies/2/employees")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["companyId"], 2);
    }

    #[tokio::test]
    async fn test_create_employee_validation_error() {
        let response = make_server(MockCompanyRepository::new(), MockEmployeeRepository::new())
            .post("/employees")
            .json(&json!({ "name": "Jens", "age": -3, "gender": "Male", "salary": 5000 }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert!(body["error"]["details"]["fields"].get("age").is_some());
    }

    #[tokio::test]
    async fn test_create_employee_with_nul_character() {
        let response = make_server(MockCompanyRepository::new(), MockEmployeeRepository::new())
            .post("/employees")
            .json(&json!({ "name": "J\u{0}", "age": 30, "gender": "Male", "salary": 5000 }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["details"]["fields"].get("name").is_some());
    }

    #[tokio::test]
    async fn test_update_employee_null_company_unassigns() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_update()
            .withf(|id, u| *id == 3 && u.company_id == Some(None))
            .times(1)
            .returning(|id, _| Ok(employee(id, None)));

        let response = make_server(MockCompanyRepository::new(), employees)
            .put("/employees/3")
            .json(&json!({ "companyId": null }))
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert!(body["companyId"].is_null());
    }

    #[tokio::test]
    async fn test_list_employees_empty_gender_is_unfiltered() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_list()
            .withf(|filter| filter.gender.is_none())
            .times(1)
            .returning(|_| Ok(vec![employee(1, None)]));

        let response = make_server(MockCompanyRepository::new(), employees)
            .get("/employees")
            .add_query_param("gender", "")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_employees_by_gender() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_list()
            .withf(|filter| filter.gender.as_deref() == Some("Female") && filter.company_id.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let response = make_server(MockCompanyRepository::new(), employees)
            .get("/employees")
            .add_query_param("gender", "Female")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_health_reports_database() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_count().returning(|| Ok(3));

        let response = make_server(companies, MockEmployeeRepository::new())
            .get("/health")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_degraded() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_count()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let response = make_server(companies, MockEmployeeRepository::new())
            .get("/health")
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "degraded");
    }
}
