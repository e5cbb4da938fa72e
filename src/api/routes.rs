//! API route configuration.

use crate::api::handlers::{
    company_employees_handler, company_list_handler, create_company_handler,
    create_employee_handler, delete_company_handler, delete_employee_handler,
    employee_list_handler, get_company_handler, get_employee_handler, update_company_handler,
    update_employee_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Company routes.
///
/// # Endpoints
///
/// - `GET    /companies`                       - List companies (optionally paginated)
/// - `POST   /companies`                       - Create a company
/// - `GET    /companies/{id}`                  - Company with its employees
/// - `PUT    /companies/{id}`                  - Rename a company
/// - `DELETE /companies/{id}`                  - Delete a company
/// - `GET    /companies/{company_id}/employees` - Active employees of a company
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(company_list_handler).post(create_company_handler),
        )
        .route(
            "/companies/{id}",
            get(get_company_handler)
                .put(update_company_handler)
                .delete(delete_company_handler),
        )
        .route(
            "/companies/{company_id}/employees",
            get(company_employees_handler),
        )
}

/// Employee routes.
///
/// # Endpoints
///
/// - `GET    /employees`      - List active employees (gender filter, pagination)
/// - `POST   /employees`      - Create an employee
/// - `GET    /employees/{id}` - Get an active employee
/// - `PUT    /employees/{id}` - Partially update an employee
/// - `DELETE /employees/{id}` - Soft-delete an employee
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(employee_list_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
}
