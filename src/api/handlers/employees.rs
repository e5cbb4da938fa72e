//! Handlers for employee endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::employee::{
    CreateEmployeeRequest, EmployeeQueryParams, EmployeeResponse, UpdateEmployeeRequest,
};
use crate::domain::entities::EmployeeFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists active employees.
///
/// # Endpoint
///
/// `GET /employees[?gender=&pageNumber=&pageSize=]`
///
/// # Errors
///
/// Returns 400 if pagination parameters are invalid.
pub async fn employee_list_handler(
    State(state): State<AppState>,
    Query(params): Query<EmployeeQueryParams>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let page = params
        .pagination
        .to_page_request()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let filter = EmployeeFilter {
        company_id: None,
        gender: params.gender_filter(),
        page,
    };

    let employees = state.employee_service.list_employees(filter).await?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Returns one active employee.
///
/// # Endpoint
///
/// `GET /employees/{id}`
///
/// # Errors
///
/// Returns 404 if the employee does not exist or was deleted.
pub async fn get_employee_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee.into()))
}

/// Creates an employee.
///
/// # Endpoint
///
/// `POST /employees`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if `companyId` references no company.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    payload.validate()?;

    let employee = state
        .employee_service
        .create_employee(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Partially updates an employee.
///
/// # Endpoint
///
/// `PUT /employees/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the employee or the referenced company does not exist.
pub async fn update_employee_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    payload.validate()?;

    let employee = state
        .employee_service
        .update_employee(id, payload.into())
        .await?;

    Ok(Json(employee.into()))
}

/// Soft-deletes an employee.
///
/// # Endpoint
///
/// `DELETE /employees/{id}`
///
/// # Errors
///
/// Returns 404 if the employee does not exist or was already deleted.
pub async fn delete_employee_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
