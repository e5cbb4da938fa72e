//! Handlers for company endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::company::{CompanyRequest, CompanyResponse};
use crate::api::dto::employee::EmployeeResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists companies with their employee counts.
///
/// # Endpoint
///
/// `GET /companies[?pageNumber=&pageSize=]`
///
/// Pages are 1-indexed and only applied when both parameters are present.
/// Companies are always returned in insertion order.
///
/// # Errors
///
/// Returns 400 if pagination parameters are invalid.
pub async fn company_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let page = params
        .to_page_request()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let companies = state.company_service.list_companies(page).await?;

    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// Returns one company with its active employees embedded.
///
/// # Endpoint
///
/// `GET /companies/{id}`
///
/// # Errors
///
/// Returns 404 if the company does not exist.
pub async fn get_company_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CompanyResponse>, AppError> {
    let details = state.company_service.get_company(id).await?;
    Ok(Json(details.into()))
}

/// Creates a company.
///
/// # Endpoint
///
/// `POST /companies`
///
/// Body is `{"name": "..."}` or a bare JSON string.
///
/// # Errors
///
/// Returns 400 if the name is blank or longer than 255 characters.
pub async fn create_company_handler(
    State(state): State<AppState>,
    Json(payload): Json<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    let company = state
        .company_service
        .create_company(payload.into_name())
        .await?;

    Ok((StatusCode::CREATED, Json(company.into())))
}

/// Renames a company.
///
/// # Endpoint
///
/// `PUT /companies/{id}`
///
/// # Errors
///
/// Returns 400 if the name is invalid.
/// Returns 404 if the company does not exist.
pub async fn update_company_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CompanyRequest>,
) -> Result<StatusCode, AppError> {
    state
        .company_service
        .rename_company(id, payload.into_name())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a company.
///
/// # Endpoint
///
/// `DELETE /companies/{id}`
///
/// Employees of the company are kept with their company cleared.
///
/// # Errors
///
/// Returns 404 if the company does not exist.
pub async fn delete_company_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.company_service.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists the active employees of a company.
///
/// # Endpoint
///
/// `GET /companies/{company_id}/employees`
///
/// # Errors
///
/// Returns 404 if the company does not exist.
pub async fn company_employees_handler(
    Path(company_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state
        .company_service
        .list_company_employees(company_id)
        .await?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}
