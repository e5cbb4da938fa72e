//! DTOs for employee endpoints.

use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use validator::{Validate, ValidationError};

use crate::api::dto::pagination::PaginationParams;
use crate::domain::entities::{Employee, NewEmployee, UpdateEmployee};

/// Body of `POST /employees`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(
        length(min = 1, max = 255, message = "must be 1-255 characters"),
        custom(function = "reject_nul")
    )]
    pub name: String,

    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: i32,

    #[validate(
        length(min = 1, max = 32, message = "must be 1-32 characters"),
        custom(function = "reject_nul")
    )]
    pub gender: String,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub salary: i32,

    pub company_id: Option<i64>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(r: CreateEmployeeRequest) -> Self {
        Self {
            name: r.name,
            age: r.age,
            gender: r.gender,
            salary: r.salary,
            company_id: r.company_id,
        }
    }
}

/// PostgreSQL text columns cannot store U+0000.
fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message("must not contain NUL characters".into()));
    }
    Ok(())
}

/// Body of `PUT /employees/{id}`. Omitted fields stay unchanged;
/// `"companyId": null` unassigns the employee.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(
        length(min = 1, max = 255, message = "must be 1-255 characters"),
        custom(function = "reject_nul")
    )]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: Option<i32>,

    #[validate(
        length(min = 1, max = 32, message = "must be 1-32 characters"),
        custom(function = "reject_nul")
    )]
    pub gender: Option<String>,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub salary: Option<i32>,

    #[serde(default, with = "double_option")]
    pub company_id: Option<Option<i64>>,
}

impl From<UpdateEmployeeRequest> for UpdateEmployee {
    fn from(r: UpdateEmployeeRequest) -> Self {
        Self {
            name: r.name,
            age: r.age,
            gender: r.gender,
            salary: r.salary,
            company_id: r.company_id,
        }
    }
}

/// Query parameters of `GET /employees`.
#[derive(Debug, Deserialize)]
pub struct EmployeeQueryParams {
    pub gender: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl EmployeeQueryParams {
    /// Gender filter; an empty `gender=` means no filter.
    pub fn gender_filter(&self) -> Option<String> {
        self.gender
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
    }
}

/// Employee as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            age: e.age,
            gender: e.gender,
            salary: e.salary,
            company_id: e.company_id,
        }
    }
}
