//! DTOs for company endpoints.

use serde::{Deserialize, Serialize};

use crate::api::dto::employee::EmployeeResponse;
use crate::domain::entities::{Company, CompanyDetails, CompanySummary};

/// Body of `POST /companies` and `PUT /companies/{id}`.
///
/// Accepts either `{"name": "..."}` or a bare JSON string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CompanyRequest {
    Named { name: String },
    Bare(String),
}

impl CompanyRequest {
    pub fn into_name(self) -> String {
        match self {
            CompanyRequest::Named { name } | CompanyRequest::Bare(name) => name,
        }
    }
}

/// Company as returned by the API.
///
/// `employees` is only present on single-company reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<EmployeeResponse>>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            employees_count: None,
            employees: None,
        }
    }
}

impl From<CompanySummary> for CompanyResponse {
    fn from(s: CompanySummary) -> Self {
        Self {
            employees_count: Some(s.employees_count),
            ..CompanyResponse::from(s.company)
        }
    }
}

impl From<CompanyDetails> for CompanyResponse {
    fn from(d: CompanyDetails) -> Self {
        let employees: Vec<EmployeeResponse> =
            d.employees.into_iter().map(EmployeeResponse::from).collect();

        Self {
            employees_count: Some(employees.len() as i64),
            employees: Some(employees),
            ..CompanyResponse::from(d.company)
        }
    }
}
