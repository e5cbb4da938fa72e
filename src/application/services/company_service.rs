//! Company management service.

use crate::domain::entities::{
    Company, CompanyDetails, CompanySummary, Employee, EmployeeFilter, NewCompany, PageRequest,
};
use crate::domain::repositories::{CompanyRepository, EmployeeRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Maximum length of a company name, matching the `companies.name` column.
pub const MAX_COMPANY_NAME_LEN: usize = 255;

/// Service for managing companies and reading their employees.
///
/// Computes the derived `employees_count` (active employees only) that the
/// API exposes alongside each company.
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            companies,
            employees,
        }
    }

    /// Lists companies in insertion order with their active employee counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_companies(
        &self,
        page: Option<PageRequest>,
    ) -> Result<Vec<CompanySummary>, AppError> {
        let companies = self.companies.list(page).await?;

        let ids: Vec<i64> = companies.iter().map(|c| c.id).collect();
        let counts = self.employees.count_active_by_companies(&ids).await?;

        Ok(companies
            .into_iter()
            .map(|company| {
                let employees_count = counts.get(&company.id).copied().unwrap_or(0);
                CompanySummary {
                    company,
                    employees_count,
                }
            })
            .collect())
    }

    /// Retrieves a company with its active employees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_company(&self, id: i64) -> Result<CompanyDetails, AppError> {
        let company = self.find_company(id).await?;
        let employees = self.active_employees_of(id).await?;

        Ok(CompanyDetails { company, employees })
    }

    /// Creates a new company. A fresh company has no employees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_company(&self, name: String) -> Result<CompanySummary, AppError> {
        let name = validate_company_name(name)?;

        let company = self.companies.create(NewCompany { name }).await?;
        tracing::info!(company_id = company.id, "Company created");

        Ok(CompanySummary {
            company,
            employees_count: 0,
        })
    }

    /// Renames a company. No other field is touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or too long.
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn rename_company(&self, id: i64, name: String) -> Result<Company, AppError> {
        let name = validate_company_name(name)?;
        self.companies.update_name(id, name).await
    }

    /// Deletes a company. Its employees stay, detached from any company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_company(&self, id: i64) -> Result<(), AppError> {
        self.companies.delete(id).await?;
        tracing::info!(company_id = id, "Company deleted");
        Ok(())
    }

    /// Lists the active employees of a company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_company_employees(&self, id: i64) -> Result<Vec<Employee>, AppError> {
        if !self.companies.exists(id).await? {
            return Err(company_not_found(id));
        }

        self.active_employees_of(id).await
    }

    /// Counts all companies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_companies(&self) -> Result<i64, AppError> {
        self.companies.count().await
    }

    async fn find_company(&self, id: i64) -> Result<Company, AppError> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| company_not_found(id))
    }

    async fn active_employees_of(&self, id: i64) -> Result<Vec<Employee>, AppError> {
        self.employees
            .list(EmployeeFilter {
                company_id: Some(id),
                ..Default::default()
            })
            .await
    }
}

fn company_not_found(id: i64) -> AppError {
    AppError::not_found("Company not found", json!({"id": id}))
}

/// Trims and checks a company name.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the trimmed name is empty, longer
/// than [`MAX_COMPANY_NAME_LEN`] characters or contains a NUL character.
fn validate_company_name(name: String) -> Result<String, AppError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Company name must not be empty",
            json!({"field": "name"}),
        ));
    }

    if trimmed.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err(AppError::bad_request(
            "Company name is too long",
            json!({"field": "name", "max": MAX_COMPANY_NAME_LEN}),
        ));
    }

    if trimmed.contains('\0') {
        return Err(AppError::bad_request(
            "Company name must not contain NUL characters",
            json!({"field": "name"}),
        ));
    }

    Ok(trimmed.to_string())
}
