//! Employee management service.

use crate::domain::entities::{Employee, EmployeeFilter, NewEmployee, UpdateEmployee};
use crate::domain::repositories::{CompanyRepository, EmployeeRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing employees.
///
/// Guarantees that an employee's `company_id`, when set, points at an
/// existing company.
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            employees,
            companies,
        }
    }

    /// Lists active employees matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_employees(&self, filter: EmployeeFilter) -> Result<Vec<Employee>, AppError> {
        self.employees.list(filter).await
    }

    /// Retrieves an active employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the employee does not exist or was deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_employee(&self, id: i64) -> Result<Employee, AppError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found", json!({"id": id})))
    }

    /// Creates a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `company_id` references no company.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        if let Some(company_id) = new_employee.company_id {
            self.ensure_company_exists(company_id).await?;
        }

        let employee = self.employees.create(new_employee).await?;
        tracing::info!(
            employee_id = employee.id,
            company_id = ?employee.company_id,
            "Employee created"
        );

        Ok(employee)
    }

    /// Applies a partial update to an active employee.
    ///
    /// An empty update returns the employee unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the employee or the referenced company
    /// does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_employee(
        &self,
        id: i64,
        update: UpdateEmployee,
    ) -> Result<Employee, AppError> {
        if update.is_empty() {
            return self.get_employee(id).await;
        }

        if let Some(Some(company_id)) = update.company_id {
            self.ensure_company_exists(company_id).await?;
        }

        self.employees.update(id, update).await
    }

    /// Soft-deletes an employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the employee does not exist or was
    /// already deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        self.employees.deactivate(id).await?;
        tracing::info!(employee_id = id, "Employee deactivated");
        Ok(())
    }

    /// Counts employees by their `active` flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_employees(&self, active: bool) -> Result<i64, AppError> {
        self.employees.count(active).await
    }

    async fn ensure_company_exists(&self, company_id: i64) -> Result<(), AppError> {
        if self.companies.exists(company_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Company not found",
                json!({"company_id": company_id}),
            ))
        }
    }
}
