//! Repository trait for employee data access.

use std::collections::HashMap;

use crate::domain::entities::{Employee, EmployeeFilter, NewEmployee, UpdateEmployee};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing employees.
///
/// Read operations only ever return active employees. Deletion is a soft
/// delete that clears the `active` flag.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEmployeeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_employee.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new active employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `company_id` references no company.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;

    /// Finds an active employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Lists active employees in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: EmployeeFilter) -> Result<Vec<Employee>, AppError>;

    /// Applies a partial update to an active employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active employee has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateEmployee) -> Result<Employee, AppError>;

    /// Marks an active employee as inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active employee has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, id: i64) -> Result<(), AppError>;

    /// Counts active employees per company for the given company ids.
    ///
    /// Companies without active employees are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_active_by_companies(
        &self,
        company_ids: &[i64],
    ) -> Result<HashMap<i64, i64>, AppError>;

    /// Counts employees by their `active` flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, active: bool) -> Result<i64, AppError>;
}
