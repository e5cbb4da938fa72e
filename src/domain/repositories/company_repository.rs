//! Repository trait for company data access.

use crate::domain::entities::{Company, NewCompany, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing companies.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCompanyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_company.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Inserts a new company and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_company: NewCompany) -> Result<Company, AppError>;

    /// Finds a company by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError>;

    /// Lists companies in insertion order, optionally restricted to a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: Option<PageRequest>) -> Result<Vec<Company>, AppError>;

    /// Renames a company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_name(&self, id: i64, name: String) -> Result<Company, AppError>;

    /// Deletes a company. Its employees are detached, not removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Returns `true` if a company with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all companies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
