//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CompanyRepository`] - Company CRUD operations
//! - [`EmployeeRepository`] - Employee CRUD and per-company aggregation

pub mod company_repository;
pub mod employee_repository;

pub use company_repository::CompanyRepository;
pub use employee_repository::EmployeeRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
