//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `sqlx::FromRow`.
//!
//! # Repositories
//!
//! - [`PgCompanyRepository`] - Company storage and retrieval
//! - [`PgEmployeeRepository`] - Employee storage, soft delete, and aggregation

pub mod pg_company_repository;
pub mod pg_employee_repository;

pub use pg_company_repository::PgCompanyRepository;
pub use pg_employee_repository::PgEmployeeRepository;
