//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Company`] - An organization owning employees
//! - [`Employee`] - An individual, soft-deleted via its `active` flag
//!
//! # Design Pattern
//!
//! Separate structs are used for writes:
//! - `NewCompany`, `NewEmployee` - For creating new records
//! - `UpdateEmployee` - For partial updates

pub mod company;
pub mod employee;

pub use company::{Company, CompanyDetails, CompanySummary, NewCompany};
pub use employee::{Employee, EmployeeFilter, NewEmployee, PageRequest, UpdateEmployee};
