//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::company_service::CompanyService`] - Company CRUD and employee counts
//! - [`services::employee_service::EmployeeService`] - Employee CRUD with company checks

pub mod services;
