//! Business logic services for the application layer.

pub mod company_service;
pub mod employee_service;

pub use company_service::CompanyService;
pub use employee_service::EmployeeService;
