//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod companies;
pub mod employees;
pub mod health;

pub use companies::{
    company_employees_handler, company_list_handler, create_company_handler,
    delete_company_handler, get_company_handler, update_company_handler,
};
pub use employees::{
    create_employee_handler, delete_employee_handler, employee_list_handler,
    get_employee_handler, update_employee_handler,
};
pub use health::health_handler;
