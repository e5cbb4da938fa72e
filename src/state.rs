//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CompanyService, EmployeeService};

#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<CompanyService>,
    pub employee_service: Arc<EmployeeService>,
}

impl AppState {
    pub fn new(company_service: Arc<CompanyService>, employee_service: Arc<EmployeeService>) -> Self {
        Self {
            company_service,
            employee_service,
        }
    }
}
