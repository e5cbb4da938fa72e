//! Domain entity representing a company.

use chrono::{DateTime, Utc};

use super::Employee;

/// An organization that owns zero or more employees.
///
/// `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
}

/// A company together with the number of its active employees.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySummary {
    pub company: Company,
    pub employees_count: i64,
}

/// A company together with its active employees.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDetails {
    pub company: Company,
    pub employees: Vec<Employee>,
}
