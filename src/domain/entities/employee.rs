//! Domain entity representing an employee.

use chrono::{DateTime, Utc};

/// An individual, optionally assigned to a company.
///
/// Employees are never physically removed: deleting one clears `active`.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i64>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new employee. New employees are active.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i64>,
}

/// Partial update of an employee. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    /// `Some(None)` removes the employee from its company.
    pub company_id: Option<Option<i64>>,
}

impl UpdateEmployee {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.salary.is_none()
            && self.company_id.is_none()
    }
}

/// Criteria for listing active employees.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub company_id: Option<i64>,
    pub gender: Option<String>,
    pub page: Option<PageRequest>,
}

/// A validated `(offset, limit)` window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_without_company() {
        let new_employee = NewEmployee {
            name: "Jens".to_string(),
            age: 23,
            gender: "Male".to_string(),
            salary: 5000,
            company_id: None,
        };

        assert!(new_employee.company_id.is_none());
        assert_eq!(new_employee.salary, 5000);
    }

    #[test]
    fn test_update_employee_default_is_empty() {
        assert!(UpdateEmployee::default().is_empty());

        let update = UpdateEmployee {
            salary: Some(12000),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let unassign = UpdateEmployee {
            company_id: Some(None),
            ..Default::default()
        };
        assert!(!unassign.is_empty());
    }

    #[test]
    fn test_filter_default() {
        let filter = EmployeeFilter::default();
        assert!(filter.company_id.is_none());
        assert!(filter.gender.is_none());
        assert!(filter.page.is_none());
    }
}
