//! PostgreSQL implementation of the employee repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeFilter, NewEmployee, UpdateEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    age: i32,
    gender: String,
    salary: i32,
    company_id: Option<i64>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(r: EmployeeRow) -> Self {
        Employee {
            id: r.id,
            name: r.name,
            age: r.age,
            gender: r.gender,
            salary: r.salary,
            company_id: r.company_id,
            active: r.active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for employees.
///
/// Uses soft delete: `active = FALSE` means deleted, and such rows are never
/// returned by reads.
pub struct PgEmployeeRepository {
    pool: Arc<PgPool>,
}

impl PgEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (name, age, gender, salary, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, age, gender, salary, company_id, active, created_at, updated_at
            "#,
        )
        .bind(new_employee.name)
        .bind(new_employee.age)
        .bind(new_employee.gender)
        .bind(new_employee.salary)
        .bind(new_employee.company_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, age, gender, salary, company_id, active, created_at, updated_at
            FROM employees
            WHERE id = $1 AND active
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn list(&self, filter: EmployeeFilter) -> Result<Vec<Employee>, AppError> {
        let (offset, limit) = match filter.page {
            Some(p) => (p.offset, Some(p.limit)),
            None => (0, None),
        };

        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, age, gender, salary, company_id, active, created_at, updated_at
            FROM employees
            WHERE active
              AND ($1::BIGINT IS NULL OR company_id = $1)
              AND ($2::TEXT IS NULL OR gender = $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.company_id)
        .bind(filter.gender)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn update(&self, id: i64, update: UpdateEmployee) -> Result<Employee, AppError> {
        let set_company = update.company_id.is_some();
        let company_id = update.company_id.flatten();

        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees SET
                name       = COALESCE($2::TEXT, name),
                age        = COALESCE($3::INTEGER, age),
                gender     = COALESCE($4::TEXT, gender),
                salary     = COALESCE($5::INTEGER, salary),
                company_id = CASE WHEN $6::BOOLEAN THEN $7::BIGINT ELSE company_id END,
                updated_at = NOW()
            WHERE id = $1 AND active
            RETURNING id, name, age, gender, salary, company_id, active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.age)
        .bind(update.gender)
        .bind(update.salary)
        .bind(set_company)
        .bind(company_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Employee::from)
            .ok_or_else(|| AppError::not_found("Employee not found", json!({"id": id})))
    }

    async fn deactivate(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Employee not found or already deleted",
                json!({"id": id}),
            ));
        }

        Ok(())
    }

    async fn count_active_by_companies(
        &self,
        company_ids: &[i64],
    ) -> Result<HashMap<i64, i64>, AppError> {
        if company_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT company_id, COUNT(*)
            FROM employees
            WHERE active AND company_id = ANY($1)
            GROUP BY company_id
            "#,
        )
        .bind(company_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn count(&self, active: bool) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE active = $1")
                .bind(active)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
