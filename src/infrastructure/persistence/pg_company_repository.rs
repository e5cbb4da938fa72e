//! PostgreSQL implementation of the company repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Company, NewCompany, PageRequest};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(r: CompanyRow) -> Self {
        Company::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

/// PostgreSQL repository for companies.
///
/// Deletion is physical; the `employees.company_id` foreign key is
/// `ON DELETE SET NULL`, so employees survive their company.
pub struct PgCompanyRepository {
    pool: Arc<PgPool>,
}

impl PgCompanyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, new_company: NewCompany) -> Result<Company, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_company.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Company::from))
    }

    async fn list(&self, page: Option<PageRequest>) -> Result<Vec<Company>, AppError> {
        // LIMIT NULL means no limit in PostgreSQL.
        let (offset, limit) = match page {
            Some(p) => (p.offset, Some(p.limit)),
            None => (0, None),
        };

        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM companies
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn update_name(&self, id: i64, name: String) -> Result<Company, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies SET
                name       = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Company::from)
            .ok_or_else(|| AppError::not_found("Company not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Company not found",
                json!({"id": id}),
            ));
        }

        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
