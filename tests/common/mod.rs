#![allow(dead_code)]

use sqlx::PgPool;
use company_registry::server::build_state;
use company_registry::state::AppState;

pub async fn create_test_company(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO companies (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_employee(pool: &PgPool, name: &str, company_id: Option<i64>) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO employees (name, age, gender, salary, company_id) VALUES ($1, 22, 'Male', 10000, $2) RETURNING id",
    )
    .bind(name)
    .bind(company_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_employee(pool: &PgPool, name: &str, company_id: Option<i64>) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO employees (name, age, gender, salary, company_id, active) VALUES ($1, 30, 'Female', 8000, $2, FALSE) RETURNING id",
    )
    .bind(name)
    .bind(company_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn find_company_name(pool: &PgPool, id: i64) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT name FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn employee_company_id(pool: &PgPool, id: i64) -> Option<i64> {
    sqlx::query_scalar::<_, Option<i64>>("SELECT company_id FROM employees WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    build_state(pool)
}
