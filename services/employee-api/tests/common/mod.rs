#![allow(dead_code)]

use anyhow::Result;
use axum_test::TestServer;
use employee_api::{create_app, AppState};
use shared::test_environment::TestEnvironment;
use shared::test_utils::InMemoryEmployeeStore;
use std::sync::Arc;

pub const EMPLOYEES_PATH: &str = "/api/v1/employees";

pub fn employee_path(employee_id: &str) -> String {
    format!("{}/{}", EMPLOYEES_PATH, employee_id)
}

pub struct InMemoryFixture {
    pub store: Arc<InMemoryEmployeeStore>,
    pub server: TestServer,
}

pub fn setup_in_memory_fixture() -> Result<InMemoryFixture> {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = create_app(AppState::new(store.clone()));
    let server = TestServer::new(app)?;
    Ok(InMemoryFixture { store, server })
}

pub struct PostgresFixture {
    pub server: TestServer,
    test_env: TestEnvironment,
}

pub async fn setup_postgres_fixture() -> Result<PostgresFixture> {
    let test_env = TestEnvironment::new().await?;
    let app = create_app(AppState::from_pool(&test_env.db_pool));
    let server = TestServer::new(app)?;
    Ok(PostgresFixture { server, test_env })
}
