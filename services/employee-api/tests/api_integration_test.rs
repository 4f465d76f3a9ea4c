mod common;

use axum::http::StatusCode;
use common::{employee_path, setup_postgres_fixture, EMPLOYEES_PATH};
use employee_api::ApiResponse;
use serde_json::{json, Value};
use shared::models::Employee;
use uuid::Uuid;

#[tokio::test]
async fn test_employee_lifecycle() {
    let fixture = setup_postgres_fixture().await.unwrap();
    let server = &fixture.server;

    // Create
    let response = server
        .post(EMPLOYEES_PATH)
        .json(&json!({"name": "John Doe", "department": "IT"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let employee_id = response.json::<ApiResponse<String>>().data.unwrap();
    assert!(Uuid::parse_str(&employee_id).is_ok());

    // Read back
    let response = server.get(&employee_path(&employee_id)).await;
    response.assert_status(StatusCode::OK);
    let employee = response.json::<ApiResponse<Employee>>().data.unwrap();
    assert_eq!(employee, Employee::new("John Doe", "IT").with_employee_id(&employee_id));

    // Update, with a stray id in the body
    let response = server
        .put(&employee_path(&employee_id))
        .json(&json!({"employeeId": Uuid::new_v4().to_string(), "name": "John Smith", "department": "IT"}))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"data": 1}));

    let employee = server
        .get(&employee_path(&employee_id))
        .await
        .json::<ApiResponse<Employee>>()
        .data
        .unwrap();
    assert_eq!(employee.name, "John Smith");
    assert_eq!(employee.employee_id, employee_id);

    // Delete, then it is gone
    let response = server.delete(&employee_path(&employee_id)).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"data": 1}));

    server
        .get(&employee_path(&employee_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server.delete(&employee_path(&employee_id)).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"data": 0}));
}

#[tokio::test]
async fn test_get_never_inserted_id_is_404() {
    let fixture = setup_postgres_fixture().await.unwrap();

    let response = fixture
        .server
        .get(&employee_path(&Uuid::new_v4().to_string()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_get_id_with_nul_is_404() {
    let fixture = setup_postgres_fixture().await.unwrap();

    let response = fixture.server.get(&employee_path("a%00b")).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generated_ids_are_unique() {
    let fixture = setup_postgres_fixture().await.unwrap();
    let mut ids = std::collections::HashSet::new();

    for _ in 0..10 {
        let response = fixture
            .server
            .post(EMPLOYEES_PATH)
            .json(&json!({"name": "John Doe", "department": "IT"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        ids.insert(response.json::<ApiResponse<String>>().data.unwrap());
    }

    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_delete_all_then_list_is_empty() {
    let fixture = setup_postgres_fixture().await.unwrap();
    let server = &fixture.server;

    for name in ["John Doe", "Jane Roe"] {
        server
            .post(EMPLOYEES_PATH)
            .json(&json!({"name": name, "department": "IT"}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.delete(EMPLOYEES_PATH).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"data": 2}));

    let response = server.get(EMPLOYEES_PATH).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"data": []}));
}
