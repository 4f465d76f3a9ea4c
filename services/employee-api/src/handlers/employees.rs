use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use shared::models::Employee;

use super::parse_body;
use crate::{
    error::ServiceError,
    models::ApiResponse,
    service::{require_employee_id, EMPTY_ID_MESSAGE},
    AppState,
};

type IdPath = Result<Path<String>, PathRejection>;
type RawBody = Result<Bytes, BytesRejection>;

pub async fn create_employee(
    State(state): State<AppState>,
    body: RawBody,
) -> Result<(StatusCode, Json<ApiResponse<String>>), ServiceError> {
    let employee: Employee = parse_body(&body?)?;
    let employee_id = state.employees.create_employee(employee).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(employee_id))))
}

pub async fn get_employee(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<ApiResponse<Employee>>, ServiceError> {
    let Path(employee_id) = path?;
    let employee = state.employees.get_employee(&employee_id).await?;
    Ok(Json(ApiResponse::data(employee)))
}

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ServiceError> {
    let employees = state.employees.list_employees().await?;
    Ok(Json(ApiResponse::data(employees)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    path: IdPath,
    body: RawBody,
) -> Result<Json<ApiResponse<u64>>, ServiceError> {
    let Path(employee_id) = path?;
    // The id check comes before the body is looked at
    require_employee_id(&employee_id)?;
    let employee: Employee = parse_body(&body?)?;

    let modified = state
        .employees
        .update_employee(&employee_id, employee)
        .await?;
    Ok(Json(ApiResponse::data(modified)))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<ApiResponse<u64>>, ServiceError> {
    let Path(employee_id) = path?;
    let deleted = state.employees.delete_employee(&employee_id).await?;
    Ok(Json(ApiResponse::data(deleted)))
}

pub async fn delete_all_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<u64>>, ServiceError> {
    let deleted = state.employees.delete_all_employees().await?;
    Ok(Json(ApiResponse::data(deleted)))
}

/// `/employees/` with nothing after the slash.
pub async fn missing_employee_id() -> ServiceError {
    ServiceError::InvalidInput(EMPTY_ID_MESSAGE.to_string())
}

pub async fn unknown_route() -> ServiceError {
    ServiceError::NotFound("route not found".to_string())
}
