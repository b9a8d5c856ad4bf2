//! Employee handlers - CRUD operations on `/api/employees`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::HttpError;
use crate::state::AppState;
use roster_core::{Employee, EmployeeUpdate, NewEmployee};

/// Text body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

/// Create an employee. Responds 201 with the stored record.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), HttpError> {
    let created = state.employees.create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all employees.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, HttpError> {
    Ok(Json(state.employees.list_all().await?))
}

/// Get a single employee by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, HttpError> {
    Ok(Json(state.employees.find_by_id(id).await?))
}

/// Overwrite name, email and role of an existing employee.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<EmployeeUpdate>,
) -> Result<Json<Employee>, HttpError> {
    Ok(Json(state.employees.update(req, id).await?))
}

/// Delete an employee.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, HttpError> {
    state.employees.delete(id).await?;
    Ok(DELETED_MESSAGE)
}
