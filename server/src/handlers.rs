//! HTTP handlers for `/todos`. Each one is a single service call; status
//! translation lives in `ServiceError`'s `IntoResponse`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::{ToDoResponse, ToDoSaveRequest};
use crate::error::ServiceError;
use crate::service::ToDoService;

pub async fn list_todos(
    State(service): State<ToDoService>,
) -> Result<Json<Vec<ToDoResponse>>, ServiceError> {
    service.get_all().await.map(Json)
}

pub async fn save_todo(
    State(service): State<ToDoService>,
    Json(request): Json<ToDoSaveRequest>,
) -> Result<Json<ToDoResponse>, ServiceError> {
    service.upsert(request.into()).await.map(Json)
}

pub async fn get_todo(
    State(service): State<ToDoService>,
    Path(id): Path<i64>,
) -> Result<Json<ToDoResponse>, ServiceError> {
    service.get_one(id).await.map(Json)
}

pub async fn complete_todo(
    State(service): State<ToDoService>,
    Path(id): Path<i64>,
) -> Result<Json<ToDoResponse>, ServiceError> {
    service.complete_todo(id).await.map(Json)
}

pub async fn delete_todo(
    State(service): State<ToDoService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    service.delete_one(id).await?;
    Ok(StatusCode::OK)
}
