// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::store::{NewTask, StoreError, Task, TaskPatch};
use crate::AppContext;

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Task not found" })),
    )
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.list().await)
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    match ctx.store.get(&id).await {
        Ok(task) => Ok(Json(task)),
        Err(StoreError::NotFound) => Err(not_found()),
    }
}

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<Value>)> {
    // Missing and empty both fail the presence check.
    let (title, description) = match (body.title, body.description) {
        (Some(t), Some(d)) if !t.is_empty() && !d.is_empty() => (t, d),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Title and description are required" })),
            ))
        }
    };

    // Best-effort classification; falls back to the default priority when
    // the service is unavailable. Runs before the store is touched.
    let text = format!("{title} {description}");
    let priority = ctx.classifier.classify(&text).await.into_priority();

    let task = ctx
        .store
        .create(NewTask {
            title,
            description,
            priority,
        })
        .await;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    match ctx.store.update(&id, patch).await {
        Ok(task) => Ok(Json(task)),
        Err(StoreError::NotFound) => Err(not_found()),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    match ctx.store.delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound) => Err(not_found()),
    }
}
