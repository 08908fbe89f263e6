pub mod db;
pub mod error;
pub mod models;
pub mod repository;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use db::driver::Db;
use error::AppError;
use models::{ListParams, Message, Todo, TodoPayload};
use repository::TodoRepository;
use tracing::info;

// === App State ===
#[derive(Debug, Clone)]
pub struct AppState {
    repo: TodoRepository,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self {
            repo: TodoRepository::new(db),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/addTask/", post(add_task))
        .route("/getAllTasks/", get(get_all_tasks))
        .route("/getTaskById/:id", get(get_task_by_id))
        .route("/getTaskByName/:name", get(get_task_by_name))
        .route("/deleteAllTasks/", delete(delete_all_tasks))
        .route("/deleteTaskById/:id", delete(delete_task_by_id))
        .route("/deleteTaskByName/:name", delete(delete_task_by_name))
        .route("/updateTaskById/:id", put(update_task_by_id))
        .with_state(state)
}

// === Routes ===
async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<TodoPayload>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.repo.insert(&payload).await?;
    info!("created task {}", todo.id);
    Ok(Json(todo))
}

async fn get_all_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.repo.list(params.skip, params.limit).await?;
    Ok(Json(todos))
}

async fn get_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

async fn get_task_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.repo.find_by_name(&name).await?;
    if todos.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(todos))
}

async fn delete_all_tasks(State(state): State<AppState>) -> Result<Json<Message>, AppError> {
    let removed = state.repo.delete_all().await?;
    info!("deleted all tasks ({removed} rows)");
    Ok(Json(Message::new("All tasks deleted successfully")))
}

async fn delete_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let removed = state.repo.delete_by_id(id).await?;
    if removed == 0 {
        return Err(AppError::NotFound);
    }
    info!("deleted task {id}");
    Ok(Json(Message::new("Task deleted successfully")))
}

async fn delete_task_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Message>, AppError> {
    let removed = state.repo.delete_by_name(&name).await?;
    if removed == 0 {
        return Err(AppError::NotFound);
    }
    info!("deleted {removed} tasks matching {name:?}");
    Ok(Json(Message::new("Tasks deleted successfully")))
}

async fn update_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}
