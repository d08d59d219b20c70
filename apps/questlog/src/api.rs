//! # HTTP API
//!
//! axum routes over a single in-memory session.
//!
//! The server process is the session: state lives exactly as long as
//! the process and is rebuilt from seed data on the next start. The
//! session sits behind a mutex so the handler pool serializes
//! mutations; every operation is a synchronous read-modify-write and
//! needs no further ordering discipline.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use questlog_core::{
    AwardOutcome, Character, CoreError, FocusKind, Quest, QuestId, Session, Task, TaskDraft,
    TaskId, TaskPatch, TaskToggle,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handle to the single session.
pub type SharedSession = Arc<Mutex<Session>>;

// =============================================================================
// ROUTER
// =============================================================================

/// Build the API router.
pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/character", get(get_character))
        .route("/xp", post(post_xp))
        .route("/title", post(post_title))
        .route("/attributes", post(post_attributes))
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", delete(delete_task).patch(patch_task))
        .route("/tasks/{id}/toggle", post(toggle_task))
        .route("/quests", get(list_quests))
        .route("/quests/{id}/complete", post(complete_quest))
        .route("/focus/{kind}/complete", post(complete_focus))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(session)
}

/// Serve the session until shutdown.
pub async fn serve(addr: SocketAddr, session: Session) -> std::io::Result<()> {
    let shared: SharedSession = Arc::new(Mutex::new(session));
    let app = router(shared);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "questlog session listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received, session state will be discarded");
}

// =============================================================================
// REQUEST / RESPONSE BODIES
// =============================================================================

#[derive(Debug, Deserialize)]
struct XpRequest {
    amount: u64,
}

#[derive(Debug, Deserialize)]
struct TitleRequest {
    title: String,
}

#[derive(Debug, Serialize)]
struct TitleResponse {
    applied: bool,
    /// Active title after the request.
    title: String,
}

#[derive(Debug, Deserialize)]
struct AttributeRequest {
    name: String,
    delta: i64,
}

#[derive(Debug, Serialize)]
struct AttributeResponse {
    applied: bool,
}

#[derive(Debug, Serialize)]
struct QuestCompletionResponse {
    /// False when the quest had already been completed; the bounty
    /// never pays twice.
    newly_completed: bool,
    outcome: Option<AwardOutcome>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn into_error(error: CoreError) -> ApiError {
    let status = match error {
        CoreError::ZeroXpAward => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::UnknownTask(_) | CoreError::UnknownQuest(_) => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}

fn not_found(message: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn health() -> &'static str {
    "ok"
}

async fn get_character(State(session): State<SharedSession>) -> Json<Character> {
    Json(session.lock().await.snapshot())
}

async fn post_xp(
    State(session): State<SharedSession>,
    Json(request): Json<XpRequest>,
) -> Result<Json<AwardOutcome>, ApiError> {
    session
        .lock()
        .await
        .award_xp(request.amount)
        .map(Json)
        .map_err(into_error)
}

async fn post_title(
    State(session): State<SharedSession>,
    Json(request): Json<TitleRequest>,
) -> Json<TitleResponse> {
    let mut session = session.lock().await;
    let applied = session.set_title(&request.title);
    Json(TitleResponse {
        applied,
        title: session.character().title.clone(),
    })
}

async fn post_attributes(
    State(session): State<SharedSession>,
    Json(request): Json<AttributeRequest>,
) -> Json<AttributeResponse> {
    let applied = session
        .lock()
        .await
        .adjust_attribute_by_name(&request.name, request.delta);
    Json(AttributeResponse { applied })
}

async fn list_tasks(State(session): State<SharedSession>) -> Json<Vec<Task>> {
    Json(session.lock().await.tasks().tasks().cloned().collect())
}

async fn create_task(
    State(session): State<SharedSession>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let mut session = session.lock().await;
    let id = session.add_task(draft);
    session
        .tasks()
        .get(id)
        .cloned()
        .map(|task| (StatusCode::CREATED, Json(task)))
        .ok_or_else(|| not_found("task vanished after creation"))
}

async fn patch_task(
    State(session): State<SharedSession>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    let mut session = session.lock().await;
    let id = TaskId(id);
    session.update_task(id, patch).map_err(into_error)?;
    session
        .tasks()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("task vanished after update"))
}

async fn delete_task(
    State(session): State<SharedSession>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    session
        .lock()
        .await
        .remove_task(TaskId(id))
        .map(Json)
        .map_err(into_error)
}

async fn toggle_task(
    State(session): State<SharedSession>,
    Path(id): Path<u64>,
) -> Result<Json<TaskToggle>, ApiError> {
    session
        .lock()
        .await
        .toggle_task(TaskId(id))
        .map(Json)
        .map_err(into_error)
}

async fn list_quests(State(session): State<SharedSession>) -> Json<Vec<Quest>> {
    Json(session.lock().await.quests().quests().cloned().collect())
}

async fn complete_quest(
    State(session): State<SharedSession>,
    Path(id): Path<u64>,
) -> Result<Json<QuestCompletionResponse>, ApiError> {
    let outcome = session
        .lock()
        .await
        .complete_quest(QuestId(id))
        .map_err(into_error)?;

    Ok(Json(QuestCompletionResponse {
        newly_completed: outcome.is_some(),
        outcome,
    }))
}

async fn complete_focus(
    State(session): State<SharedSession>,
    Path(kind): Path<String>,
) -> Result<Json<AwardOutcome>, ApiError> {
    let Some(kind) = FocusKind::parse(&kind) else {
        return Err(not_found("unknown focus kind"));
    };

    session
        .lock()
        .await
        .complete_focus(kind)
        .map(Json)
        .map_err(into_error)
}
