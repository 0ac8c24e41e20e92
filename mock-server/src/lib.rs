use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const CREATED: u8 = 1;
pub const UPDATED: u8 = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub user: String,
    pub name: String,
    pub title: String,
    pub body: String,
    pub same_as: Vec<String>,
    pub different_from: Vec<String>,
    pub context: String,
    pub language: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_source_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManageContent {
    pub name: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub same_as: Option<Vec<String>>,
    pub different_from: Option<Vec<String>>,
    pub context: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub import_source_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManageResult {
    pub id: String,
    pub status: u8,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

pub type Db = Arc<RwLock<HashMap<String, Content>>>;

#[derive(Clone)]
pub struct AppState {
    db: Db,
    api_key: Arc<str>,
    user: Uuid,
}

/// Router for the content API. Every route requires `Authorization: Bearer {api_key}`.
pub fn app(api_key: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(HashMap::new())),
        api_key: Arc::from(api_key),
        user: Uuid::new_v4(),
    };
    Router::new()
        .route("/ping", post(ping))
        .route("/content", get(list_content))
        .route("/content/library", get(content_library))
        .route("/content/{id}", get(get_content).patch(manage_content))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

async fn require_bearer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    if token != Some(&*state.api_key) {
        tracing::warn!(uri = %request.uri(), "rejected request without valid bearer token");
        return (StatusCode::UNAUTHORIZED, "missing or invalid bearer token").into_response();
    }
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::info!(%method, %uri, status = response.status().as_u16(), "handled request");
    response
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "message": "pong"}))
}

async fn sorted_library(db: &Db) -> Vec<Content> {
    let mut library: Vec<Content> = db.read().await.values().cloned().collect();
    library.sort_by(|a, b| a.id.cmp(&b.id));
    library
}

/// Pages are 1-based and only applied when both filters are positive.
fn paginate(library: Vec<Content>, params: &ListParams) -> Vec<Content> {
    match (params.page, params.page_size) {
        (Some(page), Some(size)) if page > 0 && size > 0 => {
            let skip = (page - 1)
                .checked_mul(size)
                .and_then(|skip| usize::try_from(skip).ok())
                .unwrap_or(usize::MAX);
            let take = usize::try_from(size).unwrap_or(usize::MAX);
            library.into_iter().skip(skip).take(take).collect()
        }
        _ => library,
    }
}

async fn list_content(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<serde_json::Value> {
    let library = paginate(sorted_library(&state.db).await, &params);
    Json(json!({ "library": library }))
}

async fn content_library(State(state): State<AppState>) -> Json<serde_json::Value> {
    let library = sorted_library(&state.db).await;
    Json(json!({
        "status": "ok",
        "message": "",
        "data": { "library": library },
    }))
}

async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Content>, (StatusCode, String)> {
    let db = state.db.read().await;
    db.get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("content {id} not found")))
}

async fn manage_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ManageContent>,
) -> Json<ManageResult> {
    let now = Utc::now();
    let mut db = state.db.write().await;
    let status = match db.get_mut(&id) {
        Some(content) => {
            apply(content, input, now);
            tracing::info!(%id, "content updated");
            UPDATED
        }
        None => {
            let mut content = Content {
                id: id.clone(),
                user: state.user.to_string(),
                name: String::new(),
                title: String::new(),
                body: String::new(),
                same_as: Vec::new(),
                different_from: Vec::new(),
                context: String::new(),
                language: String::new(),
                content_type: "Article".to_string(),
                import_source_url: None,
                created_at: now,
                updated_at: now,
            };
            apply(&mut content, input, now);
            db.insert(id.clone(), content);
            tracing::info!(%id, "content created");
            CREATED
        }
    };
    Json(ManageResult { id, status })
}

fn apply(content: &mut Content, input: ManageContent, now: DateTime<Utc>) {
    if let Some(name) = input.name {
        content.name = name;
    }
    if let Some(title) = input.title {
        content.title = title;
    }
    if let Some(body) = input.body {
        content.body = body;
    }
    if let Some(same_as) = input.same_as {
        content.same_as = same_as;
    }
    if let Some(different_from) = input.different_from {
        content.different_from = different_from;
    }
    if let Some(context) = input.context {
        content.context = context;
    }
    if let Some(language) = input.language {
        content.language = language;
    }
    if let Some(content_type) = input.content_type {
        content.content_type = content_type;
    }
    if input.import_source_url.is_some() {
        content.import_source_url = input.import_source_url;
    }
    content.updated_at = now;
}
