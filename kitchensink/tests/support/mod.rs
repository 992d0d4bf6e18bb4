//! In-process stand-in for the members service, shaped like the real one:
//! same routes under `/api`, `{ "message": ... }` error bodies.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use kitchensink::MemberClient;
use serde_json::json;
use shared::config::Config;
use shared_http::api::Member;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
pub struct StubState {
    members: Arc<Mutex<Vec<Member>>>,
}

impl StubState {
    pub async fn stored(&self) -> Vec<Member> {
        self.members.lock().await.clone()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Serves `router` on an ephemeral port and returns its origin.
pub async fn serve(router: Router) -> String {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// Starts the stub members service and a client pointed at it.
pub async fn spawn_members_service() -> (MemberClient, StubState) {
    let state = StubState::default();
    let origin = serve(members_router(state.clone())).await;
    let client = MemberClient::new(Config::new(origin)).unwrap();
    (client, state)
}

pub fn members_router(state: StubState) -> Router {
    Router::new()
        .route("/api/members", get(list_members).post(create_member))
        .route(
            "/api/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/api/members/email/{email}", get(get_member_by_email))
        .with_state(state)
}

fn not_found(what: &str, key: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("Member not found with {what}: {key}") })),
    )
        .into_response()
}

fn email_taken(email: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": format!("Email already exists: {email}") })),
    )
        .into_response()
}

async fn list_members(State(state): State<StubState>) -> Json<Vec<Member>> {
    Json(state.members.lock().await.clone())
}

async fn get_member(State(state): State<StubState>, Path(id): Path<String>) -> Response {
    let members = state.members.lock().await;
    match members.iter().find(|m| m.id() == Some(id.as_str())) {
        Some(member) => Json(member.clone()).into_response(),
        None => not_found("id", &id),
    }
}

async fn get_member_by_email(
    State(state): State<StubState>,
    Path(email): Path<String>,
) -> Response {
    let members = state.members.lock().await;
    match members.iter().find(|m| m.email == email) {
        Some(member) => Json(member.clone()).into_response(),
        None => not_found("email", &email),
    }
}

async fn create_member(State(state): State<StubState>, Json(member): Json<Member>) -> Response {
    let mut members = state.members.lock().await;
    if member.id.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "id must not be set on create" })),
        )
            .into_response();
    }
    if members.iter().any(|m| m.email == member.email) {
        return email_taken(&member.email);
    }
    let created = Member {
        id: Some(uuid::Uuid::new_v4().to_string()),
        active: Some(member.active.unwrap_or(true)),
        ..member
    };
    members.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_member(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(member): Json<Member>,
) -> Response {
    let mut members = state.members.lock().await;
    if members
        .iter()
        .any(|m| m.email == member.email && m.id() != Some(id.as_str()))
    {
        return email_taken(&member.email);
    }
    match members.iter_mut().find(|m| m.id() == Some(id.as_str())) {
        Some(existing) => {
            existing.name = member.name;
            existing.email = member.email;
            existing.phone_number = member.phone_number;
            if member.active.is_some() {
                existing.active = member.active;
            }
            Json(existing.clone()).into_response()
        }
        None => not_found("id", &id),
    }
}

async fn delete_member(State(state): State<StubState>, Path(id): Path<String>) -> Response {
    let mut members = state.members.lock().await;
    let before = members.len();
    members.retain(|m| m.id() != Some(id.as_str()));
    if members.len() == before {
        not_found("id", &id)
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
