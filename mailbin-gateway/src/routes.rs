//! Axum route handlers for the mailbin API.
//!
//! Route matching follows the path-and-method pairing of the public
//! contract: a known path with the wrong method is a 404, not a 405, and
//! `OPTIONS` anywhere is an empty 204 preflight.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{on, post, MethodFilter},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use mailbin_core::Message;
use mailbin_store::InboxService;

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every handler.
pub struct AppState {
    /// Inbox operations over the configured store.
    pub service: InboxService,
    /// Expected `x-api-key` for push; `None` disables the check.
    pub api_key: Option<String>,
}

type SharedState = Arc<AppState>;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
    pub name: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PushBody {
    pub to: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PushResponse {
    pub ok: bool,
    pub message: Message,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given shared state.
///
/// Every response carries `Access-Control-Allow-Origin: *` so the static
/// frontend can be served from anywhere.
pub fn create_router(state: SharedState) -> Router {
    // `on(MethodFilter::GET, ..)` rather than `get(..)`: `get` would also
    // serve HEAD, and the contract 404s every method not listed for a path.
    Router::new()
        .route("/api/domains", on(MethodFilter::GET, list_domains).fallback(fallback))
        .route("/api/create", post(create_address).fallback(fallback))
        .route("/api/messages", on(MethodFilter::GET, list_messages).fallback(fallback))
        .route("/api/push", post(push_message).fallback(fallback))
        .route("/health", on(MethodFilter::GET, health).fallback(fallback))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /api/domains` — the configured domain set.
pub async fn list_domains(State(state): State<SharedState>) -> impl IntoResponse {
    Json(DomainsResponse {
        domains: state.service.domains().to_vec(),
    })
}

/// `POST /api/create` — mint an address and ensure its inbox exists.
///
/// Never rejects its input: an unreadable body mints the default address,
/// so the raw bytes are decoded leniently instead of through a strict
/// JSON extractor.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the store operation fails.
pub async fn create_address(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let body: CreateBody = serde_json::from_slice(&body).unwrap_or_default();
    let email = state
        .service
        .create_address(body.name.as_deref(), body.domain.as_deref())
        .await?;
    Ok(Json(CreateResponse { email }))
}

/// `GET /api/messages?email=E` — read an inbox.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `email` is absent or empty,
/// or [`GatewayError::Store`] if the store operation fails.
pub async fn list_messages(
    State(state): State<SharedState>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let Some(email) = query.email.filter(|e| !e.is_empty()) else {
        return Err(GatewayError::InvalidRequest("email required".to_owned()));
    };
    let inbox = state.service.list_messages(&email).await?;
    Ok(Json(inbox))
}

/// `POST /api/push` — deliver a message into an inbox.
///
/// The API key is checked before the body is touched.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] on a key mismatch,
/// [`GatewayError::InvalidRequest`] if the body is unparsable or `to` is
/// missing, or [`GatewayError::Store`] if the store operation fails.
pub async fn push_message(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    if let Some(expected) = &state.api_key {
        let presented = headers.get("x-api-key").and_then(|v| v.to_str().ok());
        if presented != Some(expected.as_str()) {
            return Err(GatewayError::Unauthorized);
        }
    }

    let Ok(body) = serde_json::from_slice::<PushBody>(&body) else {
        return Err(GatewayError::InvalidRequest("invalid json".to_owned()));
    };
    let Some(to) = body.to.filter(|t| !t.is_empty()) else {
        return Err(GatewayError::InvalidRequest("missing 'to' field".to_owned()));
    };

    let message = state
        .service
        .push_message(&to, body.from, body.subject, body.body)
        .await?;
    Ok(Json(PushResponse { ok: true, message }))
}

// ── Fallbacks ─────────────────────────────────────────────────────────────────

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "content-type, x-api-key",
            ),
        ],
    )
        .into_response()
}

/// Catch-all for unmatched paths and wrong-method requests on known paths.
async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        preflight()
    } else {
        not_found()
    }
}
