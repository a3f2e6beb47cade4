use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::RunOptions;
use crate::config::NetworkConfig;
use crate::graph::builder::NetworkBuilder;
use crate::graph::labels::CheckpointLabels;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    /// Domain constants used when a request does not bring its own
    pub default_network: NetworkConfig,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(default_network: NetworkConfig, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            default_network,
            max_sessions,
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_unavailable",
                "Session store is unavailable".to_string(),
            )
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NetworkConfig::default(), 1000)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/networks", post(create_network).get(list_networks))
        .route("/api/networks/:network_id", get(get_network))
        .route("/api/networks/:network_id/route", post(run_route))
        .route("/api/networks/:network_id/itinerary", post(run_itinerary))
        .route("/api/health", get(health_check))
}

/// Build a network from route records and store it
pub async fn create_network(
    State(state): State<AppState>,
    Json(request): Json<CreateNetworkRequest>,
) -> ApiResult<NetworkSummary> {
    let config = request
        .config
        .unwrap_or_else(|| state.default_network.clone());

    let mut builder = NetworkBuilder::new(config.clone())
        .map_err(|err| domain_error(&err))?
        .add_routes(request.routes);
    if let Some(labels) = request.labels {
        let labels = CheckpointLabels::new(labels).map_err(|err| domain_error(&err))?;
        builder = builder.with_labels(labels);
    }
    let network = builder.build().map_err(|err| domain_error(&err))?;

    let session = Session::new(network, config);
    let summary = session.summary();

    let mut sessions = state.lock_sessions()?;
    if sessions.len() >= state.max_sessions {
        warn!("Rejecting network: session limit {} reached", state.max_sessions);
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "session_limit_reached",
            format!("At most {} networks can be stored", state.max_sessions),
        ));
    }
    sessions.insert(session.id, session);

    info!(
        "Created network {} with {} checkpoints",
        summary.id,
        summary.checkpoints.len()
    );
    Ok(Json(summary))
}

/// List stored networks
pub async fn list_networks(State(state): State<AppState>) -> ApiResult<Vec<NetworkSummary>> {
    let sessions = state.lock_sessions()?;
    let mut summaries: Vec<NetworkSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get a stored network
pub async fn get_network(
    State(state): State<AppState>,
    Path(network_id): Path<Uuid>,
) -> ApiResult<NetworkSummary> {
    let sessions = state.lock_sessions()?;
    match sessions.get(&network_id) {
        Some(session) => Ok(Json(session.summary())),
        None => Err(network_not_found()),
    }
}

/// Run a single source-to-destination request
pub async fn run_route(
    State(state): State<AppState>,
    Path(network_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> ApiResult<RouteResponse> {
    // The lock is held for the whole run so no two runs interleave on one graph
    let mut sessions = state.lock_sessions()?;
    let session = sessions.get_mut(&network_id).ok_or_else(network_not_found)?;

    let options = RunOptions {
        reset_predecessors: request.reset_predecessors,
    };
    let start_time = Instant::now();
    let outcome = session
        .network
        .route(
            request.direction,
            &request.source,
            &request.destination,
            &request.departure,
            options,
        )
        .map_err(|err| domain_error(&err))?;
    let execution_time = start_time.elapsed();

    let arrivals = outcome
        .result
        .arrival_board(session.network.labels())
        .into_iter()
        .map(|(checkpoint, arrival)| ArrivalEntry {
            checkpoint,
            arrival,
        })
        .collect();

    info!(
        "Routed {} -> {} ({}) on network {}",
        request.source, request.destination, request.direction, network_id
    );
    Ok(Json(RouteResponse {
        execution_id: Uuid::new_v4(),
        direction: request.direction,
        route: RenderedRoute::from(&outcome.path),
        arrivals,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Run a journey forced through intermediate checkpoints
pub async fn run_itinerary(
    State(state): State<AppState>,
    Path(network_id): Path<Uuid>,
    Json(request): Json<ItineraryRequest>,
) -> ApiResult<ItineraryResponse> {
    let (source, via, destination) = match request.waypoints.as_slice() {
        [source, via @ .., destination] => (source, via, destination),
        _ => {
            return Err(domain_error(&Error::InvalidWaypoints(
                "need a departure and an arrival checkpoint".to_string(),
            )))
        }
    };

    let mut sessions = state.lock_sessions()?;
    let session = sessions.get_mut(&network_id).ok_or_else(network_not_found)?;

    let options = RunOptions {
        reset_predecessors: request.reset_predecessors,
    };
    let start_time = Instant::now();
    let modulated = session
        .network
        .modulate(
            request.direction,
            source,
            via,
            destination,
            &request.departure,
            options,
        )
        .map_err(|err| domain_error(&err))?;
    let execution_time = start_time.elapsed();

    Ok(Json(ItineraryResponse {
        execution_id: Uuid::new_v4(),
        direction: request.direction,
        direct: RenderedRoute::from(&modulated.direct),
        segments: modulated
            .modulated
            .segments
            .iter()
            .map(RenderedRoute::from)
            .collect(),
        net: RenderedRoute::from(modulated.net()),
        extra_cost: modulated.extra_cost(),
        extra_minutes: modulated.extra_minutes(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn network_not_found() -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "network_not_found",
        "Network not found".to_string(),
    )
}

/// Maps a library error to its HTTP status and error code
fn domain_error(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::UnknownCheckpoint(_) => (StatusCode::NOT_FOUND, "unknown_checkpoint"),
        Error::Unreachable { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "unreachable"),
        Error::InvalidTime { .. } => (StatusCode::BAD_REQUEST, "invalid_time"),
        Error::InvalidWaypoints(_) => (StatusCode::BAD_REQUEST, "invalid_waypoints"),
        _ if err.is_invalid_argument() => (StatusCode::BAD_REQUEST, "invalid_argument"),
        _ => (StatusCode::UNPROCESSABLE_ENTITY, "broken_predecessor_chain"),
    };
    api_error(status, code, err.to_string())
}
