use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::path::RoutePath;
use crate::config::NetworkConfig;
use crate::graph::builder::{Direction, Network, RouteRecord};
use crate::graph::traits::Graph;

/// Parameters for building a network from raw route records
#[derive(Debug, Deserialize)]
pub struct CreateNetworkRequest {
    pub routes: Vec<RouteRecord>,
    /// Explicit vertex numbering; derived from the routes when absent
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Domain constants; the server defaults apply when absent
    #[serde(default)]
    pub config: Option<NetworkConfig>,
}

/// Description of a stored network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub id: Uuid,
    pub checkpoints: Vec<String>,
    pub rightward_edges: usize,
    pub leftward_edges: usize,
    pub config: NetworkConfig,
    pub created_at: DateTime<Utc>,
}

/// Parameters for a single source-to-destination run
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub direction: Direction,
    pub source: String,
    pub destination: String,
    /// Departure clock in `HH:MM`
    pub departure: String,
    #[serde(default)]
    pub reset_predecessors: bool,
}

/// Parameters for a modulated journey
#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    pub direction: Direction,
    /// Departure checkpoint, forced intermediate checkpoints, arrival checkpoint
    pub waypoints: Vec<String>,
    pub departure: String,
    #[serde(default)]
    pub reset_predecessors: bool,
}

/// A route rendered the way riders read it
#[derive(Debug, Clone, Serialize)]
pub struct RenderedRoute {
    pub path: String,
    pub times: String,
    pub checkpoints: Vec<String>,
    pub arrival_times: Vec<String>,
    pub total_cost: u64,
}

impl From<&RoutePath> for RenderedRoute {
    fn from(route: &RoutePath) -> Self {
        RenderedRoute {
            path: route.path_string(),
            times: route.times_string(),
            checkpoints: route.checkpoints.clone(),
            arrival_times: route.times.iter().map(ToString::to_string).collect(),
            total_cost: route.cost,
        }
    }
}

/// Arrival clock of one checkpoint, `xx:xx` when unreached
#[derive(Debug, Clone, Serialize)]
pub struct ArrivalEntry {
    pub checkpoint: String,
    pub arrival: String,
}

/// Response of a single run
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub execution_id: Uuid,
    pub direction: Direction,
    pub route: RenderedRoute,
    pub arrivals: Vec<ArrivalEntry>,
    pub execution_time_ms: f64,
}

/// Response of a modulated journey
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryResponse {
    pub execution_id: Uuid,
    pub direction: Direction,
    pub direct: RenderedRoute,
    pub segments: Vec<RenderedRoute>,
    /// Stitched journey between the original departure and arrival checkpoints
    pub net: RenderedRoute,
    pub extra_cost: u64,
    pub extra_minutes: i64,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// A built network and its metadata
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub network: Network,
    pub config: NetworkConfig,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(network: Network, config: NetworkConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            network,
            config,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            id: self.id,
            checkpoints: self.network.labels().iter().map(str::to_string).collect(),
            rightward_edges: self.network.graph(Direction::Rightward).edge_count(),
            leftward_edges: self.network.graph(Direction::Leftward).edge_count(),
            config: self.config.clone(),
            created_at: self.created_at,
        }
    }
}
