//! Rail Itinerary - time-aware shortest paths over checkpoint networks
//!
//! This library computes minimum-cost routes through a directed network of switch and
//! track checkpoints. Every edge carries a routing weight (minimised by a Dijkstra
//! traversal) and a physical distance (used to derive travel time). Given a departure
//! clock and a constant velocity, each run produces the wall-clock arrival time at every
//! reachable checkpoint.
//!
//! Routes can be modulated: a rider forces the path through an ordered list of
//! intermediate checkpoints, each hop is solved independently and the hops are
//! stitched into one continuous itinerary.

pub mod algorithm;
pub mod clock;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::{RunOptions, TimedDijkstra},
    itinerary::{Itinerary, ModulatedRoute},
    path::RoutePath,
    planner::{Planner, RouteOutcome},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use clock::ClockTime;
pub use config::NetworkConfig;
pub use graph::{CheckpointLabels, Direction, Network, NetworkBuilder, TrackGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("Negative edge distance: {0}")]
    NegativeDistance(i64),

    #[error("Velocity must be positive, got {0}")]
    InvalidVelocity(i64),

    #[error("Invalid clock time {input:?}: {reason}")]
    InvalidTime { input: String, reason: &'static str },

    #[error("Checkpoint {target} is not reachable from the current source")]
    Unreachable { target: usize },

    #[error("Predecessor chain for checkpoint {0} does not lead back to the source")]
    BrokenPredecessorChain(usize),

    #[error("Unknown checkpoint: {0}")]
    UnknownCheckpoint(String),

    #[error("Duplicate checkpoint label: {0}")]
    DuplicateCheckpoint(String),

    #[error("Invalid waypoints: {0}")]
    InvalidWaypoints(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for errors caused by caller input rather than by the shape of the network
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            Error::Unreachable { .. } | Error::BrokenPredecessorChain(_)
        )
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
