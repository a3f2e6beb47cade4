use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::RunOptions;
use crate::algorithm::itinerary::{Itinerary, ModulatedRoute};
use crate::algorithm::planner::{Planner, RouteOutcome};
use crate::config::NetworkConfig;
use crate::graph::labels::CheckpointLabels;
use crate::graph::track::TrackGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// Edge classes, told apart by the label prefix of the checkpoint being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeClass {
    Switch,
    Track,
}

impl EdgeClass {
    /// Classifies a checkpoint label, `None` when it matches neither prefix
    pub fn of_label(label: &str, config: &NetworkConfig) -> Option<Self> {
        if label.starts_with(&config.switch_prefix) {
            Some(EdgeClass::Switch)
        } else if label.starts_with(&config.track_prefix) {
            Some(EdgeClass::Track)
        } else {
            None
        }
    }

    /// (weight, distance) pair configured for this class
    pub fn weight_and_distance(self, config: &NetworkConfig) -> (i64, i64) {
        match self {
            EdgeClass::Switch => (config.switch_weight, config.switch_distance),
            EdgeClass::Track => (config.track_weight, config.track_distance),
        }
    }
}

/// Direction of travel; each has its own graph over the same vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Routes as recorded, classified by their destination
    #[serde(alias = "right")]
    Rightward,
    /// Routes reversed, classified by their original source
    #[serde(alias = "left")]
    Leftward,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "rightward" => Ok(Direction::Rightward),
            "left" | "leftward" => Ok(Direction::Leftward),
            other => Err(Error::InvalidConfig(format!(
                "unknown direction {:?}, expected right or left",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rightward => f.write_str("right"),
            Direction::Leftward => f.write_str("left"),
        }
    }
}

/// A raw `(source, destination)` route record between two named checkpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub source: String,
    pub destination: String,
}

impl RouteRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Turns raw route records into the two directional graphs
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    config: NetworkConfig,
    labels: Option<CheckpointLabels>,
    routes: Vec<RouteRecord>,
}

impl NetworkBuilder {
    pub fn new(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        Ok(NetworkBuilder {
            config,
            labels: None,
            routes: Vec::new(),
        })
    }

    /// Fixes the vertex numbering instead of deriving it from the routes
    pub fn with_labels(mut self, labels: CheckpointLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn add_route(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.routes.push(RouteRecord::new(source, destination));
        self
    }

    pub fn add_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = RouteRecord>,
    {
        self.routes.extend(routes);
        self
    }

    /// Builds both directional graphs; nothing is returned if any record is invalid
    pub fn build(self) -> Result<Network> {
        let velocity = self.config.velocity()?;

        let labels = match self.labels {
            Some(labels) => labels,
            None => {
                // Distinct union of every endpoint, in first appearance order
                let mut labels = CheckpointLabels::default();
                for route in &self.routes {
                    labels.intern(&route.source);
                    labels.intern(&route.destination);
                }
                labels
            }
        };

        let mut rightward = TrackGraph::new(labels.len());
        let mut leftward = TrackGraph::new(labels.len());

        for route in &self.routes {
            let source = labels.index_of(&route.source)?;
            let destination = labels.index_of(&route.destination)?;

            match EdgeClass::of_label(&route.destination, &self.config) {
                Some(class) => {
                    let (weight, distance) = class.weight_and_distance(&self.config);
                    rightward.add_edge(source, destination, weight, distance)?;
                }
                None => debug!(
                    "Skipping rightward route {} -> {}: unclassified destination",
                    route.source, route.destination
                ),
            }

            match EdgeClass::of_label(&route.source, &self.config) {
                Some(class) => {
                    let (weight, distance) = class.weight_and_distance(&self.config);
                    leftward.add_edge(destination, source, weight, distance)?;
                }
                None => debug!(
                    "Skipping leftward route {} -> {}: unclassified source",
                    route.destination, route.source
                ),
            }
        }

        if rightward.edge_count() + leftward.edge_count() == 0 && !self.routes.is_empty() {
            warn!(
                "None of the {} routes matched the switch prefix {:?} or track prefix {:?}",
                self.routes.len(),
                self.config.switch_prefix,
                self.config.track_prefix
            );
        }

        Ok(Network {
            labels,
            velocity,
            rightward,
            leftward,
        })
    }
}

/// Labels plus the rightward and leftward graphs built from one set of routes
#[derive(Debug, Clone)]
pub struct Network {
    labels: CheckpointLabels,
    velocity: NonZeroU64,
    rightward: TrackGraph,
    leftward: TrackGraph,
}

impl Network {
    pub fn labels(&self) -> &CheckpointLabels {
        &self.labels
    }

    pub fn velocity(&self) -> NonZeroU64 {
        self.velocity
    }

    pub fn graph(&self, direction: Direction) -> &TrackGraph {
        match direction {
            Direction::Rightward => &self.rightward,
            Direction::Leftward => &self.leftward,
        }
    }

    /// Splits the borrow so a planner can read labels while runs mutate the graph
    fn planner_and_graph(&mut self, direction: Direction) -> (Planner<'_>, &mut TrackGraph) {
        let graph = match direction {
            Direction::Rightward => &mut self.rightward,
            Direction::Leftward => &mut self.leftward,
        };
        (Planner::new(&self.labels, self.velocity), graph)
    }

    /// Cheapest route between two named checkpoints
    pub fn route(
        &mut self,
        direction: Direction,
        source: &str,
        destination: &str,
        departure: &str,
        options: RunOptions,
    ) -> Result<RouteOutcome> {
        let (planner, graph) = self.planner_and_graph(direction);
        planner.route_by_label(graph, source, destination, departure, options)
    }

    /// Route forced through every named waypoint in order
    pub fn run_itinerary<S: AsRef<str>>(
        &mut self,
        direction: Direction,
        waypoints: &[S],
        departure: &str,
        options: RunOptions,
    ) -> Result<Itinerary> {
        let (planner, graph) = self.planner_and_graph(direction);
        planner.run_itinerary_by_label(graph, waypoints, departure, options)
    }

    /// Direct route plus the route forced through `via`
    pub fn modulate<S: AsRef<str>>(
        &mut self,
        direction: Direction,
        source: &str,
        via: &[S],
        destination: &str,
        departure: &str,
        options: RunOptions,
    ) -> Result<ModulatedRoute> {
        let (planner, graph) = self.planner_and_graph(direction);
        planner.modulate_by_label(graph, source, via, destination, departure, options)
    }
}
