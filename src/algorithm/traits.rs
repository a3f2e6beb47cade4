use crate::algorithm::path::{self, RoutePath};
use crate::clock::{render_arrival, ClockTime};
use crate::graph::labels::CheckpointLabels;
use crate::graph::track::Parent;
use crate::graph::traits::{Graph, PredecessorMemory};
use crate::Result;

/// Result of one single-source run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Source vertex ID
    pub source: usize,

    /// Clock time at which the source is left
    pub departure: ClockTime,

    /// Accumulated weight from the source, `None` for unreached vertices
    pub costs: Vec<Option<u64>>,

    /// Accumulated distance along the cheapest path
    pub distances: Vec<Option<u64>>,

    /// Whole minutes travelled to reach each vertex, days included
    pub elapsed: Vec<Option<u64>>,

    /// Arrival clock at each vertex
    pub arrivals: Vec<Option<ClockTime>>,

    /// Snapshot of the graph's predecessors after the run, carried-over entries included
    pub predecessors: Vec<Parent>,
}

impl ShortestPathResult {
    pub fn vertex_count(&self) -> usize {
        self.costs.len()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        matches!(self.costs.get(vertex), Some(Some(_)))
    }

    pub fn cost(&self, vertex: usize) -> Option<u64> {
        self.costs.get(vertex).copied().flatten()
    }

    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn elapsed_minutes(&self, vertex: usize) -> Option<u64> {
        self.elapsed.get(vertex).copied().flatten()
    }

    pub fn arrival(&self, vertex: usize) -> Option<ClockTime> {
        self.arrivals.get(vertex).copied().flatten()
    }

    /// `"HH:MM"` arrival, or `"xx:xx"` when the vertex was not reached
    pub fn arrival_label(&self, vertex: usize) -> String {
        render_arrival(self.arrival(vertex))
    }

    /// Every checkpoint paired with its rendered arrival, in vertex order
    pub fn arrival_board(&self, labels: &CheckpointLabels) -> Vec<(String, String)> {
        labels
            .iter()
            .enumerate()
            .map(|(vertex, label)| (label.to_string(), self.arrival_label(vertex)))
            .collect()
    }
}

/// Trait for time-aware shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph + PredecessorMemory,
{
    /// Compute cheapest paths and arrival clocks from a source to every vertex
    ///
    /// The graph is borrowed mutably because predecessors live on it between runs.
    fn compute_shortest_paths(
        &self,
        graph: &mut G,
        source: usize,
        departure: ClockTime,
    ) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the path from the run's source to `target` with its arrival clocks
    fn get_path(
        &self,
        result: &ShortestPathResult,
        target: usize,
        labels: &CheckpointLabels,
    ) -> Result<RoutePath> {
        path::reconstruct(result, target, labels)
    }
}
