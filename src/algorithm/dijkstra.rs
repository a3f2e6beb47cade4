use std::num::NonZeroU64;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::clock::{elapsed_minutes, ClockTime};
use crate::data_structures::StablePriorityQueue;
use crate::graph::track::Parent;
use crate::graph::traits::{Graph, PredecessorMemory};
use crate::{Error, Result};

/// Per-run switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Clear every predecessor before the run instead of inheriting earlier ones
    pub reset_predecessors: bool,
}

impl RunOptions {
    pub fn resetting() -> Self {
        RunOptions {
            reset_predecessors: true,
        }
    }
}

/// Dijkstra's algorithm that also propagates distance and arrival clocks
#[derive(Debug, Clone, Copy)]
pub struct TimedDijkstra {
    /// Distance units covered per minute
    velocity: NonZeroU64,
    options: RunOptions,
}

impl TimedDijkstra {
    /// Creates a new engine for the given travel velocity
    pub fn new(velocity: NonZeroU64) -> Self {
        TimedDijkstra {
            velocity,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable clearing predecessors at the start of each run
    pub fn with_reset_predecessors(mut self, enabled: bool) -> Self {
        self.options.reset_predecessors = enabled;
        self
    }

    pub fn velocity(&self) -> NonZeroU64 {
        self.velocity
    }
}

impl<G> ShortestPathAlgorithm<G> for TimedDijkstra
where
    G: Graph + PredecessorMemory,
{
    fn name(&self) -> &'static str {
        "TimedDijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &mut G,
        source: usize,
        departure: ClockTime,
    ) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();

        // Fresh run state; predecessors are the only thing that survives a run
        let mut visited = vec![false; n];
        let mut costs: Vec<Option<u64>> = vec![None; n];
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut elapsed: Vec<Option<u64>> = vec![None; n];
        let mut arrivals: Vec<Option<ClockTime>> = vec![None; n];
        let mut relaxed_parents: Vec<Option<usize>> = vec![None; n];

        costs[source] = Some(0);
        distances[source] = Some(0);
        elapsed[source] = Some(0);
        arrivals[source] = Some(departure);

        let mut queue = StablePriorityQueue::with_capacity(n);
        queue.push(source, 0u64);

        // Main Dijkstra loop
        while let Some((u, _)) = queue.pop() {
            // Stale duplicate of an already finalized vertex
            if visited[u] {
                continue;
            }
            visited[u] = true;

            let (Some(cost_u), Some(distance_u)) = (costs[u], distances[u]) else {
                continue;
            };

            // Relax all outgoing edges
            for edge in graph.outgoing_edges(u) {
                let v = edge.destination;
                if visited[v] {
                    continue;
                }

                let new_cost = cost_u.saturating_add(edge.weight);
                let should_update = match costs[v] {
                    None => true,
                    Some(current_cost) => new_cost < current_cost,
                };

                if should_update {
                    let new_distance = distance_u.saturating_add(edge.distance);
                    let minutes = elapsed_minutes(new_distance, self.velocity);
                    costs[v] = Some(new_cost);
                    distances[v] = Some(new_distance);
                    relaxed_parents[v] = Some(u);
                    elapsed[v] = Some(minutes);
                    arrivals[v] = Some(departure.add_minutes(minutes));
                    queue.push(v, new_cost);
                }
            }
        }

        if self.options.reset_predecessors {
            graph.reset_predecessors();
        }
        let parents = graph.predecessors_mut();
        parents[source] = Parent::NoParent;
        for (vertex, parent) in relaxed_parents.into_iter().enumerate() {
            if let Some(parent) = parent {
                parents[vertex] = Parent::Vertex(parent);
            }
        }

        Ok(ShortestPathResult {
            source,
            departure,
            costs,
            distances,
            elapsed,
            arrivals,
            predecessors: graph.predecessors().to_vec(),
        })
    }
}
