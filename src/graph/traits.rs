use std::fmt::Debug;

use crate::graph::track::{Edge, Parent};
use crate::Result;

/// Trait representing a directed multigraph whose edges carry weight and distance
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges from a vertex in insertion order
    fn outgoing_edges(&self, vertex: usize) -> &[Edge];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from)
            && self
                .outgoing_edges(from)
                .iter()
                .any(|edge| edge.destination == to)
    }

    /// Gets the cheapest edge between two vertices if one exists
    fn cheapest_edge(&self, from: usize, to: usize) -> Option<&Edge> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .iter()
            .filter(|edge| edge.destination == to)
            .min_by_key(|edge| edge.weight)
    }
}

/// Write-once construction of a graph: edges can be added but never removed
pub trait MutableGraph: Graph {
    /// Appends a directed edge, rejecting out-of-range endpoints and negative values
    fn add_edge(&mut self, source: usize, destination: usize, weight: i64, distance: i64)
        -> Result<()>;
}

/// Predecessor storage that outlives a single traversal
///
/// Entries are only overwritten by a strictly cheaper relaxation, so an entry not
/// touched by the latest run still holds whatever an earlier run left there.
pub trait PredecessorMemory {
    fn predecessors(&self) -> &[Parent];

    fn predecessors_mut(&mut self) -> &mut [Parent];

    /// Forgets every predecessor recorded so far
    fn reset_predecessors(&mut self) {
        self.predecessors_mut().fill(Parent::Unset);
    }
}
