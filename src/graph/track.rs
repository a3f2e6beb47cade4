use crate::graph::traits::{Graph, MutableGraph, PredecessorMemory};
use crate::{Error, Result};

/// A directed transition between two checkpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    /// Routing cost minimised by the traversal
    pub weight: u64,
    /// Physical length, only used to derive travel time
    pub distance: u64,
}

/// Predecessor slot of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// Never assigned by any run
    #[default]
    Unset,
    /// Source of a run; the walk back stops here
    NoParent,
    /// Reached through this vertex
    Vertex(usize),
}

/// A checkpoint network for one direction of travel, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct TrackGraph {
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<Edge>>,

    /// Predecessors kept across runs
    parents: Vec<Parent>,
}

impl TrackGraph {
    /// Creates `vertex_count` isolated vertices
    pub fn new(vertex_count: usize) -> Self {
        TrackGraph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            parents: vec![Parent::Unset; vertex_count],
        }
    }

    /// Iterates over every edge of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

impl Graph for TrackGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge] {
        match self.adjacency.get(vertex) {
            Some(edges) => edges,
            None => &[],
        }
    }
}

impl MutableGraph for TrackGraph {
    fn add_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: i64,
        distance: i64,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        let weight = u64::try_from(weight).map_err(|_| Error::NegativeWeight(weight))?;
        let distance = u64::try_from(distance).map_err(|_| Error::NegativeDistance(distance))?;

        // Parallel edges are kept; the traversal does not deduplicate
        self.adjacency[source].push(Edge {
            source,
            destination,
            weight,
            distance,
        });
        Ok(())
    }
}

impl PredecessorMemory for TrackGraph {
    fn predecessors(&self) -> &[Parent] {
        &self.parents
    }

    fn predecessors_mut(&mut self) -> &mut [Parent] {
        &mut self.parents
    }
}
