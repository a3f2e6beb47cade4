use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::clock::ClockTime;
use crate::graph::labels::CheckpointLabels;
use crate::graph::track::Parent;
use crate::{Error, Result};

/// Separator between consecutive checkpoints and times in rendered routes
pub const SEPARATOR: &str = " -> ";

/// An ordered checkpoint sequence with the arrival clock at each checkpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    pub vertices: Vec<usize>,
    pub checkpoints: Vec<String>,
    #[serde(serialize_with = "serialize_times")]
    pub times: Vec<ClockTime>,
    /// Total weight of the route
    pub cost: u64,
    /// Minutes on the move, not wrapped at midnight
    pub elapsed_minutes: u64,
}

fn serialize_times<S>(times: &[ClockTime], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(times.iter().map(ClockTime::to_string))
}

impl RoutePath {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first_vertex(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    pub fn last_vertex(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    pub fn departure(&self) -> Option<ClockTime> {
        self.times.first().copied()
    }

    pub fn arrival(&self) -> Option<ClockTime> {
        self.times.last().copied()
    }

    /// Checkpoint names joined with `" -> "`
    pub fn path_string(&self) -> String {
        self.checkpoints.join(SEPARATOR)
    }

    /// Arrival clocks joined with `" -> "`
    pub fn times_string(&self) -> String {
        self.times
            .iter()
            .map(ClockTime::to_string)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Minutes between leaving the first checkpoint and reaching the last one
    ///
    /// Unlike the arrival clock this keeps whole days, so journeys past 24 hours compare correctly.
    pub fn travel_minutes(&self) -> u64 {
        self.elapsed_minutes
    }

    /// Appends a route that starts where this one ends, keeping the shared checkpoint once
    pub fn extend_with(&mut self, next: &RoutePath) -> Result<()> {
        if self.is_empty() {
            *self = next.clone();
            return Ok(());
        }
        if next.first_vertex() != self.last_vertex() {
            return Err(Error::InvalidWaypoints(format!(
                "segment starting at {:?} does not continue from {:?}",
                next.checkpoints.first(),
                self.checkpoints.last()
            )));
        }

        self.vertices.extend(next.vertices.iter().skip(1));
        self.checkpoints.extend(next.checkpoints.iter().skip(1).cloned());
        self.times.extend(next.times.iter().skip(1));
        self.cost += next.cost;
        self.elapsed_minutes += next.elapsed_minutes;
        Ok(())
    }
}

/// Walks predecessors from `target` back to a run source, returned in forward order
///
/// Hitting a slot no run ever assigned means `target` was never reached.
pub fn reconstruct_vertices(parents: &[Parent], target: usize) -> Result<Vec<usize>> {
    if target >= parents.len() {
        return Err(Error::InvalidVertex(target));
    }

    let mut vertices = Vec::new();
    let mut current = target;
    loop {
        vertices.push(current);
        // A chain longer than the graph can only come from a cycle in stale entries
        if vertices.len() > parents.len() {
            return Err(Error::BrokenPredecessorChain(target));
        }
        match parents[current] {
            Parent::NoParent => break,
            Parent::Unset => return Err(Error::Unreachable { target }),
            Parent::Vertex(parent) if parent < parents.len() => current = parent,
            Parent::Vertex(_) => return Err(Error::BrokenPredecessorChain(target)),
        }
    }

    vertices.reverse();
    Ok(vertices)
}

/// Reconstructs the route of a run to `target` with names and arrival clocks
pub fn reconstruct(
    result: &ShortestPathResult,
    target: usize,
    labels: &CheckpointLabels,
) -> Result<RoutePath> {
    if target >= result.vertex_count() {
        return Err(Error::InvalidVertex(target));
    }
    // Carried-over predecessors may still point somewhere for unreached targets
    let cost = result.cost(target).ok_or(Error::Unreachable { target })?;
    let elapsed_minutes = result
        .elapsed_minutes(target)
        .ok_or(Error::BrokenPredecessorChain(target))?;

    let vertices = reconstruct_vertices(&result.predecessors, target)?;
    if vertices.first() != Some(&result.source) {
        return Err(Error::BrokenPredecessorChain(target));
    }

    let mut checkpoints = Vec::with_capacity(vertices.len());
    let mut times = Vec::with_capacity(vertices.len());
    for &vertex in &vertices {
        checkpoints.push(labels.label(vertex)?.to_string());
        times.push(
            result
                .arrival(vertex)
                .ok_or(Error::BrokenPredecessorChain(target))?,
        );
    }

    Ok(RoutePath {
        vertices,
        checkpoints,
        times,
        cost,
        elapsed_minutes,
    })
}
