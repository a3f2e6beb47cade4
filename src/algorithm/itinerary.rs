use serde::Serialize;

use crate::algorithm::path::RoutePath;
use crate::algorithm::ShortestPathAlgorithm;
use crate::clock::ClockTime;
use crate::graph::labels::CheckpointLabels;
use crate::graph::traits::{Graph, PredecessorMemory};
use crate::{Error, Result};

/// A journey forced through an ordered list of waypoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// Requested checkpoints, first is the departure and last the arrival
    pub waypoints: Vec<usize>,

    /// One route per consecutive waypoint pair
    pub segments: Vec<RoutePath>,

    /// Segments merged end to end, boundary checkpoints listed once
    pub route: RoutePath,
}

impl Itinerary {
    pub fn path_string(&self) -> String {
        self.route.path_string()
    }

    pub fn times_string(&self) -> String {
        self.route.times_string()
    }

    pub fn arrival(&self) -> Option<ClockTime> {
        self.route.arrival()
    }
}

/// Merges consecutive segments; each one must start where the previous ended
pub fn stitch(segments: &[RoutePath]) -> Result<RoutePath> {
    let mut merged = RoutePath::default();
    for segment in segments {
        merged.extend_with(segment)?;
    }
    Ok(merged)
}

/// Runs one traversal per waypoint pair, departing each hop when the previous one arrives
pub fn run_itinerary<A, G>(
    algorithm: &A,
    graph: &mut G,
    waypoints: &[usize],
    departure: ClockTime,
    labels: &CheckpointLabels,
) -> Result<Itinerary>
where
    A: ShortestPathAlgorithm<G>,
    G: Graph + PredecessorMemory,
{
    if waypoints.len() < 2 {
        return Err(Error::InvalidWaypoints(format!(
            "need a departure and an arrival checkpoint, got {} waypoint(s)",
            waypoints.len()
        )));
    }
    // Reject bad input before the first run touches the graph
    if let Some(&vertex) = waypoints.iter().find(|&&vertex| !graph.has_vertex(vertex)) {
        return Err(Error::InvalidVertex(vertex));
    }

    let mut segments = Vec::with_capacity(waypoints.len() - 1);
    let mut current_departure = departure;
    for hop in waypoints.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        let result = algorithm.compute_shortest_paths(graph, from, current_departure)?;
        let segment = algorithm.get_path(&result, to, labels)?;
        current_departure = segment.arrival().unwrap_or(current_departure);
        segments.push(segment);
    }

    let route = stitch(&segments)?;
    Ok(Itinerary {
        waypoints: waypoints.to_vec(),
        segments,
        route,
    })
}

/// The unconstrained route next to the route forced through extra waypoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulatedRoute {
    pub direct: RoutePath,
    pub modulated: Itinerary,
}

impl ModulatedRoute {
    /// The stitched journey between the original departure and arrival checkpoints
    pub fn net(&self) -> &RoutePath {
        &self.modulated.route
    }

    /// Extra weight paid for visiting the waypoints
    pub fn extra_cost(&self) -> u64 {
        self.net().cost.saturating_sub(self.direct.cost)
    }

    /// Extra travel minutes compared with the direct route, negative when the detour is faster
    pub fn extra_minutes(&self) -> i64 {
        let net = i64::try_from(self.net().travel_minutes()).unwrap_or(i64::MAX);
        let direct = i64::try_from(self.direct.travel_minutes()).unwrap_or(i64::MAX);
        net.saturating_sub(direct)
    }
}
