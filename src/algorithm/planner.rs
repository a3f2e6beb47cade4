use std::num::NonZeroU64;

use serde::Serialize;

use crate::algorithm::dijkstra::{RunOptions, TimedDijkstra};
use crate::algorithm::itinerary::{self, Itinerary, ModulatedRoute};
use crate::algorithm::path::RoutePath;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::clock::ClockTime;
use crate::graph::labels::CheckpointLabels;
use crate::graph::traits::{Graph, PredecessorMemory};
use crate::{Error, Result};

/// Outcome of a single source-to-destination request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutcome {
    #[serde(skip)]
    pub result: ShortestPathResult,
    pub path: RoutePath,
}

/// Entry points that resolve checkpoints and run the engine over one graph
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    labels: &'a CheckpointLabels,
    velocity: NonZeroU64,
}

impl<'a> Planner<'a> {
    pub fn new(labels: &'a CheckpointLabels, velocity: NonZeroU64) -> Self {
        Planner { labels, velocity }
    }

    fn engine(&self, options: RunOptions) -> TimedDijkstra {
        TimedDijkstra::new(self.velocity).with_options(options)
    }

    /// Cheapest route from `source` to `destination` leaving at `departure`
    pub fn route<G>(
        &self,
        graph: &mut G,
        source: usize,
        destination: usize,
        departure: ClockTime,
        options: RunOptions,
    ) -> Result<RouteOutcome>
    where
        G: Graph + PredecessorMemory,
    {
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }
        let engine = self.engine(options);
        let result = engine.compute_shortest_paths(graph, source, departure)?;
        let path = ShortestPathAlgorithm::<G>::get_path(&engine, &result, destination, self.labels)?;
        Ok(RouteOutcome { result, path })
    }

    pub fn route_by_label<G>(
        &self,
        graph: &mut G,
        source: &str,
        destination: &str,
        departure: &str,
        options: RunOptions,
    ) -> Result<RouteOutcome>
    where
        G: Graph + PredecessorMemory,
    {
        let source = self.labels.index_of(source)?;
        let destination = self.labels.index_of(destination)?;
        let departure = ClockTime::parse_hhmm(departure)?;
        self.route(graph, source, destination, departure, options)
    }

    /// Route through every waypoint in order, each hop solved on its own
    pub fn run_itinerary<G>(
        &self,
        graph: &mut G,
        waypoints: &[usize],
        departure: ClockTime,
        options: RunOptions,
    ) -> Result<Itinerary>
    where
        G: Graph + PredecessorMemory,
    {
        itinerary::run_itinerary(&self.engine(options), graph, waypoints, departure, self.labels)
    }

    pub fn run_itinerary_by_label<G, S>(
        &self,
        graph: &mut G,
        waypoints: &[S],
        departure: &str,
        options: RunOptions,
    ) -> Result<Itinerary>
    where
        G: Graph + PredecessorMemory,
        S: AsRef<str>,
    {
        let waypoints = self.labels.resolve_all(waypoints)?;
        let departure = ClockTime::parse_hhmm(departure)?;
        self.run_itinerary(graph, &waypoints, departure, options)
    }

    /// Direct route first, then the same journey forced through `via`
    ///
    /// Both runs share the graph, so the modulated hops see the direct run's predecessors
    /// unless `options` resets them.
    pub fn modulate<G>(
        &self,
        graph: &mut G,
        source: usize,
        via: &[usize],
        destination: usize,
        departure: ClockTime,
        options: RunOptions,
    ) -> Result<ModulatedRoute>
    where
        G: Graph + PredecessorMemory,
    {
        let mut waypoints = Vec::with_capacity(via.len() + 2);
        waypoints.push(source);
        waypoints.extend_from_slice(via);
        waypoints.push(destination);
        if let Some(&vertex) = waypoints.iter().find(|&&vertex| !graph.has_vertex(vertex)) {
            return Err(Error::InvalidVertex(vertex));
        }

        let direct = self.route(graph, source, destination, departure, options)?.path;
        let modulated = self.run_itinerary(graph, &waypoints, departure, options)?;
        Ok(ModulatedRoute { direct, modulated })
    }

    pub fn modulate_by_label<G, S>(
        &self,
        graph: &mut G,
        source: &str,
        via: &[S],
        destination: &str,
        departure: &str,
        options: RunOptions,
    ) -> Result<ModulatedRoute>
    where
        G: Graph + PredecessorMemory,
        S: AsRef<str>,
    {
        let source = self.labels.index_of(source)?;
        let via = self.labels.resolve_all(via)?;
        let destination = self.labels.index_of(destination)?;
        let departure = ClockTime::parse_hhmm(departure)?;
        self.modulate(graph, source, &via, destination, departure, options)
    }
}
