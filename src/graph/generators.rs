use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::builder::RouteRecord;
use crate::graph::track::TrackGraph;
use crate::graph::traits::MutableGraph;
use crate::Result;

/// Generates a random multigraph with about `edge_factor * n` edges
/// Weights and distances are drawn from `0..=max_weight` and `0..=max_distance`
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    max_distance: i64,
    seed: u64,
) -> Result<TrackGraph> {
    let mut graph = TrackGraph::new(n);
    if n == 0 {
        return Ok(graph);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let edge_count = (edge_factor * n as f64) as usize;
    for _ in 0..edge_count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight.max(0));
        let distance = rng.gen_range(0..=max_distance.max(0));
        graph.add_edge(u, v, weight, distance)?;
    }

    Ok(graph)
}

/// Generates route records for a single corridor of `sections` track circuits
///
/// Consecutive circuits `TC{i}` -> `TC{i+1}` are joined directly and, through a
/// switch `M{i}`, by a passing loop `TCL{i}` for roughly `loop_ratio` of the sections.
pub fn generate_corridor(sections: usize, loop_ratio: f64, seed: u64) -> Vec<RouteRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut routes = Vec::with_capacity(sections * 4);

    for i in 0..sections {
        let here = format!("TC{}", i);
        let next = format!("TC{}", i + 1);
        routes.push(RouteRecord::new(here.clone(), next.clone()));

        if rng.gen_bool(loop_ratio.clamp(0.0, 1.0)) {
            let switch = format!("M{}", i);
            let passing = format!("TCL{}", i);
            routes.push(RouteRecord::new(here, switch.clone()));
            routes.push(RouteRecord::new(switch, passing.clone()));
            routes.push(RouteRecord::new(passing, next));
        }
    }

    routes
}
