use std::num::NonZeroU64;

use rail_itinerary::algorithm::dijkstra::TimedDijkstra;
use rail_itinerary::algorithm::path::{reconstruct, reconstruct_vertices};
use rail_itinerary::algorithm::ShortestPathAlgorithm;
use rail_itinerary::clock::{elapsed_minutes, ClockTime};
use rail_itinerary::graph::generators::generate_random_graph;
use rail_itinerary::graph::{
    CheckpointLabels, Graph, MutableGraph, Parent, PredecessorMemory, TrackGraph,
};
use rail_itinerary::{Error, Planner, RunOptions};

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;

fn velocity(v: u64) -> NonZeroU64 {
    NonZeroU64::new(v).unwrap()
}

fn time(s: &str) -> ClockTime {
    ClockTime::parse_hhmm(s).unwrap()
}

// A -> B -> C is cheap but long, A -> C is expensive but short, D is isolated
fn create_scenario() -> (TrackGraph, CheckpointLabels) {
    let mut graph = TrackGraph::new(4);
    graph.add_edge(A, B, 5, 10).unwrap();
    graph.add_edge(B, C, 0, 5).unwrap();
    graph.add_edge(A, C, 100, 1).unwrap();
    let labels = CheckpointLabels::new(["A", "B", "C", "D"]).unwrap();
    (graph, labels)
}

#[test]
fn test_selects_cheapest_path_with_arrival_clocks() {
    let (mut graph, labels) = create_scenario();
    let engine = TimedDijkstra::new(velocity(2));

    let result = engine
        .compute_shortest_paths(&mut graph, A, time("10:00"))
        .unwrap();

    assert_eq!(result.cost(C), Some(5));
    assert_eq!(result.distance(C), Some(15));
    assert_eq!(result.arrival_label(A), "10:00");
    assert_eq!(result.arrival_label(B), "10:05");
    // 15 distance units at velocity 2 is 7 whole minutes
    assert_eq!(result.arrival_label(C), "10:07");

    let path = reconstruct(&result, C, &labels).unwrap();
    assert_eq!(path.vertices, vec![A, B, C]);
    assert_eq!(path.path_string(), "A -> B -> C");
    assert_eq!(path.times_string(), "10:00 -> 10:05 -> 10:07");
    assert_eq!(path.cost, 5);
    assert_eq!(path.travel_minutes(), 7);
    assert_eq!(ShortestPathAlgorithm::<TrackGraph>::name(&engine), "TimedDijkstra");
}

#[test]
fn test_unreachable_vertex() {
    let (mut graph, labels) = create_scenario();
    let engine = TimedDijkstra::new(velocity(2));
    let result = engine
        .compute_shortest_paths(&mut graph, A, time("10:00"))
        .unwrap();

    assert!(!result.is_reachable(D));
    assert_eq!(result.cost(D), None);
    assert_eq!(result.arrival_label(D), "xx:xx");
    assert_eq!(graph.predecessors()[D], Parent::Unset);

    assert_eq!(
        reconstruct(&result, D, &labels),
        Err(Error::Unreachable { target: D })
    );
    assert_eq!(
        reconstruct_vertices(graph.predecessors(), D),
        Err(Error::Unreachable { target: D })
    );
}

#[test]
fn test_source_path_is_single_checkpoint() {
    let (mut graph, labels) = create_scenario();
    let engine = TimedDijkstra::new(velocity(2));
    let result = engine
        .compute_shortest_paths(&mut graph, B, time("21:40"))
        .unwrap();

    assert_eq!(result.cost(B), Some(0));
    assert_eq!(result.distance(B), Some(0));
    assert_eq!(graph.predecessors()[B], Parent::NoParent);

    let path = reconstruct(&result, B, &labels).unwrap();
    assert_eq!(path.checkpoints, vec!["B".to_string()]);
    assert_eq!(path.times, vec![time("21:40")]);
    assert_eq!(path.times_string(), "21:40");
}

#[test]
fn test_invalid_source_is_rejected() {
    let (mut graph, _) = create_scenario();
    let engine = TimedDijkstra::new(velocity(2));
    assert_eq!(
        engine.compute_shortest_paths(&mut graph, 4, time("10:00")),
        Err(Error::InvalidVertex(4))
    );
    // Nothing was touched
    assert!(graph.predecessors().iter().all(|p| *p == Parent::Unset));
}

#[test]
fn test_predecessors_carry_over_between_runs() {
    let (mut graph, labels) = create_scenario();
    let engine = TimedDijkstra::new(velocity(2));

    engine
        .compute_shortest_paths(&mut graph, A, time("10:00"))
        .unwrap();
    let second = engine
        .compute_shortest_paths(&mut graph, B, time("11:00"))
        .unwrap();

    // A is not reachable from B, but still holds its marker from the first run
    assert_eq!(second.predecessors[A], Parent::NoParent);
    assert_eq!(second.predecessors[B], Parent::NoParent);
    assert_eq!(second.predecessors[C], Parent::Vertex(B));
    assert_eq!(reconstruct_vertices(&second.predecessors, A).unwrap(), vec![A]);
    // Reachability is judged by the current run, not by stale entries
    assert_eq!(
        reconstruct(&second, A, &labels),
        Err(Error::Unreachable { target: A })
    );
}

#[test]
fn test_reset_predecessors_clears_earlier_runs() {
    let (mut graph, _) = create_scenario();
    let engine = TimedDijkstra::new(velocity(2)).with_reset_predecessors(true);

    engine
        .compute_shortest_paths(&mut graph, A, time("10:00"))
        .unwrap();
    let second = engine
        .compute_shortest_paths(&mut graph, B, time("11:00"))
        .unwrap();

    assert_eq!(second.predecessors[A], Parent::Unset);
    assert_eq!(second.predecessors[C], Parent::Vertex(B));
    assert_eq!(
        reconstruct_vertices(&second.predecessors, A),
        Err(Error::Unreachable { target: A })
    );
}

#[test]
fn test_equal_costs_follow_insertion_order() {
    // Two equal-cost routes to T; the first inserted edge wins
    let mut graph = TrackGraph::new(4);
    graph.add_edge(0, 2, 1, 40).unwrap();
    graph.add_edge(0, 1, 1, 2).unwrap();
    graph.add_edge(2, 3, 1, 40).unwrap();
    graph.add_edge(1, 3, 1, 2).unwrap();
    let labels = CheckpointLabels::new(["S", "X", "Y", "T"]).unwrap();
    let engine = TimedDijkstra::new(velocity(2));

    for _ in 0..3 {
        let result = engine
            .compute_shortest_paths(&mut graph, 0, time("00:00"))
            .unwrap();
        let path = reconstruct(&result, 3, &labels).unwrap();
        assert_eq!(path.path_string(), "S -> Y -> T");
        assert_eq!(path.times_string(), "00:00 -> 00:20 -> 00:40");
    }
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = TrackGraph::new(2);
    graph.add_edge(0, 1, 9, 2).unwrap();
    graph.add_edge(0, 1, 3, 60).unwrap();
    let engine = TimedDijkstra::new(velocity(2));

    let result = engine
        .compute_shortest_paths(&mut graph, 0, time("23:50"))
        .unwrap();
    assert_eq!(result.cost(1), Some(3));
    assert_eq!(result.arrival_label(1), "00:20");
}

#[test]
fn test_planner_route_by_label() {
    let (mut graph, labels) = create_scenario();
    let planner = Planner::new(&labels, velocity(2));

    let outcome = planner
        .route_by_label(&mut graph, "A", "C", "10:00", RunOptions::default())
        .unwrap();
    assert_eq!(outcome.path.path_string(), "A -> B -> C");
    assert_eq!(outcome.result.source, A);

    assert_eq!(
        planner
            .route_by_label(&mut graph, "A", "Z", "10:00", RunOptions::default())
            .unwrap_err(),
        Error::UnknownCheckpoint("Z".to_string())
    );
    assert!(matches!(
        planner.route_by_label(&mut graph, "A", "C", "1000", RunOptions::default()),
        Err(Error::InvalidTime { .. })
    ));
}

// Checks the run invariants on seeded random multigraphs
#[test]
fn test_run_invariants_on_random_graphs() {
    let engine = TimedDijkstra::new(velocity(3));
    let departure = time("17:45");

    for seed in 0..20u64 {
        let mut graph = generate_random_graph(60, 3.0, 12, 25, seed).unwrap();
        let source = (seed as usize * 7) % graph.vertex_count();
        let result = engine
            .compute_shortest_paths(&mut graph, source, departure)
            .unwrap();

        assert_eq!(result.cost(source), Some(0));
        assert_eq!(result.distance(source), Some(0));
        assert_eq!(result.arrival(source), Some(departure));

        for v in 0..graph.vertex_count() {
            let Some(cost) = result.cost(v) else {
                assert_eq!(result.arrival_label(v), "xx:xx");
                continue;
            };
            let distance = result.distance(v).unwrap();
            let minutes = elapsed_minutes(distance, engine.velocity());
            assert_eq!(result.elapsed_minutes(v), Some(minutes));
            assert_eq!(result.arrival(v), Some(departure.add_minutes(minutes)));

            // No edge from a reached vertex can undercut the final cost
            for u in 0..graph.vertex_count() {
                if let Some(cost_u) = result.cost(u) {
                    for edge in graph.outgoing_edges(u).iter().filter(|e| e.destination == v) {
                        assert!(cost <= cost_u + edge.weight);
                    }
                }
            }

            if v == source {
                continue;
            }
            let Parent::Vertex(parent) = result.predecessors[v] else {
                panic!("reached vertex {} has no parent", v);
            };
            let matching = graph
                .outgoing_edges(parent)
                .iter()
                .filter(|e| e.destination == v)
                .any(|e| {
                    result.cost(parent).unwrap() + e.weight == cost
                        && result.distance(parent).unwrap() + e.distance == distance
                });
            assert!(matching, "vertex {} is not explained by its parent {}", v, parent);
        }
    }
}
