use std::num::NonZeroU64;
use std::time::{Duration, Instant};

use rail_itinerary::algorithm::{dijkstra::TimedDijkstra, ShortestPathAlgorithm};
use rail_itinerary::graph::generators::{generate_corridor, generate_random_graph};
use rail_itinerary::graph::{Direction, Graph, NetworkBuilder, TrackGraph};
use rail_itinerary::{ClockTime, NetworkConfig, RunOptions};

// Function to benchmark one engine run on a graph
fn benchmark_run(
    engine: &TimedDijkstra,
    graph: &mut TrackGraph,
    source: usize,
    departure: ClockTime,
) -> Result<Duration, rail_itinerary::Error> {
    let start = Instant::now();
    let result = engine.compute_shortest_paths(graph, source, departure)?;
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = (0..result.vertex_count())
        .filter(|&v| result.is_reachable(v))
        .count();
    println!("  - Reached {} checkpoints in {:?}", reachable, duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];
    let edge_factor = 2.0;
    let departure = ClockTime::parse_hhmm("06:00")?;
    let velocity = NonZeroU64::new(2).ok_or("velocity must be positive")?;
    let engine = TimedDijkstra::new(velocity);

    println!("=====================================================");
    println!(
        "Benchmark: {} on random networks",
        ShortestPathAlgorithm::<TrackGraph>::name(&engine)
    );
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        let mut graph = generate_random_graph(size, edge_factor, 10, 20, size as u64)?;
        println!(
            "\nGraph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let duration = benchmark_run(&engine, &mut graph, 0, departure)?;
        results.push((size, duration));
    }

    println!("\nCorridor network with passing loops");
    let mut network = NetworkBuilder::new(NetworkConfig::default())?
        .add_routes(generate_corridor(5_000, 0.3, 42))
        .build()?;
    let start = Instant::now();
    let outcome = network.route(
        Direction::Rightward,
        "TC0",
        "TC5000",
        "06:00",
        RunOptions::default(),
    )?;
    println!(
        "  - {} checkpoints, arrival {:?}, cost {} in {:?}",
        outcome.path.len(),
        outcome.path.arrival().map(|time| time.to_string()),
        outcome.path.cost,
        start.elapsed()
    );

    println!("\n=====================================================");
    println!("{:<10} | {:<15}", "Vertices", "Run (ms)");
    println!("-----------------------------------------------------");
    for (size, duration) in &results {
        println!("{:<10} | {:<15.2}", size, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
