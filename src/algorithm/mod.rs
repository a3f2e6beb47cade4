pub mod dijkstra;
pub mod itinerary;
pub mod path;
pub mod planner;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
