pub mod builder;
pub mod generators;
pub mod labels;
pub mod track;
pub mod traits;

pub use builder::{Direction, EdgeClass, Network, NetworkBuilder, RouteRecord};
pub use labels::{parse_route_request, CheckpointLabels};
pub use track::{Edge, Parent, TrackGraph};
pub use traits::{Graph, MutableGraph, PredecessorMemory};
