pub mod network;

pub use network::{Network, ValidationError};

pub mod route;

pub use route::{FastestRoute, Route, RouteError};

pub mod fewest_stops;

pub use fewest_stops::{fewest_stops_query, fewest_stops_query_by_idx};

pub mod fastest;

pub use fastest::{fastest_query, fastest_query_by_idx};

pub mod utils;
mod search_tree;
