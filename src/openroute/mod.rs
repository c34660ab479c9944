mod client;
mod directions;
mod route_planner;

pub use client::{OpenRouteClientError, new_client};
pub use route_planner::OpenRouteService;
