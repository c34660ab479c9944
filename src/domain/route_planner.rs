use crate::domain::{Coordinate, TravelTime};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

#[async_trait]
pub trait RoutePlanner: Debug + Send + Sync {
    async fn travel_time(&self, from: &Coordinate, to: &Coordinate) -> Result<TravelTime, RoutingError>;
}

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("no route between the given locations")]
    NoRoutes,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
