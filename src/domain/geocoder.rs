use crate::domain::Coordinate;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

#[async_trait]
pub trait Geocoder: Debug + Send + Sync {
    /// Resolves a free-text address to the coordinate of the first match.
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError>;

    /// Resolves a coordinate to a human-readable address.
    async fn reverse_geocode(&self, location: &Coordinate) -> Result<String, ReverseGeocodeError>;
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("no results for the given address")]
    NoResults,
    #[error("geocoding returned an invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ReverseGeocodeError {
    #[error("no address found for the given location")]
    MissingAddress,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
