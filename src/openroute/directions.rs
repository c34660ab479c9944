use crate::domain::Coordinate;
use serde::{Deserialize, Serialize};

/// Body of a directions request. Coordinates are ordered `[lon, lat]`.
#[derive(Debug, Serialize)]
pub struct DirectionsRequest {
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    pub fn new(from: &Coordinate, to: &Coordinate) -> Self {
        DirectionsRequest {
            coordinates: vec![[from.lon, from.lat], [to.lon, to.lat]],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub summary: Summary,
}

#[derive(Debug, Deserialize)]
pub struct Summary {
    // Omitted by the API when zero
    #[serde(default)]
    pub duration: f64,
}
