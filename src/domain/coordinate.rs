#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// Squared straight-line distance in degree space. This is not a geodesic distance,
    /// it only orders points sensibly when they are close to each other.
    pub fn squared_distance_to(&self, other: &Coordinate) -> f64 {
        (self.lat - other.lat).powi(2) + (self.lon - other.lon).powi(2)
    }
}
