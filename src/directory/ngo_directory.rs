use crate::domain::{Coordinate, Ngo};
use ordered_float::OrderedFloat;
use thiserror::Error;

/// The NGOs volunteers can be matched with. Loaded once, never mutated.
#[derive(Debug, Default)]
pub struct NgoDirectory {
    ngos: Vec<Ngo>,
}

impl NgoDirectory {
    pub fn new(ngos: Vec<Ngo>) -> Self {
        NgoDirectory { ngos }
    }

    pub fn len(&self) -> usize {
        self.ngos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngos.is_empty()
    }

    /// Returns the NGO closest to `location` by squared degree-space distance.
    ///
    /// When several NGOs share the minimum distance the first one in the directory wins.
    /// NGOs with a non-finite distance are never selected.
    pub fn find_nearest(&self, location: &Coordinate) -> Result<&Ngo, MatchError> {
        self.ngos
            .iter()
            .map(|ngo| (ngo, location.squared_distance_to(&ngo.location)))
            .filter(|(_, distance)| distance.is_finite())
            .min_by_key(|(_, distance)| OrderedFloat(*distance))
            .map(|(ngo, _)| ngo)
            .ok_or(MatchError::NoMatchFound)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MatchError {
    #[error("no NGO found near the given location")]
    NoMatchFound,
}
