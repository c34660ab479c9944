use crate::domain::Coordinate;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ngo {
    pub name: String,
    pub location: Coordinate,
    pub address: String,
    pub skills_needed: Vec<String>,
    pub time_commitment: String,
}
