use serde::Deserialize;

/// A single result of `/search?format=json`. Nominatim encodes the coordinates as strings.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    pub display_name: Option<String>,
    pub address: Option<serde_json::Value>,
}
