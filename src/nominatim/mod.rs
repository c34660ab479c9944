mod client;
mod geocoder;
mod search_response;

pub use client::{NominatimClientError, new_client};
pub use geocoder::NominatimGeocoder;
