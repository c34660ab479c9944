use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

/// Builds a client identifying itself with the configured user agent, which Nominatim requires.
pub fn new_client(config: &AppConfig) -> Result<Client, NominatimClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_str(config.geocoding().user_agent())?);

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum NominatimClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Nominatim client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
