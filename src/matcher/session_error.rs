use crate::domain::{GeocodeError, SubmissionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("unable to geocode the address: {0}")]
    GeocodeFailed(#[source] GeocodeError),
    #[error("no NGO found near the given location")]
    NoMatchFound,
    #[error("no NGO has been matched yet")]
    NoNgoSelected,
    #[error("unable to submit the application: {0}")]
    SubmissionFailed(#[source] SubmissionError),
}

impl SessionError {
    /// The message shown to the volunteer. Failure details only go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::GeocodeFailed(_) => "Failed to find your location. Please check your address and try again.",
            SessionError::NoMatchFound => "No NGOs found in your area.",
            SessionError::NoNgoSelected => "Find your nearest NGO before applying.",
            SessionError::SubmissionFailed(_) => "Failed to submit your application. Please try again.",
        }
    }
}
