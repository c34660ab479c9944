use crate::directory::NgoDirectory;
use crate::domain::{ApplicationSink, Coordinate, Geocoder, Ngo, RoutePlanner, TravelTime, VolunteerApplication, parse_skills};
use crate::matcher::{SessionError, SessionState};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const MATCHED_MESSAGE: &str = "Nearest NGO found!";
const APPLIED_MESSAGE: &str = "You have successfully applied!";
const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

#[derive(Clone, Debug, PartialEq)]
pub struct NgoMatch {
    pub ngo: Ngo,
    pub travel_time: TravelTime,
}

/// What the volunteer fills in before applying. `skills` is the raw comma separated input.
#[derive(Clone, Debug, Default)]
pub struct ApplicationForm {
    pub name: String,
    pub phone: String,
    pub skills: String,
    pub availability: String,
}

/// A single volunteer's matching session. Every network call is awaited before the next one
/// starts, so the session needs no synchronisation of its own.
#[derive(Debug)]
pub struct MatchSession {
    directory: Arc<NgoDirectory>,
    geocoder: Arc<dyn Geocoder>,
    route_planner: Arc<dyn RoutePlanner>,
    application_sink: Arc<dyn ApplicationSink>,
    state: SessionState,
    user_location: Coordinate,
    current_match: Option<NgoMatch>,
    message: Option<String>,
}

impl MatchSession {
    pub fn new(
        directory: Arc<NgoDirectory>,
        geocoder: Arc<dyn Geocoder>,
        route_planner: Arc<dyn RoutePlanner>,
        application_sink: Arc<dyn ApplicationSink>,
    ) -> Self {
        MatchSession {
            directory,
            geocoder,
            route_planner,
            application_sink,
            state: SessionState::Idle,
            user_location: Coordinate::default(),
            current_match: None,
            message: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user_location(&self) -> &Coordinate {
        &self.user_location
    }

    pub fn current_match(&self) -> Option<&NgoMatch> {
        self.current_match.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Geocodes `address`, selects the nearest NGO and estimates the travel time to it.
    ///
    /// A failed search leaves the previous match untouched. An unavailable travel time does not
    /// fail the search.
    #[instrument(skip(self))]
    pub async fn find_nearest_ngo(&mut self, address: &str) -> Result<NgoMatch, SessionError> {
        self.message = None;
        self.state = SessionState::Geocoding;

        let location = match self.geocoder.geocode(address).await {
            Ok(location) => location,
            Err(e) => {
                warn!("⚠️ Unable to geocode the address: {}", e);
                return Err(self.fail(SessionError::GeocodeFailed(e)));
            }
        };
        self.user_location = location;

        let ngo = match self.directory.find_nearest(&location) {
            Ok(ngo) => ngo.clone(),
            Err(e) => {
                warn!(lat = location.lat, lon = location.lon, "⚠️ {}", e);
                return Err(self.fail(SessionError::NoMatchFound));
            }
        };

        let travel_time = self.route_planner.travel_time(&location, &ngo.location).await.unwrap_or_else(|e| {
            warn!("⚠️ Travel time to '{}' is not available: {}", ngo.name, e);
            TravelTime::NotAvailable
        });

        info!("🟢 Matched with '{}', {}", ngo.name, travel_time);
        let ngo_match = NgoMatch { ngo, travel_time };
        self.current_match = Some(ngo_match.clone());
        self.state = SessionState::Matched;
        self.message = Some(MATCHED_MESSAGE.to_string());

        Ok(ngo_match)
    }

    /// Applies to the currently matched NGO with the last geocoded location, reverse geocoded
    /// to a readable address.
    #[instrument(skip_all)]
    pub async fn apply(&mut self, form: &ApplicationForm) -> Result<VolunteerApplication, SessionError> {
        let Some(current_match) = &self.current_match else {
            warn!("⚠️ Tried to apply without a matched NGO");
            return Err(SessionError::NoNgoSelected);
        };
        let applied_ngo = current_match.ngo.name.clone();

        self.message = None;
        self.state = SessionState::Applying;

        let location = self.geocoder.reverse_geocode(&self.user_location).await.unwrap_or_else(|e| {
            warn!("⚠️ Unable to reverse geocode the volunteer location: {}", e);
            ADDRESS_NOT_AVAILABLE.to_string()
        });

        let application = VolunteerApplication {
            name: form.name.clone(),
            phone: form.phone.clone(),
            skills: parse_skills(&form.skills),
            location,
            availability: form.availability.clone(),
            applied_ngo,
        };

        if let Err(e) = self.application_sink.submit(&application).await {
            warn!("⚠️ Unable to submit the application to '{}': {}", application.applied_ngo, e);
            return Err(self.fail(SessionError::SubmissionFailed(e)));
        }

        info!("🟢 Applied to '{}'", application.applied_ngo);
        self.state = SessionState::Applied;
        self.message = Some(APPLIED_MESSAGE.to_string());

        Ok(application)
    }

    fn fail(&mut self, error: SessionError) -> SessionError {
        self.state = SessionState::Error;
        self.message = Some(error.user_message().to_string());
        error
    }
}
