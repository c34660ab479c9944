mod application_sink;
mod coordinate;
mod geocoder;
mod ngo;
mod route_planner;
mod travel_time;
mod volunteer_application;

pub use application_sink::{ApplicationSink, SubmissionError};
pub use coordinate::Coordinate;
pub use geocoder::{GeocodeError, Geocoder, ReverseGeocodeError};
pub use ngo::Ngo;
pub use route_planner::{RoutePlanner, RoutingError};
pub use travel_time::TravelTime;
pub use volunteer_application::{VolunteerApplication, parse_skills};
