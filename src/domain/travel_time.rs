use crate::extensions::seconds_ext::RoundedMinutes;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TravelTime {
    Minutes(u64),
    NotAvailable,
}

impl TravelTime {
    pub fn from_seconds(seconds: f64) -> Self {
        TravelTime::Minutes(seconds.rounded_minutes())
    }
}

impl Display for TravelTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelTime::Minutes(minutes) => write!(f, "{} minutes", minutes),
            TravelTime::NotAvailable => write!(f, "Travel time not available"),
        }
    }
}
