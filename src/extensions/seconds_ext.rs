/// Converts a duration in seconds to whole minutes.
pub trait RoundedMinutes {
    /// Returns the number of minutes in `self` seconds, rounded to the nearest minute.
    /// Half a minute rounds up.
    fn rounded_minutes(self) -> u64;
}

impl RoundedMinutes for f64 {
    fn rounded_minutes(self) -> u64 {
        // Saturating cast, negative and NaN durations end up as zero
        (self / 60.0).round() as u64
    }
}
