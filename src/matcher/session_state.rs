/// Where a matching session is in its workflow.
///
/// `Idle → Geocoding → Matched → Applying → Applied`, with `Geocoding` and `Applying` falling
/// through to `Error` on failure. Any state can start a new search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Geocoding,
    Matched,
    Applying,
    Applied,
    Error,
}
