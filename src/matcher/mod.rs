mod session;
mod session_error;
mod session_state;

pub use session::{ApplicationForm, MatchSession, NgoMatch};
pub use session_error::SessionError;
pub use session_state::SessionState;
