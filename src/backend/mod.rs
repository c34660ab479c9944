mod volunteer_backend;

pub use volunteer_backend::VolunteerBackend;
