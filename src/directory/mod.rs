mod loader;
mod ngo_directory;

pub use loader::{DirectoryError, load_directory_from};
pub use ngo_directory::{MatchError, NgoDirectory};
