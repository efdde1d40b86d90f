pub mod installer;
pub mod outcome;
pub mod request;
pub mod runner;

pub use installer::Installer;
pub use outcome::{wheel_filename, InstallOutcome};
pub use request::{InstallRequest, Selection};
pub use runner::{CommandRunner, SystemRunner};
