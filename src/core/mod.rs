pub mod error;
pub mod fs;
pub mod path;
pub mod process;

pub use error::{PipNodesError, Result};
pub use fs::{ensure_dir_exists, write_new_file};
pub use path::{executable_dir, resolve_path};
pub use process::{CapturedOutput, ProcessExecutor};
