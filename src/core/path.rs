use std::path::{Path, PathBuf};

pub fn resolve_path(base_dir: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Directory holding the running binary, falling back to the working directory.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_base() {
        let base = PathBuf::from("/opt/nodes");
        assert_eq!(
            resolve_path(&base, "wheel_urls.txt"),
            base.join("wheel_urls.txt")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_are_kept() {
        let base = PathBuf::from("/opt/nodes");
        assert_eq!(
            resolve_path(&base, "/etc/pip-nodes/wheels.txt"),
            PathBuf::from("/etc/pip-nodes/wheels.txt")
        );
    }
}
