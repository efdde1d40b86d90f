use crate::core::error::Result;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

/// Writes `content` to a file that must not exist yet.
///
/// Fails with `AlreadyExists` instead of truncating, so a file the user
/// created in the meantime is left alone.
pub async fn write_new_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent).await?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PipNodesError;

    #[tokio::test]
    async fn write_new_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("list.txt");

        write_new_file(&path, "# hello\n").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "# hello\n");
    }

    #[tokio::test]
    async fn write_new_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        tokio::fs::write(&path, "numpy\n").await.unwrap();

        let err = write_new_file(&path, "# template\n").await.unwrap_err();
        match err {
            PipNodesError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("unexpected error: {}", other),
        }

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "numpy\n");
    }
}
