//! Temporary files that live for a single request

use std::path::{Path, PathBuf};

/// A file on disk that is removed when the guard is dropped
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
    armed: bool,
}

impl TempArtifact {
    /// Write `contents` to `path`, creating parent directories as needed
    ///
    /// The guard is armed before the write, so a partially written file is
    /// removed as well.
    pub async fn write(path: PathBuf, contents: impl AsRef<[u8]>) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let artifact = Self { path, armed: true };
        tokio::fs::write(&artifact.path, contents).await?;
        Ok(artifact)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file without blocking the runtime
    ///
    /// On failure the guard stays armed and retries on drop.
    pub async fn remove(mut self) -> std::io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        self.armed = false;
        tracing::debug!("Removed temporary file {}", self.path.display());
        Ok(())
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Removed temporary file {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("linkbot-tests")
            .join(format!("{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_removed_on_drop() {
        let path = scratch_dir("drop").join("out.txt");
        let artifact = TempArtifact::write(path.clone(), "A : https://a\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(artifact.path()).unwrap(), "A : https://a\n");
        drop(artifact);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_removed_on_early_return() {
        async fn fails_after_write(path: PathBuf) -> std::io::Result<()> {
            let _artifact = TempArtifact::write(path, b"partial").await?;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "send failed"))
        }

        let path = scratch_dir("early").join("out.txt");
        assert!(fails_after_write(path.clone()).await.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_tolerates_missing_file() {
        let artifact = TempArtifact {
            path: scratch_dir("missing").join("never-written.txt"),
            armed: true,
        };
        drop(artifact);
    }

    #[tokio::test]
    async fn test_async_remove() {
        let path = scratch_dir("remove").join("out.txt");
        let artifact = TempArtifact::write(path.clone(), "B : https://b\n").await.unwrap();
        assert!(path.exists());

        artifact.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_async_remove_already_gone() {
        let path = scratch_dir("gone").join("out.txt");
        let artifact = TempArtifact::write(path.clone(), "C").await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(artifact.remove().await.is_ok());
    }
}
