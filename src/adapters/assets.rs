use crate::domain::ports::AssetStore;
use crate::utils::error::Result;
use std::path::{Component, Path, PathBuf};

/// Assets on the local filesystem under the site's public directory.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    base_path: PathBuf,
}

impl LocalAssetStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// `None` for paths that would leave the public directory or that have
    /// empty segments (`books//cover.png` must not collapse to `books/cover.png`).
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let trimmed = path.trim_start_matches('/');
        if trimmed.split('/').any(str::is_empty) {
            return None;
        }
        let relative = Path::new(trimmed);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.base_path.join(relative))
    }
}

impl AssetStore for LocalAssetStore {
    async fn exists(&self, path: &str) -> Result<bool> {
        let Some(full_path) = self.resolve(path) else {
            tracing::warn!("Refusing malformed asset path: {}", path);
            return Ok(false);
        };
        let metadata = match tokio::fs::metadata(&full_path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        Ok(metadata.is_file() && metadata.len() > 0)
    }
}
