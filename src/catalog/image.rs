use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Reference to an image asset. The path is opaque until resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    pub alt: String,
}

/// What the display layer should show for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDisplay {
    Available(PathBuf),
    /// Asset is missing or no asset directory is configured.
    Missing { alt: String },
}

impl ImageRef {
    pub fn new(path: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alt: alt.into(),
        }
    }

    /// Resolves the reference against `assets_dir`. Never fails: anything
    /// that cannot be found degrades to the alt text.
    pub fn resolve(&self, assets_dir: Option<&Path>) -> ImageDisplay {
        let Some(dir) = assets_dir else {
            return self.missing();
        };
        let candidate = dir.join(self.path.trim_start_matches('/'));
        if candidate.is_file() {
            ImageDisplay::Available(candidate)
        } else {
            tracing::debug!(path = %self.path, "Image asset missing, falling back to alt text");
            self.missing()
        }
    }

    fn missing(&self) -> ImageDisplay {
        ImageDisplay::Missing {
            alt: self.alt.clone(),
        }
    }
}
