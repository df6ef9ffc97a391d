//! Image resources - checks that an added image actually exists.

use std::path::{Path, PathBuf};

/// Decides whether an image location refers to a usable image.
pub trait ImageResources: Send + Sync {
    /// `Err` carries the path that was probed.
    fn check(&self, image_loc: &str) -> Result<(), PathBuf>;
}

/// Resolves image locations against a root directory on the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsResources {
    root: Option<PathBuf>,
}

impl FsResources {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Create a checker rooted at `root`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self::new(Some(root.into()))
    }

    /// Where `image_loc` is expected to live.
    pub fn resolve(&self, image_loc: &str) -> PathBuf {
        let path = Path::new(image_loc);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageResources for FsResources {
    fn check(&self, image_loc: &str) -> Result<(), PathBuf> {
        let path = self.resolve(image_loc);
        if path.is_file() {
            Ok(())
        } else {
            Err(path)
        }
    }
}

/// Accepts every image location.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyImage;

impl ImageResources for AnyImage {
    fn check(&self, _image_loc: &str) -> Result<(), PathBuf> {
        Ok(())
    }
}
