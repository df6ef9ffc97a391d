//! Board configuration, read from TOML.
//!
//! ```toml
//! image_root = "assets"
//! check_images = true
//! extra_category_tokens = "reject"
//! atomic_save = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BoardError, Result};
use crate::resources::{AnyImage, FsResources, ImageResources};

/// What to do with tokens after the category name on a category line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraTokens {
    /// Treat the line as malformed.
    #[default]
    Reject,
    /// Keep the first two tokens and warn about the rest.
    Ignore,
}

/// Settings for loading, editing, and saving a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory relative image locations are resolved against when checking
    /// that an added image exists. `None` resolves against the working directory.
    pub image_root: Option<PathBuf>,

    /// Require added images to exist on disk.
    pub check_images: bool,

    pub extra_category_tokens: ExtraTokens,

    /// Save through a temporary file and rename it over the target.
    pub atomic_save: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            image_root: None,
            check_images: true,
            extra_category_tokens: ExtraTokens::Reject,
            atomic_save: true,
        }
    }
}

impl BoardConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| BoardError::Config {
            details: e.to_string(),
        })
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path).map_err(|e| BoardError::from_io(path, e))?;
        Self::from_toml_str(&input)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| BoardError::Config {
            details: e.to_string(),
        })
    }

    /// The image checker these settings call for.
    pub fn image_resources(&self) -> Box<dyn ImageResources> {
        if self.check_images {
            Box::new(FsResources::new(self.image_root.clone()))
        } else {
            Box::new(AnyImage)
        }
    }
}
