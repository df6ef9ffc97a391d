//! Page views - serializable snapshots of the current page for a UI layer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One button on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub image: String,

    /// Category name on the home page, spoken text inside a category.
    pub text: String,

    /// Whether pressing this button navigates into a category.
    pub opens_category: bool,
}

impl Button {
    pub fn new(image: impl Into<String>, text: impl Into<String>, opens_category: bool) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
            opens_category,
        }
    }
}

/// Everything a UI needs to draw the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Current category name, `""` on the home page.
    pub category: String,

    /// Buttons in display order.
    pub buttons: Vec<Button>,
}

impl PageView {
    pub fn is_home(&self) -> bool {
        self.category.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
