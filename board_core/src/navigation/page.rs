//! Navigation cursor and click results.

use serde::{Deserialize, Serialize};

/// Which page the board is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    /// The home page listing every category.
    #[default]
    Home,
    /// Inside the named category.
    Category(String),
}

impl Page {
    pub fn is_home(&self) -> bool {
        matches!(self, Page::Home)
    }

    /// Category name, or `""` on the home page.
    pub fn name(&self) -> &str {
        match self {
            Page::Home => "",
            Page::Category(name) => name,
        }
    }
}

/// Outcome of selecting an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// A category button was pressed on the home page; speaks the category name.
    EnteredCategory(String),
    /// An item button was pressed; speaks its text.
    Spoken(String),
    /// The image is not a button on the current page.
    NoText { image: String },
}

impl Selection {
    /// The text to speak, if there is any.
    pub fn spoken_text(&self) -> Option<&str> {
        match self {
            Selection::EnteredCategory(text) | Selection::Spoken(text) => Some(text),
            Selection::NoText { .. } => None,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::EnteredCategory(text) | Selection::Spoken(text) => f.write_str(text),
            Selection::NoText { image } => write!(f, "no text associated with {image}"),
        }
    }
}
