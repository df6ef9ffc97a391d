//! Categories - named pages of image-to-text mappings.

use serde::{Deserialize, Serialize};

use crate::keyed::{KeyNotFound, KeyedContainer};

/// A named page of buttons, each an image location mapped to the text it speaks.
///
/// The home page is also a `Category` (named `""`) whose values are category
/// names. Adding an image that is already present overwrites its text in place;
/// duplicate-prevention policy belongs to [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Category {
    name: String,
    items: KeyedContainer<String>,
}

impl Category {
    /// Create a new empty category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: KeyedContainer::new(),
        }
    }

    /// The category's label (`""` for the home page).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map `image_loc` to `text`, overwriting any previous text.
    pub fn add_item(&mut self, image_loc: impl Into<String>, text: impl Into<String>) {
        self.items.set(image_loc, text.into());
    }

    /// Text for `image_loc`, failing with [`KeyNotFound`] if the image is absent.
    pub fn get_text(&self, image_loc: &str) -> Result<&str, KeyNotFound> {
        self.items.get(image_loc).map(String::as_str)
    }

    /// Text for `image_loc` if present.
    pub fn text(&self, image_loc: &str) -> Option<&str> {
        self.items.lookup(image_loc).map(String::as_str)
    }

    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// Image locations in display order.
    pub fn images(&self) -> Vec<String> {
        self.items.keys()
    }

    /// `(image, text)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(image, text)| (image, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
