//! The board - the home page plus one item store per category.

mod rejection;

pub use rejection::*;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::image::{canonical_text, normalize_image_loc, ITEM_MARKER};
use crate::keyed::{KeyNotFound, KeyedContainer};

/// Everything a picture board holds, without any navigation state.
///
/// Invariants upheld by [`Board::add_category`] and [`Board::add_item`]:
/// - every category named on the home page has an entry in `categories`;
/// - no image is both a category image and an item anywhere;
/// - image keys are unique within the home page and within each category;
/// - category names are unique, non-empty single words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Category image -> category name.
    home: Category,

    /// Category name -> its items.
    categories: KeyedContainer<Category>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            home: Category::new(""),
            categories: KeyedContainer::new(),
        }
    }
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The home page, mapping category images to category names.
    pub fn home(&self) -> &Category {
        &self.home
    }

    /// Get a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.lookup(name)
    }

    /// Get a category by name, failing with [`KeyNotFound`].
    pub fn get_category(&self, name: &str) -> Result<&Category, KeyNotFound> {
        self.categories.get(name)
    }

    /// All categories in home-page order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Name of the category whose home-page image is `image_loc`.
    pub fn category_for_image(&self, image_loc: &str) -> Option<&str> {
        self.home.text(image_loc)
    }

    /// Home-page image of the category called `name`.
    pub fn image_for_category(&self, name: &str) -> Option<&str> {
        self.home
            .iter()
            .find(|(_, category)| *category == name)
            .map(|(image, _)| image)
    }

    /// First category (in home-page order) holding `image_loc` as an item.
    pub fn category_holding_item(&self, image_loc: &str) -> Option<&str> {
        self.categories
            .values()
            .find(|category| category.has_image(image_loc))
            .map(Category::name)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty()
    }

    /// Check whether a new category could be added, without changing anything.
    ///
    /// Surrounding whitespace on `name` is ignored.
    pub fn check_category(&self, image_loc: &str, name: &str) -> Result<(), Rejection> {
        let image = normalize_image_loc(image_loc);
        let name = name.trim();
        check_image_loc(&image)?;
        check_single_word(Field::CategoryName, name)?;

        if let Some(category) = self.home.text(&image) {
            return Err(Rejection::CategoryImage {
                image,
                category: category.to_string(),
            });
        }
        if let Some(category) = self.category_holding_item(&image) {
            return Err(Rejection::ItemOfCategory {
                image,
                category: category.to_string(),
            });
        }
        if self.categories.has_key(name) {
            return Err(Rejection::DuplicateCategory {
                name: name.to_string(),
            });
        }

        Ok(())
    }

    /// Check whether an item could be added to `category`, without changing anything.
    pub fn check_item(&self, category: &str, image_loc: &str, text: &str) -> Result<(), Rejection> {
        let Some(items) = self.categories.lookup(category) else {
            return Err(Rejection::UnknownCategory {
                name: category.to_string(),
            });
        };

        let image = normalize_image_loc(image_loc);
        check_image_loc(&image)?;
        if canonical_text(text).is_empty() {
            return Err(Rejection::Empty { field: Field::Text });
        }

        match self.home.text(&image) {
            Some(owner) if owner == category => {
                return Err(Rejection::ParentImage {
                    image,
                    category: category.to_string(),
                });
            }
            Some(owner) => {
                return Err(Rejection::OtherCategoryImage {
                    image,
                    category: category.to_string(),
                    other: owner.to_string(),
                });
            }
            None => {}
        }

        if items.has_image(&image) {
            return Err(Rejection::ItemImage {
                image,
                category: category.to_string(),
            });
        }

        Ok(())
    }

    /// Add a category button to the home page and register its empty item store.
    ///
    /// The image location is normalized and the name trimmed before they are stored.
    pub fn add_category(&mut self, image_loc: &str, name: &str) -> Result<(), Rejection> {
        self.check_category(image_loc, name)?;

        let name = name.trim();
        self.home.add_item(normalize_image_loc(image_loc), name);
        self.categories.set(name, Category::new(name));
        Ok(())
    }

    /// Add an item to an existing category.
    ///
    /// The image location is normalized and the text's whitespace canonicalized
    /// before they are stored.
    pub fn add_item(&mut self, category: &str, image_loc: &str, text: &str) -> Result<(), Rejection> {
        self.check_item(category, image_loc, text)?;

        if let Some(items) = self.categories.lookup_mut(category) {
            items.add_item(normalize_image_loc(image_loc), canonical_text(text));
        }
        Ok(())
    }
}

fn check_image_loc(image: &str) -> Result<(), Rejection> {
    check_single_word(Field::ImageLocation, image)?;
    if image.starts_with(ITEM_MARKER) {
        return Err(Rejection::LeadingMarker {
            image: image.to_string(),
        });
    }
    Ok(())
}

fn check_single_word(field: Field, value: &str) -> Result<(), Rejection> {
    if value.is_empty() {
        return Err(Rejection::Empty { field });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(Rejection::Whitespace {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
