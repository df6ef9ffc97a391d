//! Rejections - the rules an addition to the board can break.

use thiserror::Error;

/// Which part of an addition a [`Rejection`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ImageLocation,
    CategoryName,
    Text,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::ImageLocation => "image location",
            Field::CategoryName => "category name",
            Field::Text => "text",
        };
        f.write_str(label)
    }
}

/// Reasons the board refuses an addition. The board is unchanged whenever one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The home page already has a button with this image.
    #[error("{image} is already the image of category {category:?}")]
    CategoryImage { image: String, category: String },

    /// A new category image is already used by an item.
    #[error("{image} is already used by an item in category {category:?}")]
    ItemOfCategory { image: String, category: String },

    /// An item may not reuse its own category's home-page image.
    #[error("{image} is the image of category {category:?} itself and cannot be one of its items")]
    ParentImage { image: String, category: String },

    /// An item may not reuse another category's home-page image.
    #[error("{image} is the image of category {other:?} and cannot be an item of {category:?}")]
    OtherCategoryImage {
        image: String,
        category: String,
        other: String,
    },

    /// The category already holds an item with this image.
    #[error("{image} is already an item in category {category:?}")]
    ItemImage { image: String, category: String },

    #[error("a category named {name:?} already exists")]
    DuplicateCategory { name: String },

    #[error("no category named {name:?}")]
    UnknownCategory { name: String },

    #[error("{field} must not be empty")]
    Empty { field: Field },

    #[error("{field} {value:?} must be a single word")]
    Whitespace { field: Field, value: String },

    #[error("image location {image:?} must not start with '>'")]
    LeadingMarker { image: String },
}

impl Rejection {
    /// True for the rules that keep image keys unique across scopes.
    pub fn is_duplicate_image(&self) -> bool {
        matches!(
            self,
            Rejection::CategoryImage { .. }
                | Rejection::ItemOfCategory { .. }
                | Rejection::ParentImage { .. }
                | Rejection::OtherCategoryImage { .. }
                | Rejection::ItemImage { .. }
        )
    }
}
