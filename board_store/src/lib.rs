//! # Board Store
//!
//! Storage primitives for the picture board. Everything the board knows lives in
//! a [`KeyedContainer`]: each [`Category`] maps image locations to spoken text, and
//! the [`Board`] composes one category for the home page with one container of
//! categories keyed by name.
//!
//! This crate owns the structural invariants (unique keys, stable display order,
//! no image shared across the wrong scopes). It performs no I/O and keeps no
//! navigation state.

pub mod board;
pub mod category;
pub mod image;
pub mod keyed;

pub use board::*;
pub use category::*;
pub use image::*;
pub use keyed::*;
