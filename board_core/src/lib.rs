//! # Board Core
//!
//! The engine behind an AAC picture board. This crate builds on `board_store`,
//! tracks which page is showing, applies the rules for adding buttons, and reads
//! and writes the board file format.
//!
//! ## Core Components
//!
//! - **navigation**: `BoardState`, the home/category state machine a UI polls
//! - **persistence**: Line-oriented board files (`load`, `save`, `parse`, `render`)
//! - **config**: TOML settings for image checks, parsing strictness, and saving
//! - **diagnostics**: Injected sink for engine messages (`tracing` by default)
//! - **view**: JSON snapshots of the current page
//!
//! Rendering, audio, and argument parsing belong to the host application.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod navigation;
pub mod persistence;
pub mod resources;
pub mod view;

pub use config::*;
pub use diagnostics::*;
pub use error::*;
pub use navigation::*;
pub use persistence::*;
pub use resources::*;
pub use view::*;

pub use board_store;
