#![forbid(unsafe_code)]

//! Colors, palettes, and the process-wide theme store for the file table.
//!
//! This crate holds the styling vocabulary of the file manager's table view:
//! - [`Rgba`] - packed color values
//! - [`FontSpec`] / [`FontId`] - font configuration and font identity
//! - [`Palette`] - the full color/font snapshot the table renders against,
//!   indexed by focus state, selection state, and status category
//! - [`ThemeStore`] - the shared store that owns the active palette and
//!   broadcasts change notifications to registered listeners
//!
//! # Example
//! ```
//! use fcmd_style::{palettes, FocusState, SelectionState, Status, ThemeStore};
//!
//! let store = ThemeStore::new(palettes::dark());
//! let palette = store.palette();
//!
//! // Look up the foreground for an unselected folder in a focused table.
//! let fg = palette.foreground(FocusState::Active, SelectionState::Normal, Status::Folder);
//! assert_ne!(fg, palette.unmatched_foreground);
//! ```

pub mod color;
pub mod font;
pub mod palette;
pub mod theme_store;

pub use color::Rgba;
pub use font::{FontAttrs, FontId, FontSpec};
pub use palette::{
    BackgroundSlot, FocusState, Palette, PaletteBuilder, SelectionState, Status, palettes,
};
pub use theme_store::{ThemeEvent, ThemeStore, ThemeSubscription};
