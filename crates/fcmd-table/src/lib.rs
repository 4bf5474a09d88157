#![forbid(unsafe_code)]

//! Cell visual-state resolution for the file table.
//!
//! This crate decides how every visible cell of the file table looks; it
//! does not paint. For each (row, column) pair the host builds a
//! [`CellFacts`] snapshot, and [`resolve`] turns it - together with the
//! active [`fcmd_style::Palette`] and the host's font metrics - into a
//! [`ResolvedCellStyle`]. [`FileTableRenderer`] layers the per-column
//! [`CellTarget`] reuse and the theme-store subscription on top.
//!
//! # Example
//! ```
//! use fcmd_style::palettes;
//! use fcmd_table::{CellFacts, CellValue, ColumnKind, resolve};
//! use fcmd_text::MonospaceMeasure;
//!
//! let palette = palettes::dark();
//! let measure = MonospaceMeasure::new(1);
//!
//! let facts = CellFacts::text(0, ColumnKind::Name, "a_rather_long_name.txt", 12);
//! let style = resolve(&facts, &palette, &measure);
//!
//! let CellValue::Text(display) = &style.content else { unreachable!() };
//! assert!(display.contains("..."));
//! assert_eq!(style.tooltip.as_deref(), Some("a_rather_long_name.txt"));
//! ```

pub mod column;
pub mod facts;
pub mod render_target;
pub mod resolver;
pub mod status;

pub use column::{Alignment, ColumnKind};
pub use facts::{CellFacts, CellValue, FileFlags, IconRef};
pub use render_target::{CellTarget, FileTableRenderer};
pub use resolver::{ResolvedCellStyle, resolve};
pub use status::classify;
