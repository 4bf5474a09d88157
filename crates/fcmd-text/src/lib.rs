#![forbid(unsafe_code)]

//! Text fitting for pixel-bounded table columns.
//!
//! This crate provides the text half of the cell styling engine:
//! - [`MeasureWidth`] - the seam to the host's font metrics
//! - [`fit_center`] - center elision of text that overflows a column
//! - [`MeasureCache`] - LRU cache over a measurer for the per-paint hot path
//!
//! Widths are pixels, supplied by whatever measures text for the host
//! toolkit; [`MonospaceMeasure`] is the deterministic fallback used in tests
//! and degraded rendering.
//!
//! # Example
//! ```
//! use fcmd_text::{fit_center, MonospaceMeasure};
//!
//! let measure = MonospaceMeasure::new(1);
//!
//! // Fits: returned unchanged.
//! let fitted = fit_center("notes.txt", 20, &measure);
//! assert_eq!(fitted.display, "notes.txt");
//! assert!(!fitted.elided);
//!
//! // Overflows: elided from the center so both ends stay visible.
//! let fitted = fit_center("abcdefghij", 7, &measure);
//! assert_eq!(fitted.display, "ab...ij");
//! assert!(fitted.elided);
//! ```

pub mod fit;
pub mod measure;
pub mod measure_cache;

pub use fit::{ELLIPSIS, Fitted, fit_center};
pub use measure::{MeasureFn, MeasureWidth, MonospaceMeasure, display_width, measure_fn};
pub use measure_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, MeasureCache};
