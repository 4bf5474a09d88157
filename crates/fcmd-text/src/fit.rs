#![forbid(unsafe_code)]

//! Center elision of overflowing text.
//!
//! Filenames are most recognizable at their ends (stem and extension), so
//! text that does not fit its column is elided from the middle: the string
//! is split at its midpoint and the halves are shrunk one grapheme at a
//! time from their inner edges until `left + "..." + right` fits the pixel
//! budget or a half runs out.
//!
//! When the halves are equal in length the right half shrinks first. That
//! tie-break is an observable contract: renderings produced by this module
//! must match existing ones character for character, so it must not be
//! "improved".

use crate::measure::MeasureWidth;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// The elision marker inserted where characters were removed.
pub const ELLIPSIS: &str = "...";

/// Result of a fitting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted {
    /// The text to display; equals the input when nothing was removed.
    pub display: String,
    /// Whether elision occurred. When true the caller attaches the
    /// original text as a tooltip.
    pub elided: bool,
}

/// Fit `text` into `available` pixels, eliding from the center if needed.
///
/// Returns the input unchanged when it already fits. Otherwise the halves
/// shrink grapheme by grapheme (left from its end, right from its start,
/// right first on ties) until the candidate fits or either half is empty.
/// The last candidate is returned even if it still overflows: a column
/// narrower than the ellipsis is a degraded-but-defined outcome, not an
/// error. Splitting works on extended grapheme clusters, so an emoji or a
/// combining sequence is never torn apart.
#[must_use]
pub fn fit_center<M: MeasureWidth + ?Sized>(text: &str, available: u32, measure: &M) -> Fitted {
    if measure.measure(text) <= available {
        return Fitted {
            display: text.to_owned(),
            elided: false,
        };
    }

    let clusters: SmallVec<[&str; 48]> = text.graphemes(true).collect();
    // left half = clusters[..left], right half = clusters[right..]; the
    // middle cluster of an odd-length split starts the right half.
    let mut left = clusters.len() / 2;
    let mut right = left;
    let mut display = text.to_owned();

    while left > 0 && right < clusters.len() {
        if left > clusters.len() - right {
            left -= 1;
        } else {
            right += 1;
        }
        display = assemble(&clusters, left, right);
        if measure.measure(&display) <= available {
            break;
        }
    }

    if measure.measure(&display) > available {
        tracing::trace!(available, "column narrower than elided text; overflowing");
    }

    Fitted {
        display,
        elided: true,
    }
}

fn assemble(clusters: &[&str], left: usize, right: usize) -> String {
    let mut out = String::with_capacity(ELLIPSIS.len() + clusters.len());
    for cluster in &clusters[..left] {
        out.push_str(cluster);
    }
    out.push_str(ELLIPSIS);
    for cluster in &clusters[right..] {
        out.push_str(cluster);
    }
    out
}
