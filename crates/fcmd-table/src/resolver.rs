#![forbid(unsafe_code)]

//! The cell visual-state resolver.
//!
//! [`resolve`] turns one [`CellFacts`] snapshot plus the active palette
//! into a [`ResolvedCellStyle`]: content (icon or elided text), tooltip,
//! foreground, background(s), and selection outline. It is pure and total;
//! identical inputs always produce identical output, so renderings can be
//! snapshot-tested.
//!
//! Axis interactions, in the order they dominate:
//! - quick-search dimming applies to unselected cells only;
//! - selection is never masked by a group color;
//! - marked status is never masked by a group color;
//! - a selection in an inactive pane renders as unselected.

use crate::column::ColumnKind;
use crate::facts::{CellFacts, CellValue, IconRef};
use crate::status::classify;
use fcmd_style::{
    BackgroundSlot, FocusState, Palette, Rgba, SelectionState, Status,
};
use fcmd_text::{MeasureWidth, fit_center};

/// The resolved presentation of one cell for one paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCellStyle {
    /// Elided text, or the icon reference for the icon column.
    pub content: CellValue,
    /// The full text, present only when elision occurred.
    pub tooltip: Option<String>,
    /// Text color; `None` for the icon column.
    pub foreground: Option<Rgba>,
    /// Primary background.
    pub background: Rgba,
    /// Secondary background of the two-tone selection rendering.
    pub secondary_background: Option<Rgba>,
    /// Selection outline; present only when the cell renders selected.
    pub outline: Option<Rgba>,
}

/// Resolve one cell.
///
/// `measure` is the host's font metrics for the table font; text columns
/// use it to fit their value into `facts.available_width`.
#[must_use]
pub fn resolve<M: MeasureWidth + ?Sized>(
    facts: &CellFacts,
    palette: &Palette,
    measure: &M,
) -> ResolvedCellStyle {
    let matched = facts.matched();
    let selection = facts.selection();
    let focus = facts.focus();
    let status = classify(facts);

    let (content, tooltip, foreground) = if facts.column == ColumnKind::Extension {
        (CellValue::Icon(resolve_icon(facts)), None, None)
    } else {
        let text = match &facts.value {
            CellValue::Text(text) => text.as_str(),
            CellValue::Icon(icon) => {
                // Caller bug; degrade this one cell instead of lying about
                // its content.
                tracing::debug!(
                    column = ?facts.column,
                    icon = icon.name(),
                    "icon value supplied for a text column, rendering empty"
                );
                ""
            }
        };
        let fitted = fit_center(text, facts.available_width, measure);
        let tooltip = fitted.elided.then(|| text.to_owned());
        let foreground = foreground_color(facts, palette, matched, selection, focus, status);
        (CellValue::Text(fitted.display), tooltip, Some(foreground))
    };

    let (background, secondary_background) =
        background_colors(facts, palette, matched, selection, focus);

    let outline =
        (selection == SelectionState::Selected).then(|| palette.outline(focus));

    ResolvedCellStyle {
        content,
        tooltip,
        foreground,
        background,
        secondary_background,
        outline,
    }
}

fn resolve_icon(facts: &CellFacts) -> IconRef {
    if facts.is_parent_entry {
        return IconRef::PARENT_FOLDER;
    }
    match &facts.value {
        CellValue::Icon(icon) => icon.clone(),
        CellValue::Text(text) => {
            tracing::debug!(
                text = %text,
                "text value supplied for the icon column, using fallback icon"
            );
            IconRef::MISSING
        }
    }
}

fn foreground_color(
    facts: &CellFacts,
    palette: &Palette,
    matched: bool,
    selection: SelectionState,
    focus: FocusState,
    status: Status,
) -> Rgba {
    // The dim gate keys on the raw selected flag: even a selection that
    // renders unselected (inactive pane) is never dimmed.
    if !matched && !facts.is_selected {
        return palette.unmatched_foreground;
    }

    // Group colors never override selection or the marked status.
    let group = if selection == SelectionState::Selected {
        None
    } else {
        facts.color_group
    };
    if let Some(id) = group
        && status != Status::Marked
    {
        if let Some(color) = palette.group_color(id) {
            return color;
        }
        tracing::debug!(group = id, "color group outside palette range");
    }

    palette.foreground(focus, selection, status)
}

fn background_colors(
    facts: &CellFacts,
    palette: &Palette,
    matched: bool,
    selection: SelectionState,
    focus: FocusState,
) -> (Rgba, Option<Rgba>) {
    if selection == SelectionState::Selected {
        return (
            palette.background(focus, BackgroundSlot::Selected),
            Some(palette.background(focus, BackgroundSlot::Secondary)),
        );
    }
    if matched {
        // Zebra striping pauses while the user is filtering, so the rows
        // under the quick search read as one flat block.
        let slot = if facts.table_has_focus && facts.quick_search_active {
            BackgroundSlot::Normal
        } else if facts.row_index % 2 == 0 {
            BackgroundSlot::Normal
        } else {
            BackgroundSlot::Alternate
        };
        return (palette.background(focus, slot), None);
    }
    (palette.unmatched_background, None)
}
