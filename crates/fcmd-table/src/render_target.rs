#![forbid(unsafe_code)]

//! Per-column render targets and the renderer that owns them.
//!
//! The host table stamps every cell from one reusable presentation object
//! per column. A [`CellTarget`] is created once per column at renderer
//! construction with its fixed alignment and the shared table font; each
//! paint only overwrites its content fields, reusing string capacity, so
//! steady-state painting allocates nothing for the targets themselves.
//!
//! [`FileTableRenderer`] wires the targets to the theme store: it holds a
//! subscription for its whole lifetime (deregistered on drop), forwards
//! color changes to the host as a repaint request, and re-applies a changed
//! table font to every text target at the start of the next paint pass -
//! before any cell is prepared, which on the single UI thread is
//! indistinguishable from re-applying inside the notification itself.

use crate::column::{Alignment, ColumnKind};
use crate::facts::{CellFacts, CellValue, IconRef};
use crate::resolver::{ResolvedCellStyle, resolve};
use fcmd_style::{FontId, FontSpec, Palette, Rgba, ThemeEvent, ThemeStore, ThemeSubscription};
use fcmd_text::MeasureWidth;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reusable presentation object for one column.
///
/// Alignment and font are configuration; the rest is overwritten on every
/// paint from a [`ResolvedCellStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTarget {
    alignment: Alignment,
    font: Option<FontSpec>,
    text: String,
    icon: Option<IconRef>,
    tooltip: Option<String>,
    foreground: Option<Rgba>,
    background: Rgba,
    secondary_background: Option<Rgba>,
    outline: Option<Rgba>,
}

impl CellTarget {
    fn new(column: ColumnKind, font: &FontSpec) -> Self {
        Self {
            alignment: column.alignment(),
            font: column.renders_text().then(|| font.clone()),
            text: String::new(),
            icon: None,
            tooltip: None,
            foreground: None,
            background: Rgba::TRANSPARENT,
            secondary_background: None,
            outline: None,
        }
    }

    /// Overwrite the content fields from a resolved style.
    pub fn apply(&mut self, style: &ResolvedCellStyle) {
        match &style.content {
            CellValue::Text(text) => {
                self.text.clone_from(text);
                self.icon = None;
            }
            CellValue::Icon(icon) => {
                self.text.clear();
                self.icon = Some(icon.clone());
            }
        }
        self.tooltip.clone_from(&style.tooltip);
        self.foreground = style.foreground;
        self.background = style.background;
        self.secondary_background = style.secondary_background;
        self.outline = style.outline;
    }

    /// The column's fixed alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The font to render with; `None` for the icon column.
    #[must_use]
    pub fn font(&self) -> Option<&FontSpec> {
        self.font.as_ref()
    }

    /// The text to paint (empty for the icon column).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The icon to paint, if this is the icon column.
    #[must_use]
    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    /// The tooltip, present only when the text was elided.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// The text color, if the column renders text.
    #[must_use]
    pub fn foreground(&self) -> Option<Rgba> {
        self.foreground
    }

    /// The primary background.
    #[must_use]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// The secondary background of a selected cell.
    #[must_use]
    pub fn secondary_background(&self) -> Option<Rgba> {
        self.secondary_background
    }

    /// The selection outline, if any.
    #[must_use]
    pub fn outline(&self) -> Option<Rgba> {
        self.outline
    }
}

/// Owns the per-column targets and the theme subscription.
pub struct FileTableRenderer {
    targets: [CellTarget; ColumnKind::COUNT],
    font_dirty: Arc<AtomicBool>,
    _subscription: ThemeSubscription,
}

impl FileTableRenderer {
    /// Create a renderer against the given store.
    ///
    /// `request_repaint` is invoked (synchronously, from the notifying
    /// thread) whenever palette colors change; the host schedules a table
    /// repaint in response.
    #[must_use]
    pub fn new(store: &ThemeStore, request_repaint: impl Fn() + Send + Sync + 'static) -> Self {
        let font = store.palette().table_font.clone();
        let font_dirty = Arc::new(AtomicBool::new(false));
        let dirty = Arc::clone(&font_dirty);
        let subscription = store.subscribe(move |event| match *event {
            ThemeEvent::ColorsChanged => request_repaint(),
            ThemeEvent::FontChanged(FontId::FileTable) => dirty.store(true, Ordering::Relaxed),
            ThemeEvent::FontChanged(_) => {}
        });
        Self {
            targets: ColumnKind::ALL.map(|column| CellTarget::new(column, &font)),
            font_dirty,
            _subscription: subscription,
        }
    }

    /// Start a paint pass against the given palette snapshot.
    ///
    /// Re-applies the table font to the text targets if it changed since
    /// the last pass. The host must use the same snapshot for every cell
    /// of the pass.
    pub fn begin_paint(&mut self, palette: &Palette) {
        if self.font_dirty.swap(false, Ordering::Relaxed) {
            tracing::debug!("table font changed, reconfiguring cell targets");
            self.apply_table_font(&palette.table_font);
        }
    }

    /// Resolve one cell and stamp it into its column's target.
    pub fn prepare<M: MeasureWidth + ?Sized>(
        &mut self,
        facts: &CellFacts,
        palette: &Palette,
        measure: &M,
    ) -> &CellTarget {
        let style = resolve(facts, palette, measure);
        let target = &mut self.targets[facts.column.index()];
        target.apply(&style);
        target
    }

    /// The target for a column.
    #[must_use]
    pub fn target(&self, column: ColumnKind) -> &CellTarget {
        &self.targets[column.index()]
    }

    fn apply_table_font(&mut self, font: &FontSpec) {
        for target in &mut self.targets {
            // The icon column carries no font and stays that way.
            if target.font.is_some() {
                target.font = Some(font.clone());
            }
        }
    }
}

impl std::fmt::Debug for FileTableRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTableRenderer")
            .field("font_dirty", &self.font_dirty.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcmd_style::palettes;
    use fcmd_text::MonospaceMeasure;
    use std::sync::atomic::AtomicUsize;

    const PX: MonospaceMeasure = MonospaceMeasure::new(1);

    fn renderer_with_counter(store: &ThemeStore) -> (FileTableRenderer, Arc<AtomicUsize>) {
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let renderer = FileTableRenderer::new(store, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        (renderer, repaints)
    }

    #[test]
    fn targets_have_fixed_alignment_and_font() {
        let store = ThemeStore::new(palettes::dark());
        let (renderer, _) = renderer_with_counter(&store);
        for column in ColumnKind::ALL {
            let target = renderer.target(column);
            assert_eq!(target.alignment(), column.alignment());
            assert_eq!(target.font().is_some(), column.renders_text());
        }
        assert_eq!(
            renderer.target(ColumnKind::Name).font(),
            Some(&store.palette().table_font),
        );
    }

    #[test]
    fn prepare_stamps_the_column_target() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, _) = renderer_with_counter(&store);
        let palette = store.palette();

        let facts = CellFacts::text(0, ColumnKind::Name, "readme.md", 100);
        let target = renderer.prepare(&facts, &palette, &PX);
        assert_eq!(target.text(), "readme.md");
        assert!(target.foreground().is_some());
        assert_eq!(target.icon(), None);

        // The same target is rewritten by the next row.
        let facts = CellFacts::text(1, ColumnKind::Name, "notes.txt", 100);
        renderer.prepare(&facts, &palette, &PX);
        assert_eq!(renderer.target(ColumnKind::Name).text(), "notes.txt");
    }

    #[test]
    fn prepare_stamps_icon_cells() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, _) = renderer_with_counter(&store);
        let palette = store.palette();

        let facts = CellFacts::icon(0, IconRef::new("file-text"));
        let target = renderer.prepare(&facts, &palette, &PX);
        assert_eq!(target.icon(), Some(&IconRef::new("file-text")));
        assert_eq!(target.text(), "");
        assert_eq!(target.foreground(), None);
    }

    #[test]
    fn elided_cells_carry_tooltips_until_overwritten() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, _) = renderer_with_counter(&store);
        let palette = store.palette();

        let long = CellFacts::text(0, ColumnKind::Name, "a_long_file_name.txt", 10);
        renderer.prepare(&long, &palette, &PX);
        assert_eq!(
            renderer.target(ColumnKind::Name).tooltip(),
            Some("a_long_file_name.txt"),
        );

        let short = CellFacts::text(1, ColumnKind::Name, "a.txt", 100);
        renderer.prepare(&short, &palette, &PX);
        assert_eq!(renderer.target(ColumnKind::Name).tooltip(), None);
    }

    #[test]
    fn color_change_requests_repaint() {
        let store = ThemeStore::new(palettes::dark());
        let (_renderer, repaints) = renderer_with_counter(&store);

        store.set_palette(palettes::light());
        assert_eq!(repaints.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn table_font_change_is_applied_at_next_paint() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, repaints) = renderer_with_counter(&store);

        let font = FontSpec::new("Monospace", 13);
        store.set_table_font(font.clone());
        // A bare font change repaints through the host's normal channels,
        // not through the color-change path.
        assert_eq!(repaints.load(Ordering::Relaxed), 0);

        let palette = store.palette();
        renderer.begin_paint(&palette);
        for column in ColumnKind::ALL {
            if column.renders_text() {
                assert_eq!(renderer.target(column).font(), Some(&font));
            } else {
                assert_eq!(renderer.target(column).font(), None);
            }
        }
    }

    #[test]
    fn unrelated_font_change_is_ignored() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, repaints) = renderer_with_counter(&store);
        let before = store.palette().table_font.clone();

        store.font_changed(FontId::Editor);
        let palette = store.palette();
        renderer.begin_paint(&palette);

        assert_eq!(repaints.load(Ordering::Relaxed), 0);
        assert_eq!(renderer.target(ColumnKind::Name).font(), Some(&before));
    }

    #[test]
    fn palette_change_with_font_reconfigures_targets() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, repaints) = renderer_with_counter(&store);

        let mut palette = palettes::light();
        palette.table_font = FontSpec::new("Inter", 11);
        store.set_palette(palette);
        assert_eq!(repaints.load(Ordering::Relaxed), 1);

        let snapshot = store.palette();
        renderer.begin_paint(&snapshot);
        assert_eq!(
            renderer.target(ColumnKind::Owner).font(),
            Some(&FontSpec::new("Inter", 11)),
        );
    }

    #[test]
    fn drop_deregisters_from_store() {
        let store = ThemeStore::new(palettes::dark());
        let (renderer, _) = renderer_with_counter(&store);
        assert_eq!(store.listener_count(), 1);
        drop(renderer);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn string_capacity_is_reused_across_paints() {
        let store = ThemeStore::new(palettes::dark());
        let (mut renderer, _) = renderer_with_counter(&store);
        let palette = store.palette();

        let long = CellFacts::text(0, ColumnKind::Name, "a_fairly_long_name.tar.gz", 200);
        renderer.prepare(&long, &palette, &PX);
        let capacity = renderer.target(ColumnKind::Name).text.capacity();

        let short = CellFacts::text(1, ColumnKind::Name, "a", 200);
        renderer.prepare(&short, &palette, &PX);
        assert!(renderer.target(ColumnKind::Name).text.capacity() >= capacity);
    }
}
