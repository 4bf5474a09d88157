#![forbid(unsafe_code)]

//! The palette: every color and font the file table renders against.
//!
//! A [`Palette`] is an immutable snapshot. Theme changes replace the whole
//! snapshot through the store; nothing mutates a palette in place. Cell
//! styling indexes the foreground table by (focus, selection, status) and
//! the background table by (focus, slot), so lookups are plain array
//! indexing with no branching.
//!
//! # Example
//! ```
//! use fcmd_style::{palettes, FocusState, SelectionState, Status};
//!
//! let palette = palettes::dark();
//! let folder = palette.foreground(
//!     FocusState::Active,
//!     SelectionState::Normal,
//!     Status::Folder,
//! );
//! let plain = palette.foreground(
//!     FocusState::Active,
//!     SelectionState::Normal,
//!     Status::PlainFile,
//! );
//! assert_ne!(folder, plain);
//! ```

use crate::color::Rgba;
use crate::font::FontSpec;

/// Whether the table holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FocusState {
    /// The table does not hold keyboard focus.
    Inactive = 0,
    /// The table holds keyboard focus.
    Active = 1,
}

impl FocusState {
    /// Number of focus states.
    pub const COUNT: usize = 2;

    /// Ordinal for array indexing.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Whether the cell renders as selected.
///
/// A selected row in an inactive pane resolves to `Normal` so only the
/// active pane ever looks hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SelectionState {
    /// Render as unselected.
    Normal = 0,
    /// Render as selected.
    Selected = 1,
}

impl SelectionState {
    /// Number of selection states.
    pub const COUNT: usize = 2;

    /// Ordinal for array indexing.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The single status category driving default color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// A regular file.
    PlainFile = 0,
    /// A hidden file.
    HiddenFile = 1,
    /// A directory, or the synthetic parent ("..") entry.
    Folder = 2,
    /// A browsable archive.
    Archive = 3,
    /// A symbolic link.
    Symlink = 4,
    /// A file the user has marked.
    Marked = 5,
}

impl Status {
    /// Number of status categories.
    pub const COUNT: usize = 6;

    /// All categories in ordinal order.
    pub const ALL: [Status; Status::COUNT] = [
        Status::PlainFile,
        Status::HiddenFile,
        Status::Folder,
        Status::Archive,
        Status::Symlink,
        Status::Marked,
    ];

    /// Ordinal for array indexing.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Background color slots per focus state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BackgroundSlot {
    /// Default row background.
    Normal = 0,
    /// Selected row background.
    Selected = 1,
    /// Alternate (zebra) row background.
    Alternate = 2,
    /// Secondary accent of the two-tone selection background.
    Secondary = 3,
}

impl BackgroundSlot {
    /// Number of background slots.
    pub const COUNT: usize = 4;

    /// Ordinal for array indexing.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Immutable snapshot of all table colors and the table font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Foreground colors indexed by `[focus][selection][status]`.
    pub foreground: [[[Rgba; Status::COUNT]; SelectionState::COUNT]; FocusState::COUNT],
    /// Background colors indexed by `[focus][slot]`.
    pub background: [[Rgba; BackgroundSlot::COUNT]; FocusState::COUNT],
    /// Per-group override colors, indexed by group id.
    pub group_colors: Vec<Rgba>,
    /// Foreground for rows dimmed out by an active quick search.
    pub unmatched_foreground: Rgba,
    /// Background for rows dimmed out by an active quick search.
    pub unmatched_background: Rgba,
    /// Selection outline when the table holds focus.
    pub active_outline: Rgba,
    /// Selection outline when the table lacks focus.
    pub inactive_outline: Rgba,
    /// The shared cell font for all text columns.
    pub table_font: FontSpec,
}

impl Palette {
    /// Start building a palette from the default dark preset.
    #[must_use]
    pub fn builder() -> PaletteBuilder {
        PaletteBuilder::new()
    }

    /// Look up a foreground color.
    #[inline]
    #[must_use]
    pub fn foreground(&self, focus: FocusState, selection: SelectionState, status: Status) -> Rgba {
        self.foreground[focus.index()][selection.index()][status.index()]
    }

    /// Look up a background color.
    #[inline]
    #[must_use]
    pub fn background(&self, focus: FocusState, slot: BackgroundSlot) -> Rgba {
        self.background[focus.index()][slot.index()]
    }

    /// Look up a group override color, if the id is in range.
    #[inline]
    #[must_use]
    pub fn group_color(&self, group: usize) -> Option<Rgba> {
        self.group_colors.get(group).copied()
    }

    /// The selection outline for the given focus state.
    #[inline]
    #[must_use]
    pub fn outline(&self, focus: FocusState) -> Rgba {
        match focus {
            FocusState::Active => self.active_outline,
            FocusState::Inactive => self.inactive_outline,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        palettes::dark()
    }
}

/// Builder for customized palettes.
///
/// Starts from the dark preset; every slot can be overridden.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    palette: Palette,
}

impl PaletteBuilder {
    /// Create a builder seeded with the dark preset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: palettes::dark(),
        }
    }

    /// Start from an existing palette.
    #[must_use]
    pub fn from_palette(palette: Palette) -> Self {
        Self { palette }
    }

    /// Override one foreground slot.
    #[must_use]
    pub fn foreground(
        mut self,
        focus: FocusState,
        selection: SelectionState,
        status: Status,
        color: Rgba,
    ) -> Self {
        self.palette.foreground[focus.index()][selection.index()][status.index()] = color;
        self
    }

    /// Override one background slot.
    #[must_use]
    pub fn background(mut self, focus: FocusState, slot: BackgroundSlot, color: Rgba) -> Self {
        self.palette.background[focus.index()][slot.index()] = color;
        self
    }

    /// Replace the group override colors.
    #[must_use]
    pub fn group_colors(mut self, colors: impl Into<Vec<Rgba>>) -> Self {
        self.palette.group_colors = colors.into();
        self
    }

    /// Set the quick-search dim pair.
    #[must_use]
    pub fn unmatched(mut self, foreground: Rgba, background: Rgba) -> Self {
        self.palette.unmatched_foreground = foreground;
        self.palette.unmatched_background = background;
        self
    }

    /// Set the selection outline pair.
    #[must_use]
    pub fn outlines(mut self, active: Rgba, inactive: Rgba) -> Self {
        self.palette.active_outline = active;
        self.palette.inactive_outline = inactive;
        self
    }

    /// Set the table font.
    #[must_use]
    pub fn table_font(mut self, font: FontSpec) -> Self {
        self.palette.table_font = font;
        self
    }

    /// Build the palette.
    #[must_use]
    pub fn build(self) -> Palette {
        self.palette
    }
}

impl Default for PaletteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in palette presets.
pub mod palettes {
    use super::*;

    /// Pick a preset for the current environment.
    ///
    /// Uses the `COLORFGBG` heuristic; defaults to dark.
    #[must_use]
    pub fn detect() -> Palette {
        if detect_dark_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()) {
            dark()
        } else {
            light()
        }
    }

    pub(crate) fn detect_dark_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
        // COLORFGBG is "fg;bg"; bg 7 or 15 means a light background.
        if let Some(value) = colorfgbg
            && let Some(bg_part) = value.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
        {
            return bg != 7 && bg != 15;
        }
        true
    }

    /// Dark desktop preset.
    #[must_use]
    pub fn dark() -> Palette {
        let normal = [
            Rgba::rgb(230, 237, 243), // plain file
            Rgba::rgb(139, 148, 158), // hidden file
            Rgba::rgb(88, 166, 255),  // folder
            Rgba::rgb(210, 153, 34),  // archive
            Rgba::rgb(57, 197, 207),  // symlink
            Rgba::rgb(248, 81, 73),   // marked
        ];
        let selected = [
            Rgba::WHITE,
            Rgba::rgb(208, 215, 222),
            Rgba::WHITE,
            Rgba::rgb(255, 223, 141),
            Rgba::rgb(178, 240, 245),
            Rgba::rgb(255, 200, 195),
        ];
        // Inactive panes reuse the same text colors; only backgrounds and
        // outlines distinguish the panes.
        Palette {
            foreground: [[normal, selected], [normal, selected]],
            background: [
                [
                    Rgba::rgb(22, 27, 34),  // normal
                    Rgba::rgb(48, 54, 61),  // selected (inactive pane)
                    Rgba::rgb(28, 33, 40),  // alternate
                    Rgba::rgb(40, 46, 53),  // secondary
                ],
                [
                    Rgba::rgb(22, 27, 34),  // normal
                    Rgba::rgb(31, 111, 235), // selected (active pane)
                    Rgba::rgb(28, 33, 40),  // alternate
                    Rgba::rgb(25, 91, 194), // secondary
                ],
            ],
            group_colors: vec![
                Rgba::rgb(63, 185, 80),
                Rgba::rgb(219, 109, 40),
                Rgba::rgb(163, 113, 247),
                Rgba::rgb(240, 136, 62),
                Rgba::rgb(51, 178, 170),
                Rgba::rgb(236, 117, 169),
                Rgba::rgb(106, 176, 76),
                Rgba::rgb(196, 160, 0),
            ],
            unmatched_foreground: Rgba::rgb(110, 118, 129),
            unmatched_background: Rgba::rgb(13, 17, 23),
            active_outline: Rgba::rgb(88, 166, 255),
            inactive_outline: Rgba::rgb(48, 54, 61),
            table_font: FontSpec::new("Sans", 12),
        }
    }

    /// Light desktop preset.
    #[must_use]
    pub fn light() -> Palette {
        let normal = [
            Rgba::rgb(31, 35, 40),   // plain file
            Rgba::rgb(101, 109, 118), // hidden file
            Rgba::rgb(9, 105, 218),  // folder
            Rgba::rgb(154, 103, 0),  // archive
            Rgba::rgb(27, 124, 131), // symlink
            Rgba::rgb(207, 34, 46),  // marked
        ];
        let selected = [
            Rgba::WHITE,
            Rgba::rgb(234, 238, 242),
            Rgba::WHITE,
            Rgba::rgb(255, 236, 184),
            Rgba::rgb(197, 240, 244),
            Rgba::rgb(255, 215, 210),
        ];
        Palette {
            foreground: [[normal, selected], [normal, selected]],
            background: [
                [
                    Rgba::WHITE,
                    Rgba::rgb(175, 184, 193), // selected (inactive pane)
                    Rgba::rgb(246, 248, 250), // alternate
                    Rgba::rgb(208, 215, 222), // secondary
                ],
                [
                    Rgba::WHITE,
                    Rgba::rgb(9, 105, 218),  // selected (active pane)
                    Rgba::rgb(246, 248, 250), // alternate
                    Rgba::rgb(5, 80, 174),   // secondary
                ],
            ],
            group_colors: vec![
                Rgba::rgb(26, 127, 55),
                Rgba::rgb(188, 76, 0),
                Rgba::rgb(130, 80, 223),
                Rgba::rgb(215, 97, 0),
                Rgba::rgb(11, 125, 119),
                Rgba::rgb(191, 57, 137),
                Rgba::rgb(74, 124, 42),
                Rgba::rgb(148, 120, 0),
            ],
            unmatched_foreground: Rgba::rgb(140, 149, 159),
            unmatched_background: Rgba::rgb(246, 248, 250),
            active_outline: Rgba::rgb(9, 105, 218),
            inactive_outline: Rgba::rgb(208, 215, 222),
            table_font: FontSpec::new("Sans", 12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(Status::PlainFile.index(), 0);
        assert_eq!(Status::HiddenFile.index(), 1);
        assert_eq!(Status::Folder.index(), 2);
        assert_eq!(Status::Archive.index(), 3);
        assert_eq!(Status::Symlink.index(), 4);
        assert_eq!(Status::Marked.index(), 5);
        assert_eq!(BackgroundSlot::Normal.index(), 0);
        assert_eq!(BackgroundSlot::Selected.index(), 1);
        assert_eq!(BackgroundSlot::Alternate.index(), 2);
        assert_eq!(BackgroundSlot::Secondary.index(), 3);
    }

    #[test]
    fn lookup_matches_raw_indexing() {
        let palette = palettes::dark();
        for focus in [FocusState::Inactive, FocusState::Active] {
            for selection in [SelectionState::Normal, SelectionState::Selected] {
                for status in Status::ALL {
                    assert_eq!(
                        palette.foreground(focus, selection, status),
                        palette.foreground[focus.index()][selection.index()][status.index()],
                    );
                }
            }
        }
    }

    #[test]
    fn group_color_bounds() {
        let palette = palettes::dark();
        assert!(palette.group_color(0).is_some());
        assert!(palette.group_color(palette.group_colors.len()).is_none());
    }

    #[test]
    fn outline_follows_focus() {
        let palette = palettes::dark();
        assert_eq!(palette.outline(FocusState::Active), palette.active_outline);
        assert_eq!(
            palette.outline(FocusState::Inactive),
            palette.inactive_outline
        );
    }

    #[test]
    fn dark_preset_has_dark_backgrounds() {
        let palette = palettes::dark();
        assert!(
            palette
                .background(FocusState::Active, BackgroundSlot::Normal)
                .is_dark()
        );
        assert!(palette.unmatched_background.is_dark());
    }

    #[test]
    fn light_preset_has_light_backgrounds() {
        let palette = palettes::light();
        assert!(
            !palette
                .background(FocusState::Active, BackgroundSlot::Normal)
                .is_dark()
        );
    }

    #[test]
    fn presets_distinguish_statuses() {
        for palette in [palettes::dark(), palettes::light()] {
            let folder =
                palette.foreground(FocusState::Active, SelectionState::Normal, Status::Folder);
            let marked =
                palette.foreground(FocusState::Active, SelectionState::Normal, Status::Marked);
            let plain =
                palette.foreground(FocusState::Active, SelectionState::Normal, Status::PlainFile);
            assert_ne!(folder, marked);
            assert_ne!(folder, plain);
            assert_ne!(marked, plain);
        }
    }

    #[test]
    fn active_selection_differs_from_inactive() {
        let palette = palettes::dark();
        assert_ne!(
            palette.background(FocusState::Active, BackgroundSlot::Selected),
            palette.background(FocusState::Inactive, BackgroundSlot::Selected),
        );
    }

    #[test]
    fn builder_overrides_single_slot() {
        let red = Rgba::rgb(255, 0, 0);
        let palette = Palette::builder()
            .foreground(
                FocusState::Active,
                SelectionState::Normal,
                Status::Folder,
                red,
            )
            .build();
        assert_eq!(
            palette.foreground(FocusState::Active, SelectionState::Normal, Status::Folder),
            red
        );
        // Everything else untouched.
        assert_eq!(
            palette.foreground(FocusState::Inactive, SelectionState::Normal, Status::Folder),
            palettes::dark().foreground(
                FocusState::Inactive,
                SelectionState::Normal,
                Status::Folder
            ),
        );
    }

    #[test]
    fn builder_from_palette_keeps_base() {
        let base = palettes::light();
        let built = PaletteBuilder::from_palette(base.clone()).build();
        assert_eq!(built, base);
    }

    #[test]
    fn builder_replaces_group_colors() {
        let palette = Palette::builder()
            .group_colors(vec![Rgba::BLACK])
            .build();
        assert_eq!(palette.group_colors.len(), 1);
        assert_eq!(palette.group_color(0), Some(Rgba::BLACK));
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Palette::default(), palettes::dark());
    }

    #[test]
    fn detect_dark_without_env() {
        assert!(palettes::detect_dark_from_colorfgbg(None));
    }

    #[test]
    fn detect_light_backgrounds() {
        assert!(!palettes::detect_dark_from_colorfgbg(Some("0;15")));
        assert!(!palettes::detect_dark_from_colorfgbg(Some("0;7")));
    }

    #[test]
    fn detect_dark_backgrounds() {
        assert!(palettes::detect_dark_from_colorfgbg(Some("15;0")));
        assert!(palettes::detect_dark_from_colorfgbg(Some("0;8")));
    }

    #[test]
    fn detect_tolerates_garbage() {
        assert!(palettes::detect_dark_from_colorfgbg(Some("")));
        assert!(palettes::detect_dark_from_colorfgbg(Some("0;abc")));
    }
}
