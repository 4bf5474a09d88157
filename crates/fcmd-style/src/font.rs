#![forbid(unsafe_code)]

//! Font configuration and font identity.
//!
//! The table renders all text columns with one shared font. [`FontSpec`]
//! describes that font; [`FontId`] names which of the application's font
//! slots a change notification refers to, so listeners can ignore changes
//! to fonts they do not render with.

use bitflags::bitflags;
use std::borrow::Cow;

bitflags! {
    /// Style flags applied on top of a font family.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontAttrs: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

/// Identity of a configurable font slot.
///
/// Change notifications carry the slot so listeners can tell a table-font
/// change apart from unrelated font changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// The file table's shared cell font.
    FileTable,
    /// The location/path bar font.
    LocationBar,
    /// The status bar font.
    StatusBar,
    /// The built-in text viewer/editor font.
    Editor,
}

/// A concrete font configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    /// Font family name as the host toolkit knows it.
    pub family: Cow<'static, str>,
    /// Point size.
    pub size_pt: u16,
    /// Style flags.
    pub attrs: FontAttrs,
}

impl FontSpec {
    /// Create a plain font of the given family and size.
    #[must_use]
    pub fn new(family: impl Into<Cow<'static, str>>, size_pt: u16) -> Self {
        Self {
            family: family.into(),
            size_pt,
            attrs: FontAttrs::empty(),
        }
    }

    /// Add the bold flag.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= FontAttrs::BOLD;
        self
    }

    /// Add the italic flag.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs |= FontAttrs::ITALIC;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Sans", 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_plain() {
        let font = FontSpec::new("Monospace", 11);
        assert_eq!(font.family, "Monospace");
        assert_eq!(font.size_pt, 11);
        assert!(font.attrs.is_empty());
    }

    #[test]
    fn builder_flags_accumulate() {
        let font = FontSpec::new("Sans", 12).bold().italic();
        assert!(font.attrs.contains(FontAttrs::BOLD | FontAttrs::ITALIC));
        assert!(!font.attrs.contains(FontAttrs::UNDERLINE));
    }

    #[test]
    fn equality_includes_attrs() {
        let plain = FontSpec::new("Sans", 12);
        let bold = FontSpec::new("Sans", 12).bold();
        assert_ne!(plain, bold);
    }

    #[test]
    fn font_ids_are_distinct() {
        assert_ne!(FontId::FileTable, FontId::Editor);
        assert_ne!(FontId::LocationBar, FontId::StatusBar);
    }
}
