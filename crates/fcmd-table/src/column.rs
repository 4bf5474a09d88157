#![forbid(unsafe_code)]

//! Table columns and their fixed presentation properties.
//!
//! The ordinal mapping is persisted in user configuration (column order,
//! widths), so the discriminants here are frozen: new columns append, and
//! nothing is reordered.

/// Horizontal text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// The columns of the file table, in persisted ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColumnKind {
    /// The icon column (file-kind icon; renders no text).
    Extension = 0,
    /// File name.
    Name = 1,
    /// File size.
    Size = 2,
    /// Modification date.
    Date = 3,
    /// Permission string.
    Permissions = 4,
    /// Owning user.
    Owner = 5,
    /// Owning group.
    Group = 6,
}

impl ColumnKind {
    /// Number of columns.
    pub const COUNT: usize = 7;

    /// All columns in ordinal order.
    pub const ALL: [ColumnKind; ColumnKind::COUNT] = [
        ColumnKind::Extension,
        ColumnKind::Name,
        ColumnKind::Size,
        ColumnKind::Date,
        ColumnKind::Permissions,
        ColumnKind::Owner,
        ColumnKind::Group,
    ];

    /// The persisted ordinal.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Ordinal for array indexing.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a persisted ordinal back to a column, if in range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Extension),
            1 => Some(Self::Name),
            2 => Some(Self::Size),
            3 => Some(Self::Date),
            4 => Some(Self::Permissions),
            5 => Some(Self::Owner),
            6 => Some(Self::Group),
            _ => None,
        }
    }

    /// The fixed alignment of this column's cells.
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::Extension => Alignment::Center,
            Self::Size | Self::Date => Alignment::Right,
            Self::Name | Self::Permissions | Self::Owner | Self::Group => Alignment::Left,
        }
    }

    /// Whether the column renders text (the icon column does not).
    #[inline]
    #[must_use]
    pub const fn renders_text(self) -> bool {
        !matches!(self, Self::Extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_frozen() {
        assert_eq!(ColumnKind::Extension.as_u8(), 0);
        assert_eq!(ColumnKind::Name.as_u8(), 1);
        assert_eq!(ColumnKind::Size.as_u8(), 2);
        assert_eq!(ColumnKind::Date.as_u8(), 3);
        assert_eq!(ColumnKind::Permissions.as_u8(), 4);
        assert_eq!(ColumnKind::Owner.as_u8(), 5);
        assert_eq!(ColumnKind::Group.as_u8(), 6);
    }

    #[test]
    fn from_u8_round_trips() {
        for column in ColumnKind::ALL {
            assert_eq!(ColumnKind::from_u8(column.as_u8()), Some(column));
        }
        assert_eq!(ColumnKind::from_u8(7), None);
        assert_eq!(ColumnKind::from_u8(255), None);
    }

    #[test]
    fn all_is_in_ordinal_order() {
        for (i, column) in ColumnKind::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn alignment_map() {
        assert_eq!(ColumnKind::Extension.alignment(), Alignment::Center);
        assert_eq!(ColumnKind::Name.alignment(), Alignment::Left);
        assert_eq!(ColumnKind::Size.alignment(), Alignment::Right);
        assert_eq!(ColumnKind::Date.alignment(), Alignment::Right);
        assert_eq!(ColumnKind::Permissions.alignment(), Alignment::Left);
        assert_eq!(ColumnKind::Owner.alignment(), Alignment::Left);
        assert_eq!(ColumnKind::Group.alignment(), Alignment::Left);
    }

    #[test]
    fn only_extension_skips_text() {
        for column in ColumnKind::ALL {
            assert_eq!(
                column.renders_text(),
                column != ColumnKind::Extension,
            );
        }
    }
}
