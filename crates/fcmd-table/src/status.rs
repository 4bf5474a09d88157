#![forbid(unsafe_code)]

//! Status classification.
//!
//! Every cell gets exactly one status category, chosen by an ordered rule
//! table evaluated first-match-wins. The order is part of the rendering
//! contract: a marked symlink renders as marked, a hidden directory as
//! hidden.

use crate::facts::CellFacts;
use fcmd_style::Status;

type Predicate = fn(&CellFacts) -> bool;

/// Classification rules in priority order.
const RULES: [(Predicate, Status); 6] = [
    (|facts| facts.is_parent_entry, Status::Folder),
    (|facts| facts.is_marked, Status::Marked),
    (|facts| facts.file.is_symlink, Status::Symlink),
    (|facts| facts.file.is_hidden, Status::HiddenFile),
    (|facts| facts.file.is_directory, Status::Folder),
    (|facts| facts.file.is_browsable_archive, Status::Archive),
];

/// Classify a cell into its single status category.
#[must_use]
pub fn classify(facts: &CellFacts) -> Status {
    RULES
        .iter()
        .find_map(|(applies, status)| applies(facts).then_some(*status))
        .unwrap_or(Status::PlainFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnKind;
    use crate::facts::FileFlags;

    fn facts() -> CellFacts {
        CellFacts::text(1, ColumnKind::Name, "file", 100)
    }

    const ALL_FLAGS: FileFlags = FileFlags {
        is_symlink: true,
        is_hidden: true,
        is_directory: true,
        is_browsable_archive: true,
    };

    #[test]
    fn plain_file_is_the_default() {
        assert_eq!(classify(&facts()), Status::PlainFile);
    }

    #[test]
    fn parent_entry_beats_everything() {
        let f = facts().parent_entry(true).marked(true).flags(ALL_FLAGS);
        assert_eq!(classify(&f), Status::Folder);
    }

    #[test]
    fn marked_beats_file_kind() {
        let f = facts().marked(true).flags(ALL_FLAGS);
        assert_eq!(classify(&f), Status::Marked);
    }

    #[test]
    fn symlink_beats_hidden_and_directory() {
        let f = facts().flags(FileFlags {
            is_symlink: true,
            is_hidden: true,
            is_directory: true,
            is_browsable_archive: false,
        });
        assert_eq!(classify(&f), Status::Symlink);
    }

    #[test]
    fn hidden_beats_directory() {
        let f = facts().flags(FileFlags {
            is_hidden: true,
            is_directory: true,
            ..FileFlags::default()
        });
        assert_eq!(classify(&f), Status::HiddenFile);
    }

    #[test]
    fn directory_beats_archive() {
        let f = facts().flags(FileFlags {
            is_directory: true,
            is_browsable_archive: true,
            ..FileFlags::default()
        });
        assert_eq!(classify(&f), Status::Folder);
    }

    #[test]
    fn archive_when_only_browsable() {
        let f = facts().flags(FileFlags {
            is_browsable_archive: true,
            ..FileFlags::default()
        });
        assert_eq!(classify(&f), Status::Archive);
    }

    #[test]
    fn single_flags_map_directly() {
        let symlink = facts().flags(FileFlags {
            is_symlink: true,
            ..FileFlags::default()
        });
        assert_eq!(classify(&symlink), Status::Symlink);

        let hidden = facts().flags(FileFlags {
            is_hidden: true,
            ..FileFlags::default()
        });
        assert_eq!(classify(&hidden), Status::HiddenFile);

        let dir = facts().flags(FileFlags {
            is_directory: true,
            ..FileFlags::default()
        });
        assert_eq!(classify(&dir), Status::Folder);
    }
}
