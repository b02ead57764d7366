//! Builder for synthetic records.

use std::time::SystemTime;

use crate::attrs::with_stat_attrs;
use crate::file_type::FileType;
use crate::stat::Stat;

/// Builder for `Stat` — for in-memory backends and tests that have no
/// native source object.
///
/// One setter per attribute, named after the canonical attribute name.
/// Anything not set stays unset.
///
/// ```
/// # use virtfs_stat::*;
/// let stat = Stat::builder()
///     .size(1024)
///     .directory(false)
///     .file(true)
///     .ftype(FileType::File)
///     .build();
/// assert_eq!(stat.size(), Some(1024));
/// assert!(stat.uid().is_none());
/// ```
#[derive(Debug, Default)]
pub struct StatBuilder {
    stat: Stat,
}

macro_rules! define_builder {
    ($(
        $(#[$meta:meta])*
        $variant:ident $field:ident => $getter:ident : $ty:ty [$($alias:literal),*];
    )*) => {
        impl StatBuilder {
            $(
                $(#[$meta])*
                pub fn $field(mut self, value: $ty) -> Self {
                    self.stat.$field = Some(value);
                    self
                }
            )*
        }
    };
}

with_stat_attrs!(define_builder);

impl StatBuilder {
    /// Start with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the builder and return the record.
    pub fn build(self) -> Stat {
        self.stat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        assert!(StatBuilder::new().build().is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let now = SystemTime::now();
        let stat = StatBuilder::new()
            .mtime(now)
            .mode(0o100644)
            .uid(1000)
            .gid(1000)
            .nlink(1)
            .readable(true)
            .inspect("notes.txt".into())
            .build();

        assert_eq!(stat.mtime(), Some(now));
        assert_eq!(stat.mode(), Some(0o100644));
        assert_eq!(stat.uid(), Some(1000));
        assert_eq!(stat.nlink(), Some(1));
        assert_eq!(stat.is_readable(), Some(true));
        assert_eq!(stat.inspect(), Some("notes.txt"));
        assert!(stat.is_writable().is_none());
    }

    #[test]
    fn test_builder_last_set_wins() {
        let stat = StatBuilder::new().size(1).size(2).build();
        assert_eq!(stat.size(), Some(2));
    }

    #[test]
    fn test_builder_ftype() {
        let stat = StatBuilder::new()
            .ftype(FileType::from_mode(0o060660))
            .blockdev(true)
            .build();
        assert_eq!(stat.ftype(), Some(FileType::BlockSpecial));
        assert_eq!(stat.is_blockdev(), Some(true));
    }
}
