//! Attribute names and name normalization.
//!
//! Callers spell attribute names several ways: POSIX style (`mtime`), with a
//! predicate suffix (`directory?`), camelCase (`modifyTime`) or kebab-case
//! (`owner-uid`). All of them are normalized to one snake_case key before
//! lookup, so every spelling lands on the same [`AttrName`].

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::attrs::with_stat_attrs;
use crate::error::StatError;
use crate::file_type::FileType;
use crate::value::AttrType;

macro_rules! define_names {
    ($(
        $(#[$meta:meta])*
        $variant:ident $field:ident => $getter:ident : $ty:ty [$($alias:literal),*];
    )*) => {
        /// A recognized stat attribute.
        ///
        /// Ordered by position in the vocabulary, which is also the order of
        /// [`AttrName::ALL`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AttrName {
            $( $(#[$meta])* $variant, )*
        }

        impl AttrName {
            /// Every recognized attribute, in vocabulary order.
            pub const ALL: &'static [AttrName] = &[ $( AttrName::$variant, )* ];

            /// Canonical (stored) name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( AttrName::$variant => stringify!($field), )*
                }
            }

            /// Kind of value the attribute holds, e.g. `"bool"` or `"time"`.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( AttrName::$variant => <$ty as AttrType>::KIND, )*
                }
            }

            /// Look up an already-normalized key.
            fn lookup(key: &str) -> Option<Self> {
                $(
                    if key == stringify!($field) $( || key == $alias )* {
                        return Some(AttrName::$variant);
                    }
                )*
                None
            }
        }
    };
}

with_stat_attrs!(define_names);

impl AttrName {
    /// Resolve any accepted spelling to an attribute.
    ///
    /// Returns `None` for names outside the vocabulary.
    pub fn parse(name: &str) -> Option<Self> {
        Self::lookup(&normalize(name))
    }
}

impl FromStr for AttrName {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StatError::unknown_attribute(s))
    }
}

impl AsRef<str> for AttrName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize an attribute name to its lookup key.
///
/// Trims whitespace, strips one trailing `?`, and folds camelCase and
/// kebab-case into snake_case. Runs of capitals stay together, so `UID`
/// becomes `uid` and `ownerUID` becomes `owner_uid`.
pub fn normalize(name: &str) -> String {
    let name = name.trim();
    let name = name.strip_suffix('?').unwrap_or(name);

    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        match ch {
            '-' | ' ' => {
                out.push('_');
                prev_lower = false;
            }
            c if c.is_ascii_uppercase() => {
                if prev_lower {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                prev_lower = false;
            }
            c => {
                out.push(c);
                prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("directory?"), "directory");
        assert_eq!(normalize("modifyTime"), "modify_time");
        assert_eq!(normalize("owner-uid"), "owner_uid");
        assert_eq!(normalize("isDirectory?"), "is_directory");
        assert_eq!(normalize("ownerUID"), "owner_uid");
        assert_eq!(normalize("  size  "), "size");
        assert_eq!(normalize("dev_major"), "dev_major");
    }

    #[test]
    fn test_suffix_stripped_once() {
        assert_eq!(normalize("zero??"), "zero?");
        assert_eq!(AttrName::parse("zero??"), None);
    }

    #[test]
    fn test_canonical_names_roundtrip() {
        for name in AttrName::ALL {
            assert_eq!(AttrName::parse(name.as_str()), Some(*name), "{name}");
        }
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(AttrName::ALL.len(), 40);
    }

    #[test]
    fn test_kind() {
        assert_eq!(AttrName::Directory.kind(), "bool");
        assert_eq!(AttrName::Mtime.kind(), "time");
        assert_eq!(AttrName::Ftype.kind(), "file type");
        let flags = AttrName::ALL.iter().filter(|n| n.kind() == "bool").count();
        assert_eq!(flags, 21);
    }

    #[test]
    fn test_predicate_suffix() {
        assert_eq!(AttrName::parse("directory?"), Some(AttrName::Directory));
        assert_eq!(AttrName::parse("directory"), Some(AttrName::Directory));
        assert_eq!(AttrName::parse("zero?"), Some(AttrName::Zero));
        assert_eq!(AttrName::parse("readable?"), Some(AttrName::Readable));
    }

    #[test]
    fn test_size_suffix_shares_field() {
        assert_eq!(AttrName::parse("size?"), Some(AttrName::Size));
    }

    #[test]
    fn test_descriptive_aliases() {
        assert_eq!(AttrName::parse("modifyTime"), Some(AttrName::Mtime));
        assert_eq!(AttrName::parse("accessTime"), Some(AttrName::Atime));
        assert_eq!(AttrName::parse("owner-uid"), Some(AttrName::Uid));
        assert_eq!(AttrName::parse("isBlockDevice"), Some(AttrName::Blockdev));
        assert_eq!(AttrName::parse("isGroupOwned"), Some(AttrName::Grpowned));
        assert_eq!(AttrName::parse("isZeroSize"), Some(AttrName::Zero));
        assert_eq!(AttrName::parse("inspectString"), Some(AttrName::Inspect));
        assert_eq!(AttrName::parse("fileType"), Some(AttrName::Ftype));
        assert_eq!(AttrName::parse("blockCount"), Some(AttrName::Blocks));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(AttrName::parse("colour"), None);
        let err = "colour".parse::<AttrName>().unwrap_err();
        assert!(matches!(err, StatError::UnknownAttribute(ref n) if n == "colour"));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(AttrName::WorldReadable.to_string(), "world_readable");
        assert_eq!("isWorldReadable?".parse::<AttrName>().unwrap().to_string(), "world_readable");
    }
}
