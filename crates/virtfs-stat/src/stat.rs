//! The normalized metadata record.
//!
//! [`Stat`] is built once, from a [`StatSource`] or from a key/value
//! mapping, and is read-only afterwards. Every field is optional; an unset
//! field is a normal answer, not an error.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::time::SystemTime;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attrs::with_stat_attrs;
use crate::builder::StatBuilder;
use crate::error::{StatError, StatResult};
use crate::file_type::FileType;
use crate::name::AttrName;
use crate::source::StatSource;
use crate::value::{AttrType, AttrValue};

macro_rules! define_stat {
    ($(
        $(#[$meta:meta])*
        $variant:ident $field:ident => $getter:ident : $ty:ty [$($alias:literal),*];
    )*) => {
        /// Normalized snapshot of one entry's metadata.
        ///
        /// Serializes as a map of the present attributes under their
        /// canonical names. Comparison operators look at `mtime` only; see the
        /// [`Ord`] impl.
        #[derive(Clone, Debug, Default)]
        pub struct Stat {
            $(
                $(#[$meta])*
                pub(crate) $field: Option<$ty>,
            )*
        }

        impl Stat {
            /// Capture every attribute the source provides.
            pub fn from_source<S: StatSource + ?Sized>(source: &S) -> Self {
                Self {
                    $( $field: source.$getter(), )*
                }
            }

            $(
                $(#[$meta])*
                pub fn $getter(&self) -> Option<<$ty as AttrType>::View<'_>> {
                    self.$field.as_ref().map(|v| <$ty as AttrType>::view(v))
                }
            )*

            /// Value of one attribute, or `None` if unset.
            pub fn attr(&self, name: AttrName) -> Option<AttrValue> {
                match name {
                    $( AttrName::$variant => self.$field.clone().map(AttrType::into_value), )*
                }
            }

            /// Returns true if no attribute is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            pub(crate) fn set(&mut self, name: AttrName, value: AttrValue) -> StatResult<()> {
                match name {
                    $(
                        AttrName::$variant => {
                            let v = <$ty as AttrType>::from_value(value).map_err(|found| {
                                StatError::type_mismatch(name, <$ty as AttrType>::KIND, &found)
                            })?;
                            self.$field = Some(v);
                        }
                    )*
                }
                Ok(())
            }
        }
    };
}

with_stat_attrs!(define_stat);

impl Stat {
    /// Start building a record attribute by attribute.
    pub fn builder() -> StatBuilder {
        StatBuilder::new()
    }

    /// Build a record from key/value pairs.
    ///
    /// Keys go through [`AttrName::parse`], so `directory?`, `directory` and
    /// `isDirectory` all fill the same field. Unrecognized keys and values
    /// that don't fit their field are skipped. When two keys name the same
    /// attribute the later one wins.
    pub fn from_map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: AsRef<str>,
    {
        let mut stat = Self::default();
        for (key, value) in entries {
            stat.absorb(key.as_ref(), value);
        }
        stat
    }

    /// Like [`Stat::from_map`], but rejects unknown keys and misfit values.
    pub fn try_from_map<I, K>(entries: I) -> StatResult<Self>
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: AsRef<str>,
    {
        let mut stat = Self::default();
        for (key, value) in entries {
            let name: AttrName = key.as_ref().parse()?;
            stat.set(name, value)?;
        }
        Ok(stat)
    }

    /// Parse a JSON object of attributes.
    pub fn from_json(json: &str) -> StatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a TOML table of attributes.
    pub fn from_toml(doc: &str) -> StatResult<Self> {
        Ok(toml::from_str(doc)?)
    }

    /// Value of an attribute by any accepted spelling of its name.
    pub fn get(&self, name: &str) -> Option<AttrValue> {
        AttrName::parse(name).and_then(|n| self.attr(n))
    }

    /// Present attributes, keyed by name.
    pub fn to_map(&self) -> BTreeMap<AttrName, AttrValue> {
        AttrName::ALL
            .iter()
            .filter_map(|&name| self.attr(name).map(|v| (name, v)))
            .collect()
    }

    fn absorb(&mut self, key: &str, value: AttrValue) {
        let Some(name) = AttrName::parse(key) else {
            tracing::trace!(key, "ignoring unrecognized stat attribute");
            return;
        };
        if let Err(e) = self.set(name, value) {
            tracing::debug!(key, "ignoring stat attribute: {}", e);
        }
    }
}

/// Records are ordered by modification time alone.
///
/// An unset `mtime` sorts before every set one, and two unset values tie.
impl Ord for Stat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.mtime.cmp(&other.mtime)
    }
}

impl PartialOrd for Stat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Two records are equal when their modification times are; no other
/// field is compared. Use [`Stat::to_map`] to compare contents.
impl PartialEq for Stat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Stat {}

/// Present attributes under their canonical names. Times use the
/// [`AttrValue`] epoch form, so they survive on either side of 1970.
impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attrs = self.to_map();
        let mut map = serializer.serialize_map(Some(attrs.len()))?;
        for (name, value) in &attrs {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

/// Either a value we can store or something to skip.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Known(AttrValue),
    Other(IgnoredAny),
}

struct StatVisitor;

impl<'de> Visitor<'de> for StatVisitor {
    type Value = Stat;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of stat attributes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Stat, A::Error> {
        let mut stat = Stat::default();
        while let Some((key, value)) = map.next_entry::<String, WireValue>()? {
            match value {
                WireValue::Known(value) => stat.absorb(&key, value),
                WireValue::Other(_) => {
                    tracing::debug!(key = %key, "ignoring stat attribute with unsupported value");
                }
            }
        }
        Ok(stat)
    }
}

/// Accepts any map; behaves like [`Stat::from_map`].
impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatVisitor)
    }
}
