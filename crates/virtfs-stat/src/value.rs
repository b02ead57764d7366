//! Dynamic attribute values for the mapping construction path.
//!
//! [`AttrValue`] is what a mapping source hands over; [`AttrType`] says which
//! value shapes each field type can hold. Fitting a value into a field never
//! changes what it means: an unsigned field takes any non-negative integer
//! that fits, a time field takes a `SystemTime` or whole seconds relative to
//! the Unix epoch. Anything else is a mismatch.
//!
//! On the wire a time is signed whole seconds when it has no fractional
//! part, otherwise `{"secs": <i64>, "nanos": <u32>}` with `nanos` counting
//! forward from `secs`. Both forms reach before the epoch.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::file_type::FileType;

/// A single attribute value from a mapping source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    UInt(u64),
    Int(i64),
    Time(#[serde(with = "epoch")] SystemTime),
    Text(String),
}

impl AttrValue {
    /// Short name of the value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Bool(_) => "bool",
            AttrValue::UInt(_) => "unsigned integer",
            AttrValue::Int(_) => "integer",
            AttrValue::Time(_) => "time",
            AttrValue::Text(_) => "text",
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::UInt(v.into())
    }
}

impl From<u64> for AttrValue {
    fn from(v: u64) -> Self {
        AttrValue::UInt(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<SystemTime> for AttrValue {
    fn from(v: SystemTime) -> Self {
        AttrValue::Time(v)
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<FileType> for AttrValue {
    fn from(v: FileType) -> Self {
        AttrValue::Text(v.as_str().to_string())
    }
}

/// A type a stat field can hold.
///
/// `View` is what accessors hand out: the value itself for `Copy` types,
/// a borrow for owned ones.
pub trait AttrType: Clone + Sized {
    /// Name used in type-mismatch errors.
    const KIND: &'static str;

    type View<'a>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_>;

    /// Fit a mapping value into this type, handing it back on mismatch.
    fn from_value(value: AttrValue) -> Result<Self, AttrValue>;

    fn into_value(self) -> AttrValue;
}

impl AttrType for bool {
    const KIND: &'static str = "bool";
    type View<'a> = bool;

    fn view(&self) -> bool {
        *self
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match value {
            AttrValue::Bool(b) => Ok(b),
            other => Err(other),
        }
    }

    fn into_value(self) -> AttrValue {
        AttrValue::Bool(self)
    }
}

impl AttrType for u64 {
    const KIND: &'static str = "unsigned integer";
    type View<'a> = u64;

    fn view(&self) -> u64 {
        *self
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match value {
            AttrValue::UInt(n) => Ok(n),
            AttrValue::Int(n) => u64::try_from(n).map_err(|_| AttrValue::Int(n)),
            other => Err(other),
        }
    }

    fn into_value(self) -> AttrValue {
        AttrValue::UInt(self)
    }
}

impl AttrType for u32 {
    const KIND: &'static str = "32-bit unsigned integer";
    type View<'a> = u32;

    fn view(&self) -> u32 {
        *self
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match value {
            AttrValue::UInt(n) => u32::try_from(n).map_err(|_| AttrValue::UInt(n)),
            AttrValue::Int(n) => u32::try_from(n).map_err(|_| AttrValue::Int(n)),
            other => Err(other),
        }
    }

    fn into_value(self) -> AttrValue {
        AttrValue::UInt(self.into())
    }
}

impl AttrType for SystemTime {
    const KIND: &'static str = "time";
    type View<'a> = SystemTime;

    fn view(&self) -> SystemTime {
        *self
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match value {
            AttrValue::Time(t) => Ok(t),
            AttrValue::UInt(secs) => UNIX_EPOCH
                .checked_add(Duration::from_secs(secs))
                .ok_or(AttrValue::UInt(secs)),
            AttrValue::Int(secs) => from_epoch(secs, 0).ok_or(AttrValue::Int(secs)),
            other => Err(other),
        }
    }

    fn into_value(self) -> AttrValue {
        AttrValue::Time(self)
    }
}

impl AttrType for String {
    const KIND: &'static str = "text";
    type View<'a> = &'a str;

    fn view(&self) -> &str {
        self.as_str()
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match value {
            AttrValue::Text(s) => Ok(s),
            other => Err(other),
        }
    }

    fn into_value(self) -> AttrValue {
        AttrValue::Text(self)
    }
}

impl AttrType for FileType {
    const KIND: &'static str = "file type";
    type View<'a> = FileType;

    fn view(&self) -> FileType {
        *self
    }

    fn from_value(value: AttrValue) -> Result<Self, AttrValue> {
        match value {
            AttrValue::Text(s) => FileType::from_str(&s).ok_or(AttrValue::Text(s)),
            other => Err(other),
        }
    }

    fn into_value(self) -> AttrValue {
        self.into()
    }
}

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Time from signed epoch seconds plus forward nanoseconds.
///
/// `None` if `nanos` is a second or more, or the result is out of range.
pub fn from_epoch(secs: i64, nanos: u32) -> Option<SystemTime> {
    if nanos >= NANOS_PER_SEC {
        return None;
    }
    let offset = Duration::from_secs(secs.unsigned_abs());
    let base = if secs >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };
    base?.checked_add(Duration::from_nanos(nanos.into()))
}

/// Split a time into signed epoch seconds (floored) and forward nanoseconds.
///
/// `None` only for times more than `i64::MAX` seconds from the epoch.
pub fn to_epoch(t: SystemTime) -> Option<(i64, u32)> {
    match t.duration_since(UNIX_EPOCH) {
        Ok(after) => Some((i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => Some((-secs, 0)),
                n => Some((-secs - 1, NANOS_PER_SEC - n)),
            }
        }
    }
}

/// Serde format for `AttrValue::Time`.
mod epoch {
    use std::fmt;
    use std::time::SystemTime;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::{from_epoch, to_epoch};

    pub fn serialize<S: Serializer>(t: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let (secs, nanos) = to_epoch(*t)
            .ok_or_else(|| serde::ser::Error::custom("time out of range for epoch seconds"))?;
        if nanos == 0 {
            return serializer.serialize_i64(secs);
        }
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("secs", &secs)?;
        map.serialize_entry("nanos", &nanos)?;
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        deserializer.deserialize_map(EpochVisitor)
    }

    /// Only the map form. Bare integers reach time fields as `UInt`/`Int`.
    struct EpochVisitor;

    impl<'de> Visitor<'de> for EpochVisitor {
        type Value = SystemTime;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with `secs` and optional `nanos`")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SystemTime, A::Error> {
            let mut secs: Option<i64> = None;
            let mut nanos: u32 = 0;
            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "secs" => secs = Some(map.next_value()?),
                    "nanos" => nanos = map.next_value()?,
                    other => return Err(de::Error::unknown_field(other, &["secs", "nanos"])),
                }
            }
            let secs = secs.ok_or_else(|| de::Error::missing_field("secs"))?;
            from_epoch(secs, nanos).ok_or_else(|| de::Error::custom("time out of range"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_fitting() {
        assert_eq!(u64::from_value(AttrValue::UInt(7)), Ok(7));
        assert_eq!(u64::from_value(AttrValue::Int(7)), Ok(7));
        assert_eq!(u64::from_value(AttrValue::Int(-1)), Err(AttrValue::Int(-1)));
        assert_eq!(u32::from_value(AttrValue::UInt(u64::MAX)), Err(AttrValue::UInt(u64::MAX)));
        assert_eq!(u32::from_value(AttrValue::UInt(1000)), Ok(1000));
    }

    #[test]
    fn test_time_from_seconds() {
        let t = SystemTime::from_value(AttrValue::UInt(100)).unwrap();
        assert_eq!(t, UNIX_EPOCH + Duration::from_secs(100));

        let before = SystemTime::from_value(AttrValue::Int(-60)).unwrap();
        assert_eq!(before, UNIX_EPOCH - Duration::from_secs(60));

        let now = SystemTime::now();
        assert_eq!(SystemTime::from_value(AttrValue::Time(now)), Ok(now));
    }

    #[test]
    fn test_epoch_split_before_epoch() {
        let t = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(to_epoch(t), Some((-2, 500_000_000)));
        assert_eq!(from_epoch(-2, 500_000_000), Some(t));

        let whole = UNIX_EPOCH - Duration::from_secs(60);
        assert_eq!(to_epoch(whole), Some((-60, 0)));
        assert_eq!(from_epoch(-60, 0), Some(whole));
    }

    #[test]
    fn test_epoch_rejects_whole_second_of_nanos() {
        assert_eq!(from_epoch(1, 1_000_000_000), None);
    }

    #[test]
    fn test_time_wire_forms() {
        let whole = AttrValue::Time(UNIX_EPOCH - Duration::from_secs(60));
        assert_eq!(serde_json::to_string(&whole).unwrap(), "-60");

        let frac = AttrValue::Time(UNIX_EPOCH + Duration::new(5, 250));
        assert_eq!(
            serde_json::to_value(&frac).unwrap(),
            serde_json::json!({"secs": 5, "nanos": 250})
        );
        let back: AttrValue = serde_json::from_str(r#"{"secs": 5, "nanos": 250}"#).unwrap();
        assert_eq!(back, frac);
    }

    #[test]
    fn test_time_rejects_other_shapes() {
        assert!(serde_json::from_str::<AttrValue>("[5, 0]").is_err());
        assert!(serde_json::from_str::<AttrValue>(r#"{"secs": 5, "extra": 1}"#).is_err());
        assert!(serde_json::from_str::<AttrValue>(r#"{"nanos": 5}"#).is_err());
    }

    #[test]
    fn test_mismatch_hands_value_back() {
        assert_eq!(bool::from_value(AttrValue::UInt(1)), Err(AttrValue::UInt(1)));
        assert_eq!(
            String::from_value(AttrValue::Bool(true)),
            Err(AttrValue::Bool(true))
        );
        assert_eq!(
            FileType::from_value(AttrValue::Text("wat".into())),
            Err(AttrValue::Text("wat".into()))
        );
    }

    #[test]
    fn test_file_type_from_text() {
        assert_eq!(
            FileType::from_value(AttrValue::Text("directory".into())),
            Ok(FileType::Directory)
        );
        assert_eq!(FileType::Link.into_value(), AttrValue::Text("link".into()));
    }

    #[test]
    fn test_untagged_json() {
        let v: AttrValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AttrValue::Bool(true));
        let v: AttrValue = serde_json::from_str("1024").unwrap();
        assert_eq!(v, AttrValue::UInt(1024));
        let v: AttrValue = serde_json::from_str("-3").unwrap();
        assert_eq!(v, AttrValue::Int(-3));
        let v: AttrValue = serde_json::from_str("\"file\"").unwrap();
        assert_eq!(v, AttrValue::Text("file".into()));
    }

    #[test]
    fn test_string_view_borrows() {
        let s = String::from("hello");
        let v: &str = s.view();
        assert_eq!(v, "hello");
    }
}
