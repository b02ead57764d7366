//! Canonical file metadata records for virtfs.
//!
//! A virtual filesystem mounts unrelated backends (real disk, archives,
//! remote stores, in-memory trees) under one logical tree. Each backend
//! describes its entries differently; this crate turns all of them into one
//! record type, [`Stat`], that callers can read and sort without knowing
//! where it came from. It has **no I/O** and no backend-specific logic.
//!
//! # Building records
//!
//! ```text
//! backend value ──impl StatSource──▶ Stat::from_source ─┐
//! key/value map ──(name, AttrValue)─▶ Stat::from_map ────┼──▶ Stat (immutable)
//! JSON / TOML   ──serde─────────────▶ Stat::from_json ───┤
//! tests, memfs  ──setters───────────▶ Stat::builder ─────┘
//! ```
//!
//! # Key Types
//!
//! |------------------|-----------------------------------------------------|
//! | Type             | Purpose                                             |
//! |------------------|-----------------------------------------------------|
//! | [`Stat`]         | The record: 40 optional fields, ordered by mtime    |
//! | [`StatSource`]   | Capability set a backend implements (all optional)  |
//! | [`AttrName`]     | Attribute vocabulary + name normalization           |
//! | [`AttrValue`]    | Dynamic value for mapping sources                   |
//! | [`FileType`]     | Entry type tag (`ftype`)                            |
//! | [`StatBuilder`]  | Synthetic records for in-memory backends and tests  |
//! | [`StatError`]    | Strict construction and parse failures              |
//! |------------------|-----------------------------------------------------|
//!
//! # Names
//!
//! Boolean attributes are conventionally spelled as predicates
//! (`directory?`). The trailing `?` is stripped before lookup everywhere, so
//! `directory?`, `directory`, `isDirectory` and `is_directory` all address
//! the same field, read back with [`Stat::is_directory`].
//!
//! # Ordering
//!
//! Records compare by `mtime` only. An unset `mtime` sorts first.

mod attrs;

pub mod builder;
pub mod error;
pub mod file_type;
pub mod local;
pub mod name;
pub mod source;
pub mod stat;
pub mod value;

// Re-export primary types at crate root for convenience.
pub use builder::StatBuilder;
pub use error::{StatError, StatResult};
pub use file_type::FileType;
pub use name::AttrName;
pub use source::StatSource;
pub use stat::Stat;
pub use value::{AttrType, AttrValue};
