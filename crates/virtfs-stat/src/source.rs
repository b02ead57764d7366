//! Native metadata sources.
//!
//! A backend describes its entries by implementing [`StatSource`]. Every
//! accessor has a default that reports the attribute as unavailable, so a
//! backend implements only what it actually knows. An archive entry might
//! answer `size` and `mtime` and nothing else; a real-disk stat answers
//! nearly everything.

use std::time::SystemTime;

use crate::attrs::with_stat_attrs;
use crate::file_type::FileType;

macro_rules! define_source {
    ($(
        $(#[$meta:meta])*
        $variant:ident $field:ident => $getter:ident : $ty:ty [$($alias:literal),*];
    )*) => {
        /// Capability set of metadata accessors.
        ///
        /// `None` means the backend does not provide the attribute.
        /// [`Stat::from_source`](crate::Stat::from_source) copies whatever
        /// these return, unmodified.
        pub trait StatSource {
            $(
                $(#[$meta])*
                fn $getter(&self) -> Option<$ty> {
                    None
                }
            )*
        }
    };
}

with_stat_attrs!(define_source);
