//! Real-disk metadata as a [`StatSource`].
//!
//! Backends that mount a local directory already hold a
//! `std::fs::Metadata`; this lets them hand it straight to
//! [`Stat::from_source`](crate::Stat::from_source). Only the captured
//! metadata and the process's own ids are consulted, never the filesystem.
//!
//! Access predicates follow the classic owner/group/other check against the
//! effective ids (`*_real` variants use the real ids). Root may read and
//! write anything, and may execute anything with an execute bit set or any
//! directory. Supplementary groups are not consulted.

use std::fs::Metadata;
use std::time::SystemTime;

use crate::file_type::FileType;
use crate::source::StatSource;

#[cfg(unix)]
use std::os::unix::fs::{FileTypeExt, MetadataExt};
#[cfg(unix)]
const S_ISUID: u32 = 0o4000;
#[cfg(unix)]
const S_ISGID: u32 = 0o2000;
#[cfg(unix)]
const S_ISVTX: u32 = 0o1000;

/// Permission bit triplet position for an owner/group/other check.
#[cfg(unix)]
#[derive(Clone, Copy)]
enum Access {
    Read = 0o4,
    Write = 0o2,
    Exec = 0o1,
}

#[cfg(unix)]
fn process_ids(real: bool) -> (u32, u32) {
    use rustix::process;

    if real {
        (process::getuid().as_raw(), process::getgid().as_raw())
    } else {
        (process::geteuid().as_raw(), process::getegid().as_raw())
    }
}

#[cfg(unix)]
fn check_access(meta: &Metadata, access: Access, real: bool) -> bool {
    let (uid, gid) = process_ids(real);
    let mode = MetadataExt::mode(meta);
    let bits = access as u32;

    if uid == 0 {
        return match access {
            Access::Exec => mode & 0o111 != 0 || meta.is_dir(),
            Access::Read | Access::Write => true,
        };
    }

    let shift = if MetadataExt::uid(meta) == uid {
        6
    } else if MetadataExt::gid(meta) == gid {
        3
    } else {
        0
    };
    mode & (bits << shift) != 0
}

/// Seconds plus nanoseconds relative to the epoch, as `stat` reports them.
#[cfg(unix)]
fn unix_time(secs: i64, nsecs: i64) -> Option<SystemTime> {
    crate::value::from_epoch(secs, u32::try_from(nsecs).ok()?)
}

/// `None` if the platform's device number can't hold `dev`.
#[cfg(unix)]
fn major_minor(dev: u64) -> Option<(u32, u32)> {
    let dev = rustix::fs::Dev::try_from(dev).ok()?;
    Some((rustix::fs::major(dev), rustix::fs::minor(dev)))
}

impl StatSource for Metadata {
    fn atime(&self) -> Option<SystemTime> {
        self.accessed().ok()
    }

    fn mtime(&self) -> Option<SystemTime> {
        self.modified().ok()
    }

    #[cfg(unix)]
    fn ctime(&self) -> Option<SystemTime> {
        unix_time(MetadataExt::ctime(self), MetadataExt::ctime_nsec(self))
    }

    fn size(&self) -> Option<u64> {
        Some(self.len())
    }

    #[cfg(unix)]
    fn blksize(&self) -> Option<u64> {
        Some(MetadataExt::blksize(self))
    }

    #[cfg(unix)]
    fn blocks(&self) -> Option<u64> {
        Some(MetadataExt::blocks(self))
    }

    #[cfg(unix)]
    fn dev(&self) -> Option<u64> {
        Some(MetadataExt::dev(self))
    }

    #[cfg(unix)]
    fn dev_major(&self) -> Option<u32> {
        major_minor(MetadataExt::dev(self)).map(|(major, _)| major)
    }

    #[cfg(unix)]
    fn dev_minor(&self) -> Option<u32> {
        major_minor(MetadataExt::dev(self)).map(|(_, minor)| minor)
    }

    #[cfg(unix)]
    fn ino(&self) -> Option<u64> {
        Some(MetadataExt::ino(self))
    }

    #[cfg(unix)]
    fn nlink(&self) -> Option<u64> {
        Some(MetadataExt::nlink(self))
    }

    #[cfg(unix)]
    fn mode(&self) -> Option<u32> {
        Some(MetadataExt::mode(self))
    }

    #[cfg(unix)]
    fn rdev(&self) -> Option<u64> {
        Some(MetadataExt::rdev(self))
    }

    #[cfg(unix)]
    fn rdev_major(&self) -> Option<u32> {
        major_minor(MetadataExt::rdev(self)).map(|(major, _)| major)
    }

    #[cfg(unix)]
    fn rdev_minor(&self) -> Option<u32> {
        major_minor(MetadataExt::rdev(self)).map(|(_, minor)| minor)
    }

    #[cfg(unix)]
    fn uid(&self) -> Option<u32> {
        Some(MetadataExt::uid(self))
    }

    #[cfg(unix)]
    fn gid(&self) -> Option<u32> {
        Some(MetadataExt::gid(self))
    }

    #[cfg(unix)]
    fn is_blockdev(&self) -> Option<bool> {
        Some(self.file_type().is_block_device())
    }

    #[cfg(unix)]
    fn is_chardev(&self) -> Option<bool> {
        Some(self.file_type().is_char_device())
    }

    fn is_directory(&self) -> Option<bool> {
        Some(self.is_dir())
    }

    fn is_file(&self) -> Option<bool> {
        Some(Metadata::is_file(self))
    }

    #[cfg(unix)]
    fn is_pipe(&self) -> Option<bool> {
        Some(self.file_type().is_fifo())
    }

    #[cfg(unix)]
    fn is_socket(&self) -> Option<bool> {
        Some(self.file_type().is_socket())
    }

    fn is_symlink(&self) -> Option<bool> {
        Some(Metadata::is_symlink(self))
    }

    fn ftype(&self) -> Option<FileType> {
        Some(self.file_type().into())
    }

    #[cfg(unix)]
    fn is_readable(&self) -> Option<bool> {
        Some(check_access(self, Access::Read, false))
    }

    #[cfg(unix)]
    fn is_readable_real(&self) -> Option<bool> {
        Some(check_access(self, Access::Read, true))
    }

    #[cfg(unix)]
    fn is_writable(&self) -> Option<bool> {
        Some(check_access(self, Access::Write, false))
    }

    #[cfg(not(unix))]
    fn is_writable(&self) -> Option<bool> {
        Some(!self.permissions().readonly())
    }

    #[cfg(unix)]
    fn is_writable_real(&self) -> Option<bool> {
        Some(check_access(self, Access::Write, true))
    }

    #[cfg(unix)]
    fn is_executable(&self) -> Option<bool> {
        Some(check_access(self, Access::Exec, false))
    }

    #[cfg(unix)]
    fn is_executable_real(&self) -> Option<bool> {
        Some(check_access(self, Access::Exec, true))
    }

    #[cfg(unix)]
    fn is_setgid(&self) -> Option<bool> {
        Some(MetadataExt::mode(self) & S_ISGID != 0)
    }

    #[cfg(unix)]
    fn is_setuid(&self) -> Option<bool> {
        Some(MetadataExt::mode(self) & S_ISUID != 0)
    }

    #[cfg(unix)]
    fn is_sticky(&self) -> Option<bool> {
        Some(MetadataExt::mode(self) & S_ISVTX != 0)
    }

    #[cfg(unix)]
    fn is_world_readable(&self) -> Option<bool> {
        Some(MetadataExt::mode(self) & 0o004 != 0)
    }

    #[cfg(unix)]
    fn is_world_writable(&self) -> Option<bool> {
        Some(MetadataExt::mode(self) & 0o002 != 0)
    }

    #[cfg(unix)]
    fn is_owned(&self) -> Option<bool> {
        Some(MetadataExt::uid(self) == process_ids(false).0)
    }

    #[cfg(unix)]
    fn is_grpowned(&self) -> Option<bool> {
        Some(MetadataExt::gid(self) == process_ids(false).1)
    }

    fn is_zero(&self) -> Option<bool> {
        Some(self.len() == 0)
    }

    fn inspect(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}
