//! Entry type tag (`ftype`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Entry type, spelled the way `stat`-style tools report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive)]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Character device.
    #[strum(serialize = "characterSpecial", serialize = "chardev")]
    CharacterSpecial,
    /// Block device.
    #[strum(serialize = "blockSpecial", serialize = "blockdev")]
    BlockSpecial,
    /// Named pipe.
    #[strum(serialize = "fifo", serialize = "pipe")]
    Fifo,
    /// Symbolic link.
    #[strum(serialize = "link", serialize = "symlink")]
    Link,
    /// Unix domain socket.
    Socket,
    /// Anything else.
    Unknown,
}

impl FileType {
    /// Parse from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::File => "file",
            FileType::Directory => "directory",
            FileType::CharacterSpecial => "characterSpecial",
            FileType::BlockSpecial => "blockSpecial",
            FileType::Fifo => "fifo",
            FileType::Link => "link",
            FileType::Socket => "socket",
            FileType::Unknown => "unknown",
        }
    }

    /// Decode the `S_IFMT` bits of a raw mode.
    ///
    /// Archive formats carry the full mode word, so backends without a
    /// native file type can still report one.
    pub fn from_mode(mode: u32) -> Self {
        match mode & 0o170000 {
            0o100000 => FileType::File,
            0o040000 => FileType::Directory,
            0o020000 => FileType::CharacterSpecial,
            0o060000 => FileType::BlockSpecial,
            0o010000 => FileType::Fifo,
            0o120000 => FileType::Link,
            0o140000 => FileType::Socket,
            _ => FileType::Unknown,
        }
    }

    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, FileType::File)
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }

    /// Returns true if this is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        matches!(self, FileType::Link)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<std::fs::FileType> for FileType {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            return FileType::Directory;
        }
        if ft.is_file() {
            return FileType::File;
        }
        if ft.is_symlink() {
            return FileType::Link;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;

            if ft.is_block_device() {
                return FileType::BlockSpecial;
            }
            if ft.is_char_device() {
                return FileType::CharacterSpecial;
            }
            if ft.is_fifo() {
                return FileType::Fifo;
            }
            if ft.is_socket() {
                return FileType::Socket;
            }
        }

        FileType::Unknown
    }
}
