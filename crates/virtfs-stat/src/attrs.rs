//! The attribute vocabulary.
//!
//! Every recognized stat attribute is listed exactly once, in
//! [`with_stat_attrs!`]. The record, the source trait, the name enum and the
//! builder are all expanded from this list by handing it to a per-module
//! callback macro.
//!
//! Entry grammar:
//!
//! ```text
//! /// docs
//! Variant canonical_name => accessor: Type ["alias", ...];
//! ```
//!
//! Aliases are written in normalized form (snake_case, no trailing `?`),
//! see [`crate::name`].

macro_rules! with_stat_attrs {
    ($callback:ident) => {
        $callback! {
            // ── Times ───────────────────────────────────────────────────────
            /// Time of last access.
            Atime atime => atime: SystemTime ["access_time", "accessed"];
            /// Time of last modification. The only field used for ordering.
            Mtime mtime => mtime: SystemTime ["modify_time", "modified"];
            /// Time of last status change.
            Ctime ctime => ctime: SystemTime ["change_time", "changed"];

            // ── Sizes ───────────────────────────────────────────────────────
            /// Size in bytes.
            Size size => size: u64 [];
            /// Preferred I/O block size.
            Blksize blksize => blksize: u64 ["block_size"];
            /// Number of allocated blocks.
            Blocks blocks => blocks: u64 ["block_count"];

            // ── Identity ────────────────────────────────────────────────────
            /// Device the entry lives on.
            Dev dev => dev: u64 ["device_id", "device"];
            /// Major number of `dev`.
            DevMajor dev_major => dev_major: u32 ["device_major"];
            /// Minor number of `dev`.
            DevMinor dev_minor => dev_minor: u32 ["device_minor"];
            /// Inode number.
            Ino ino => ino: u64 ["inode"];
            /// Number of hard links.
            Nlink nlink => nlink: u64 ["link_count"];
            /// Raw mode bits (type and permissions).
            Mode mode => mode: u32 [];
            /// Device id for special files.
            Rdev rdev => rdev: u64 [];
            /// Major number of `rdev`.
            RdevMajor rdev_major => rdev_major: u32 [];
            /// Minor number of `rdev`.
            RdevMinor rdev_minor => rdev_minor: u32 [];
            /// Owner user id.
            Uid uid => uid: u32 ["owner_uid"];
            /// Owner group id.
            Gid gid => gid: u32 ["group_gid"];

            // ── Kind ────────────────────────────────────────────────────────
            /// Block device.
            Blockdev blockdev => is_blockdev: bool ["is_blockdev", "is_block_device", "block_device"];
            /// Character device.
            Chardev chardev => is_chardev: bool ["is_chardev", "is_char_device", "char_device"];
            /// Directory.
            Directory directory => is_directory: bool ["is_directory"];
            /// Regular file.
            File file => is_file: bool ["is_file"];
            /// Named pipe (FIFO).
            Pipe pipe => is_pipe: bool ["is_pipe"];
            /// Unix domain socket.
            Socket socket => is_socket: bool ["is_socket"];
            /// Symbolic link.
            Symlink symlink => is_symlink: bool ["is_symlink"];
            /// Entry type tag.
            Ftype ftype => ftype: FileType ["file_type"];

            // ── Permissions ─────────────────────────────────────────────────
            /// Readable by the effective user.
            Readable readable => is_readable: bool ["is_readable"];
            /// Readable by the real user.
            ReadableReal readable_real => is_readable_real: bool ["is_readable_real"];
            /// Writable by the effective user.
            Writable writable => is_writable: bool ["is_writable"];
            /// Writable by the real user.
            WritableReal writable_real => is_writable_real: bool ["is_writable_real"];
            /// Executable by the effective user.
            Executable executable => is_executable: bool ["is_executable"];
            /// Executable by the real user.
            ExecutableReal executable_real => is_executable_real: bool ["is_executable_real"];
            /// Set-group-id bit.
            Setgid setgid => is_setgid: bool ["is_setgid"];
            /// Set-user-id bit.
            Setuid setuid => is_setuid: bool ["is_setuid"];
            /// Sticky bit.
            Sticky sticky => is_sticky: bool ["is_sticky"];
            /// Readable by others.
            WorldReadable world_readable => is_world_readable: bool ["is_world_readable"];
            /// Writable by others.
            WorldWritable world_writable => is_world_writable: bool ["is_world_writable"];

            // ── Ownership ───────────────────────────────────────────────────
            /// Owned by the effective user.
            Owned owned => is_owned: bool ["is_owned"];
            /// Owned by the effective group.
            Grpowned grpowned => is_grpowned: bool ["is_grpowned", "is_group_owned", "group_owned"];

            // ── Derived ─────────────────────────────────────────────────────
            /// Zero length.
            Zero zero => is_zero: bool ["is_zero", "is_zero_size", "zero_size"];
            /// Backend's human-readable description of the entry.
            Inspect inspect => inspect: String ["inspect_string"];
        }
    };
}

pub(crate) use with_stat_attrs;
