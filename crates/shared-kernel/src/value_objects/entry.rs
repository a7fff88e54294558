// crates/shared-kernel/src/value_objects/entry.rs
use std::{fmt, fs::Metadata};

use super::file_info::{FileSize, ModificationTime};

/// File type as seen by a non-following stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
}

impl EntryKind {
    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::FileTypeExt;

        let ft = meta.file_type();
        if ft.is_dir() {
            Self::Directory
        } else if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else {
            Self::File
        }
    }

    #[cfg(not(unix))]
    pub fn from_metadata(meta: &Metadata) -> Self {
        let ft = meta.file_type();
        if ft.is_dir() {
            Self::Directory
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::File
        }
    }

    /// Leading character of the mode string.
    #[must_use]
    pub const fn type_char(self) -> char {
        match self {
            Self::File => '-',
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::BlockDevice => 'b',
            Self::CharDevice => 'c',
            Self::Fifo => 'p',
            Self::Socket => 's',
        }
    }

    #[must_use]
    pub const fn is_device(self) -> bool {
        matches!(self, Self::BlockDevice | Self::CharDevice)
    }
}

/// File type plus the permission bits (including setuid/setgid/sticky).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryMode {
    kind: EntryKind,
    bits: u32,
}

impl EntryMode {
    const SETUID: u32 = 0o4000;
    const SETGID: u32 = 0o2000;
    const STICKY: u32 = 0o1000;
    const EXEC_ANY: u32 = 0o111;

    #[must_use]
    pub const fn new(kind: EntryKind, bits: u32) -> Self {
        Self {
            kind,
            bits: bits & 0o7777,
        }
    }

    #[cfg(unix)]
    #[must_use]
    pub fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::new(EntryKind::from_metadata(meta), meta.permissions().mode())
    }

    #[cfg(not(unix))]
    #[must_use]
    pub fn from_metadata(meta: &Metadata) -> Self {
        let kind = EntryKind::from_metadata(meta);
        let mut bits = if meta.permissions().readonly() { 0o444 } else { 0o644 };
        if kind == EntryKind::Directory {
            bits |= 0o111;
        }
        Self::new(kind, bits)
    }

    #[must_use]
    pub const fn kind(self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// True if any of the owner/group/other execute bits is set.
    #[must_use]
    pub const fn is_executable(self) -> bool {
        self.bits & Self::EXEC_ANY != 0
    }
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (read, write, exec, special bit, char when exec set, char when exec unset)
        const TRIADS: [(u32, u32, u32, u32, char, char); 3] = [
            (0o400, 0o200, 0o100, EntryMode::SETUID, 's', 'S'),
            (0o040, 0o020, 0o010, EntryMode::SETGID, 's', 'S'),
            (0o004, 0o002, 0o001, EntryMode::STICKY, 't', 'T'),
        ];

        let mut out = String::with_capacity(10);
        out.push(self.kind.type_char());
        for (r, w, x, special, set, unset) in TRIADS {
            out.push(if self.bits & r != 0 { 'r' } else { '-' });
            out.push(if self.bits & w != 0 { 'w' } else { '-' });
            let exec = self.bits & x != 0;
            out.push(match (self.bits & special != 0, exec) {
                (true, true) => set,
                (true, false) => unset,
                (false, true) => 'x',
                (false, false) => '-',
            });
        }
        f.pad(&out)
    }
}

/// Snapshot of one metadata query for a directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub mode: EntryMode,
    pub size: FileSize,
    pub modified: Option<ModificationTime>,
}

impl EntryInfo {
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.mode.kind()
    }
}

impl From<&Metadata> for EntryInfo {
    fn from(meta: &Metadata) -> Self {
        Self {
            mode: EntryMode::from_metadata(meta),
            size: FileSize::new(meta.len()),
            modified: meta.modified().ok().map(ModificationTime::from),
        }
    }
}
