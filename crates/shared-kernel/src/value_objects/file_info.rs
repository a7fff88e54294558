// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    ffi::{OsStr, OsString},
    fmt,
    ops::Deref,
    time::SystemTime,
};

use chrono::{DateTime, Local};

/// Name of a single directory child, as reported by the enumerator.
///
/// Keeps the raw OS name for filesystem lookups and a lossy UTF-8 copy for
/// printing, so non UTF-8 names still resolve to the right file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryName {
    raw: OsString,
    display: String,
}

impl EntryName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let display = name.into();
        Self {
            raw: OsString::from(&display),
            display,
        }
    }

    #[must_use]
    pub fn from_os_str(name: &OsStr) -> Self {
        Self {
            raw: name.to_os_string(),
            display: name.to_string_lossy().into_owned(),
        }
    }

    /// Printable form; invalid UTF-8 sequences are replaced with U+FFFD.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Exact name as returned by the OS, for joining onto the parent path.
    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.raw
    }

    /// Dot-files are hidden; nothing else is.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.display.starts_with('.')
    }
}

impl From<String> for EntryName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.display
    }
}

impl Deref for EntryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.display
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    /// Unit suffixes, one per factor of 1000. The last one absorbs everything above it.
    pub const UNITS: [&'static str; 6] = ["", "K", "M", "G", "T", "Y"];

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Divides by 1000 while the value is strictly above 1000.
    ///
    /// Returns the scaled magnitude together with the index into [`Self::UNITS`].
    #[allow(clippy::cast_precision_loss)]
    pub fn scaled(self) -> (f64, usize) {
        let mut value = self.0 as f64;
        let mut unit = 0;
        while value > 1000.0 && unit < Self::UNITS.len() - 1 {
            value /= 1000.0;
            unit += 1;
        }
        (value, unit)
    }

    /// Returns a base-10 human readable representation (`999`, `1.5K`, `2.3M`).
    ///
    /// When the fractional part of the scaled value is below 0.1 the value is
    /// printed as a bare integer and the unit suffix is dropped, so
    /// `1_000_000` renders as `1000` and `2_000` as `2`.
    pub fn to_human(self) -> String {
        let (value, unit) = self.scaled();
        if value - value.floor() < 0.1 {
            return format!("{:.0}", value.floor());
        }
        format!("{value:.1}{}", Self::UNITS[unit])
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(&self.to_human())
        } else {
            f.pad(&self.0.to_string())
        }
    }
}

/// Last modification time in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    /// `DD Mon HH:MM`, e.g. `07 Mar 14:05`.
    pub const FORMAT: &'static str = "%d %b %H:%M";

    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::new(time.into())
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
