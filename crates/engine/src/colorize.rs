use basic_utils_shared_kernel::{EntryInfo, EntryKind};
use std::io::{self, Write};

/// Clears any color set by [`Color::escape`].
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Magenta,
    Cyan,
}

impl Color {
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
        }
    }
}

type Rule = (fn(&EntryInfo) -> bool, Color);

fn is_directory(info: &EntryInfo) -> bool {
    info.kind() == EntryKind::Directory
}

fn is_symlink(info: &EntryInfo) -> bool {
    info.kind() == EntryKind::Symlink
}

fn is_device(info: &EntryInfo) -> bool {
    info.kind().is_device()
}

fn is_executable(info: &EntryInfo) -> bool {
    info.mode.is_executable()
}

/// Evaluated top to bottom; the first matching predicate picks the color.
static RULES: [Rule; 4] = [
    (is_directory, Color::Cyan),
    (is_symlink, Color::Red),
    (is_device, Color::Green),
    (is_executable, Color::Magenta),
];

/// Picks the color for an entry, or `None` when it should stay uncolored.
#[must_use]
pub fn classify(info: &EntryInfo) -> Option<Color> {
    RULES
        .iter()
        .find(|(matches, _)| matches(info))
        .map(|&(_, color)| color)
}

/// Writes `line` and a newline, wrapped in `color` and [`RESET`] when one is given.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_line<W: Write>(out: &mut W, line: &str, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(color) => writeln!(out, "{}{line}{RESET}", color.escape()),
        None => writeln!(out, "{line}"),
    }
}
