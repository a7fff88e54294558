// src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// `-h` selects human-readable sizes, so help is only reachable as `--help`.
#[derive(Parser, Debug)]
#[command(
    name = "ls",
    version,
    about = "List directory entries",
    disable_help_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct LsArgs {
    /// Show hidden files (names starting with '.')
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Display mode, size, modification time and name
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// Show file sizes in more manageable units (with -l)
    #[arg(short = 'h', long = "human-readable")]
    pub human_readable: bool,

    /// Colorize output by entry kind
    #[arg(short = 'G', long = "color")]
    pub color: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Directories to list (defaults to the current directory)
    #[arg(value_hint = ValueHint::DirPath)]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "pwd", version, about = "Print the current working directory")]
pub struct PwdArgs {}
