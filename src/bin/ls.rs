// src/bin/ls.rs
use basic_utils::args::LsArgs;
use basic_utils::config::ListingConfig;
use basic_utils::{logging, presentation};
use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = LsArgs::parse();
    logging::init();

    let config = match ListingConfig::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ls: {e}");
            return ExitCode::from(presentation::EXIT_FAILURE);
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let result = basic_utils_engine::run(&config, &args.paths, &mut out);
    ExitCode::from(presentation::finish("ls", result, &mut out))
}
