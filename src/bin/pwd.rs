// src/bin/pwd.rs
use basic_utils::args::PwdArgs;
use basic_utils::{logging, presentation};
use basic_utils_engine::pwd::working_directory;
use clap::Parser;
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _args = PwdArgs::parse();
    logging::init();

    match working_directory() {
        Ok(dir) => {
            println!("{}", presentation::working_directory_line(&dir));
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("pwd: {err:?}");
            println!("pwd: {err}");
            ExitCode::FAILURE
        }
    }
}
