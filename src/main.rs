use std::io;
use std::process::ExitCode;

use clap::Parser;

use rust_gametree::driver::{self, Options};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::parse();
    log::debug!("{options:?}");

    match driver::run(&options, io::stdin().lock(), io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
