use std::process::ExitCode;

use cb_table_gen::args::Args;
use clap::Parser;
use log::error;

fn main() -> ExitCode {
    let args = Args::parse();

    match cb_table_gen::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
