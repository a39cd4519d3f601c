pub mod args;
pub mod constants;
pub mod error;
pub mod generator;
pub mod opcodes;

use error::GenError;
use log::info;
use std::io;
use std::io::Write;
use std::path::PathBuf;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // Stdout carries the table, so logs go to stderr unless a file is given.
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Generates the table according to the command line.
pub fn run(args: args::Args) -> Result<usize, GenError> {
    setup_logging(&args.log_path)?;
    let options = args.gen_options();

    match &args.output {
        Some(path) => {
            info!("Writing CB instruction table to {:?}", path);
            let mut file = io::BufWriter::new(std::fs::File::create(path)?);
            generator::write_table(&mut file, &options)
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            generator::write_table(&mut lock, &options)
        }
    }
}
