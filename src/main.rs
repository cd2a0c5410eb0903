use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;
use pasteinc::{cli::Cli, error::PasteError, preproc::preprocessor::Preprocessor};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("{:?}", cli);

    let pp = Preprocessor::new(cli.options());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = pp.expand_to(&cli.root, &mut out);
    // lines emitted before a failure are still delivered
    let flushed = out.flush().map_err(PasteError::Write);

    match result.and_then(|count| flushed.map(|_| count)) {
        Ok(count) => {
            log::debug!("wrote {} lines", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
