use std::io;

use blackcount::{
    bin_common::{
        args::Cli,
        init::{init_eyre, init_logger},
    },
    pipeline,
};
use clap::{error::ErrorKind, Parser};

// Exits with 0 no matter what, failures are only reported through the JSON on stdout.
fn main() {
    let (cli, parse_error) = match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Falls through to the usage report since no positionals are set
        Err(e) => (Cli::default(), Some(e)),
    };

    if let Err(e) = init_logger(cli.log_level(), cli.log_file.as_deref()) {
        eprintln!("{e:?}");
    }
    if let Err(e) = init_eyre() {
        log::warn!("{e:?}");
    }
    if let Some(e) = parse_error {
        log::debug!("{e}");
    }

    let report = pipeline::run(cli.input_file, cli.params_file);
    if let Err(e) = report.emit(io::stdout().lock()) {
        log::error!("failed to write the report: {e}");
    }
}
