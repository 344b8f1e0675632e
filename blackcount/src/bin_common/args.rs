use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::pipeline::{Error, Result};

pub const PROGRAM: &str = "count-black-pixels";

#[derive(Parser, Debug, Default)]
#[command(name = PROGRAM, version)]
/// Counts the pixels of an image that are darker than a threshold and prints the result
/// as one line of JSON. Always exits with 0, look at the `status` field instead.
pub struct Cli {
    /// Log more to stderr, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    // Unknown flags in positional spots are paths, e.g., `-scan.png`
    /// The image to analyze
    #[arg(allow_hyphen_values = true)]
    pub input_file: Option<PathBuf>,

    /// JSON object with the parameters, e.g., {"threshold": 30}
    #[arg(allow_hyphen_values = true)]
    pub params_file: Option<PathBuf>,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// The two files to work on, both known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub image: PathBuf,
    pub params: PathBuf,
}

/// Both paths must be given and refer to regular files.
pub fn validate(input_file: Option<PathBuf>, params_file: Option<PathBuf>) -> Result<Inputs> {
    let (Some(image), Some(params)) = (input_file, params_file) else {
        return Err(Error::Usage { program: PROGRAM });
    };

    if !image.is_file() {
        return Err(Error::MissingInput(image));
    }

    if !params.is_file() {
        return Err(Error::MissingParams(params));
    }

    Ok(Inputs { image, params })
}
