//! Validate, load the parameters, count, and always end up with exactly one [`Report`].

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
};

use crate::{
    bin_common::args::{self, Inputs},
    counter::{self, BlackPixels, CountError},
    params::{Params, ParamsError, Threshold},
    report::Report,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Usage: {program} <input_file> <params_file>")]
    Usage { program: &'static str },
    #[error("Error: Input file {} does not exist", .0.display())]
    MissingInput(PathBuf),
    #[error("Error: Parameters file {} does not exist", .0.display())]
    MissingParams(PathBuf),
    #[error("Error loading parameters: {0}")]
    Params(#[from] ParamsError),
    #[error("Failed to process image: {0}")]
    Count(#[from] CountError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this happened while working on the image itself, as opposed to while
    /// checking the arguments or reading the parameters.
    pub fn is_processing_error(&self) -> bool {
        matches!(self, Self::Count(_))
    }
}

/// Runs everything on the two positional arguments. Never fails and never panics
/// because of a bad image, the outcome is in the returned report.
pub fn run(input_file: Option<PathBuf>, params_file: Option<PathBuf>) -> Report {
    let (inputs, params) = match prepare(input_file, params_file) {
        Ok(prepared) => prepared,
        Err(e) => {
            log::debug!("stopped before processing the image: {e}");
            return Report::failure(&e);
        }
    };

    let report = match count(&inputs.image, &params.threshold()) {
        Ok(counted) => {
            log::info!(
                "{}: {} of {} pixels are black ({})",
                counted.original_file,
                counted.black_pixel_count,
                counted.total_pixels,
                counted.black_percentage
            );
            Report::success(counted)
        }
        Err(e) => {
            log::debug!("{e}");
            Report::failure(&e)
        }
    };

    report.with_parameters(params)
}

fn prepare(
    input_file: Option<PathBuf>,
    params_file: Option<PathBuf>,
) -> Result<(Inputs, Params)> {
    let inputs = args::validate(input_file, params_file)?;
    let params = Params::load(&inputs.params)?;
    log::debug!("loaded {} parameter(s)", params.as_map().len());
    Ok((inputs, params))
}

fn count(image: &Path, threshold: &Threshold) -> Result<BlackPixels> {
    let counted = panic::catch_unwind(AssertUnwindSafe(|| {
        counter::count_black_pixels(image, threshold)
    }))
    .unwrap_or_else(|payload| Err(CountError::Panicked(panic_message(payload.as_ref()))))?;
    Ok(counted)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "the image decoder panicked".to_owned()
    }
}
