use std::path::Path;

use image::{GenericImageView, GrayImage};
use serde::Serialize;

use crate::{
    params::{NotANumber, Threshold},
    utils::{
        imgutils::{count_below, is_img_empty, normalize_gray, pixel_count},
        percent::{Percent64, PercentError},
    },
};

/// Number of decimals `black_percentage` is rounded to
pub const PERCENT_DECIMALS: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CountError {
    #[error("{0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Threshold(#[from] NotANumber),
    #[error("the image has no pixels")]
    Empty,
    #[error(transparent)]
    Percent(#[from] PercentError),
    #[error("{0}")]
    Panicked(String),
}

/// How much of an image is black.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlackPixels {
    pub black_pixel_count: u64,
    pub total_pixels: u64,
    pub black_percentage: Percent64,
    pub threshold_used: Threshold,
    pub original_file: String,
}

/// Opens the image at `path` and counts its pixels that are darker than `threshold`.
pub fn count_black_pixels(
    path: &Path,
    threshold: &Threshold,
) -> Result<BlackPixels, CountError> {
    let img = image::open(path)?;
    log::debug!(
        "opened {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    let gray = normalize_gray(img);
    count_black_pixels_gray(&gray, threshold, path.to_string_lossy().into_owned())
}

/// Same as [`count_black_pixels`] but for an image that already is gray.
pub fn count_black_pixels_gray(
    gray: &GrayImage,
    threshold: &Threshold,
    original_file: String,
) -> Result<BlackPixels, CountError> {
    let limit = threshold.value()?;
    if !(0.0..=f64::from(u8::MAX) + 1.0).contains(&limit) {
        log::warn!("the threshold {limit} is outside of the pixel range, using it anyway");
    }

    if is_img_empty(gray) {
        return Err(CountError::Empty);
    }

    let black_pixel_count = count_below(gray, limit);
    let total_pixels = pixel_count(gray);
    let black_percentage =
        Percent64::of(black_pixel_count as f64, total_pixels as f64)?.round_to(PERCENT_DECIMALS);

    Ok(BlackPixels {
        black_pixel_count,
        total_pixels,
        black_percentage,
        threshold_used: threshold.clone(),
        original_file,
    })
}
