// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::{io::Write, path::PathBuf};

use image::{DynamicImage, ImageFormat};
use tempfile::{Builder, TempPath};

/// Returns a named temporary file with the given suffix inside cargo's tmpdir
pub fn tmp_file(suffix: &str) -> TempPath {
    Builder::new()
        .suffix(suffix)
        .tempfile_in(cargo_tmpdir())
        .expect("could not create temporary file")
        .into_temp_path()
}

/// Returns cargo's tmpdir
pub fn cargo_tmpdir() -> PathBuf {
    PathBuf::from(option_env!("CARGO_TARGET_TMPDIR").expect("no cargo tmpdir???"))
}

/// Saves the image as a png in a temporary file
pub fn png(img: impl Into<DynamicImage>) -> TempPath {
    let path = tmp_file(".png");
    img.into()
        .save_with_format(&path, ImageFormat::Png)
        .expect("could not save the image");
    path
}

/// Writes `contents` to a temporary file
pub fn text_file(contents: &str, suffix: &str) -> TempPath {
    let path = tmp_file(suffix);
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(contents.as_bytes()))
        .expect("could not write the file");
    path
}

pub fn params(json: &str) -> TempPath {
    text_file(json, ".json")
}

/// A path in cargo's tmpdir that does not exist
pub fn missing_file(name: &str) -> PathBuf {
    let path = cargo_tmpdir().join(name);
    std::fs::remove_file(&path).ok();
    path
}
