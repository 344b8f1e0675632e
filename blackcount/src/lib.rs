pub mod bin_common;
pub mod counter;
pub mod params;
pub mod pipeline;
pub mod report;

/// For stand-alone functionality that fit comfortably within one file.
pub mod utils;
