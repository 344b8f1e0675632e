use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Percent64(f64);

#[derive(thiserror::Error, Debug)]
#[error("not a valid percentage")]
pub struct PercentError;

impl Percent64 {
    pub const ZERO: Self = Percent64(0.0);
    pub const HUNDRED: Self = Percent64(100.0);

    pub fn new(float: f64) -> Result<Self, PercentError> {
        if float.is_finite() && float >= 0.0 {
            Ok(Percent64(float))
        } else {
            Err(PercentError)
        }
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn of(part: f64, total: f64) -> Result<Self, PercentError> {
        Self::new(100.0 * part / total)
    }

    /// Rounds to `decimals` decimal places, halfway cases away from zero.
    pub fn round_to(self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        Percent64((self.0 * scale).round() / scale)
    }
}

impl TryFrom<f64> for Percent64 {
    type Error = PercentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Percent64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
