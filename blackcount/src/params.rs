//! The parameters file: a JSON object that is kept verbatim so it can be echoed back in
//! the report, with `threshold` as the only key that means anything.

use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};

pub const THRESHOLD_KEY: &str = "threshold";
pub const DEFAULT_THRESHOLD: u8 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, thiserror::Error)]
#[error("the threshold must be a number, not {0}")]
pub struct NotANumber(pub Value);

/// All parameters exactly as they were read, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ParamsError> {
        match serde_json::from_str(contents)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ParamsError::NotAnObject(json_type(&other))),
        }
    }

    /// The configured threshold, or the default one if the key is missing. The value is
    /// not checked here.
    pub fn threshold(&self) -> Threshold {
        self.0
            .get(THRESHOLD_KEY)
            .cloned()
            .map(Threshold)
            .unwrap_or_default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Exclusive upper bound on the intensity of a black pixel. Holds whatever JSON value the
/// parameters had so it can be reported back as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Threshold(Value);

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD.into())
    }
}

impl Threshold {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// The threshold as a number. Booleans count as 0 and 1.
    pub fn value(&self) -> Result<f64, NotANumber> {
        match &self.0 {
            Value::Number(num) => num.as_f64().ok_or_else(|| NotANumber(self.0.clone())),
            Value::Bool(flag) => Ok(f64::from(u8::from(*flag))),
            other => Err(NotANumber(other.clone())),
        }
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
