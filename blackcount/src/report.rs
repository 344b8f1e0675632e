//! The single JSON record printed for every invocation.

use std::io::{self, Write};

use serde::Serialize;

use crate::{counter::BlackPixels, params::Params, pipeline::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Counted(BlackPixels),
    Message { message: String },
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    status: Status,
    #[serde(flatten)]
    body: Body,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters_applied: Option<Params>,
}

impl Report {
    pub fn success(counted: BlackPixels) -> Self {
        Self {
            status: Status::Success,
            body: Body::Counted(counted),
            parameters_applied: None,
        }
    }

    pub fn failure(error: &Error) -> Self {
        let description = error.to_string();
        let body = if error.is_processing_error() {
            Body::Error { error: description }
        } else {
            Body::Message {
                message: description,
            }
        };
        Self {
            status: Status::Error,
            body,
            parameters_applied: None,
        }
    }

    pub fn with_parameters(mut self, params: Params) -> Self {
        self.parameters_applied = Some(params);
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn parameters_applied(&self) -> Option<&Params> {
        self.parameters_applied.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Writes the report as one line of JSON
    pub fn emit(&self, mut out: impl Write) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{json}")?;
        out.flush()
    }
}
