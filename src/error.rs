use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// The classifier artifact could not be loaded at startup.
#[derive(Debug)]
pub enum ModelLoadError {
    /// The artifact file is missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not a well-formed classifier document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact parsed but describes an unusable classifier.
    Invalid(String),
}

impl fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read model artifact {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed model artifact {}: {source}", path.display())
            }
            Self::Invalid(msg) => write!(f, "invalid model artifact: {msg}"),
        }
    }
}

impl std::error::Error for ModelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// A submitted form field was missing or not a number.
#[derive(Debug, Clone, PartialEq)]
pub enum InputParseFailure {
    Missing { field: &'static str },
    NotNumeric { field: &'static str, value: String },
}

impl fmt::Display for InputParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field '{field}'"),
            Self::NotNumeric { field, value } => {
                write!(f, "field '{field}' is not a number: {value:?}")
            }
        }
    }
}

impl std::error::Error for InputParseFailure {}

impl ResponseError for InputParseFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(format!("Bad Request: {self}"))
    }
}

/// No trustworthy 0/1 verdict could be produced for a feature vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    UnexpectedLabel(u8),
    EmptyPrediction,
    /// A derived feature is NaN or infinite, so no verdict can be trusted.
    NonFinite { feature: &'static str },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedLabel(label) => write!(f, "classifier returned unknown label {label}"),
            Self::EmptyPrediction => write!(f, "classifier returned no label"),
            Self::NonFinite { feature } => write!(f, "feature '{feature}' is not a finite number"),
        }
    }
}

impl std::error::Error for PredictError {}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NonFinite { .. } => StatusCode::BAD_REQUEST,
            Self::UnexpectedLabel(_) | Self::EmptyPrediction => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// Process configuration could not be read from the environment.
#[derive(Debug)]
pub enum ConfigError {
    InvalidPort { value: String, source: ParseIntError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value, source } => write!(f, "invalid PORT {value:?}: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPort { source, .. } => Some(source),
        }
    }
}
