//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::convert::{ConversionError, PipelineError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid config file {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error("Unknown example '{0}'. Run `json2sql examples` to list them.")]
    UnknownExample(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("{0}")]
    Format(#[from] ConversionError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
