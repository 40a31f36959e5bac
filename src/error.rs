//! Error types for taskdef-render

use thiserror::Error;

use crate::taskdef::LogDriver;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("Task definition file does not exist: {0}")]
    MissingFile(String),

    #[error("Invalid task definition format: containerDefinitions section is not present or is not an array")]
    MalformedDocument,

    #[error("Invalid task definition: Could not find container definition with matching name")]
    ContainerNotFound(String),

    #[error("{0}")]
    Parse(String),

    #[error(
        "'{0}' is invalid logConfigurationLogDriver. valid options are {}. More details: https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_LogConfiguration.html",
        LogDriver::valid_options()
    )]
    InvalidLogDriver(String),

    #[error("Invalid task definition JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
