// ABOUTME: Error types for template script discovery and execution
// ABOUTME: Covers missing scripts, bad parameters, failures, and invalid output

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("No script registered for template '{template}'")]
    Unavailable { template: String },

    #[error("Script '{script}' requires parameter '{parameter}'")]
    MissingParameter { script: String, parameter: String },

    #[error("Script '{script}' failed: {message}")]
    Failed { script: String, message: String },

    #[error("Script '{script}' produced a context that failed validation")]
    InvalidContext { script: String },
}

pub type Result<T> = std::result::Result<T, ScriptError>;
