// ABOUTME: Error types for template rendering
// ABOUTME: Defines the fatal conditions that abort a render

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Template '{template}' references undefined variable '{variable}'")]
    MissingVariable { template: String, variable: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
