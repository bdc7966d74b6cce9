// ABOUTME: Main library module for the thermprint receipt printing engine
// ABOUTME: Exports the template catalog, script registry, renderer, and printer modules

pub mod catalog;
pub mod cli;
pub mod printer;
pub mod renderer;
pub mod scripts;
pub mod service;

// Re-export commonly used types
pub use catalog::{TemplateCatalog, TemplateDefinition};
pub use printer::{PrinterClient, TcpConnector};
pub use renderer::{RenderContext, StyledSegment, TemplateRenderer};
pub use scripts::ScriptRegistry;
pub use service::PrintService;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
