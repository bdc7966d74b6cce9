// ABOUTME: Catalog module for YAML receipt template definitions
// ABOUTME: Exports template data structures, the catalog store, and catalog errors

pub mod error;
pub mod store;
pub mod template;

pub use error::{CatalogError, Result};
pub use store::TemplateCatalog;
pub use template::{Alignment, RawSegment, SegmentStyles, TemplateDefinition, VariableSpec};
