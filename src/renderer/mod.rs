// ABOUTME: Renderer module that turns templates plus a context into styled segments
// ABOUTME: Exports the renderer, styled segment types, accent folding, and errors

pub mod error;
pub mod fold;
pub mod render;
pub mod segment;

pub use error::{RenderError, Result};
pub use fold::fold_accents;
pub use render::TemplateRenderer;
pub use segment::{RenderContext, StyledSegment};
