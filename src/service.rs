// ABOUTME: Print service facade wiring the catalog, scripts, renderer, and printer
// ABOUTME: The only surface front ends use; collaborators are passed in explicitly

use thiserror::Error;
use tracing::info;

use crate::catalog::{CatalogError, TemplateCatalog, TemplateDefinition, VariableSpec};
use crate::printer::{CancelToken, PrintError, PrinterClient};
use crate::renderer::{RenderContext, RenderError, StyledSegment, TemplateRenderer};
use crate::scripts::{ScriptError, ScriptParams, ScriptRegistry};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Print(#[from] PrintError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Facade over the printing core.
///
/// Front ends call exactly three kinds of operations: listing template keys,
/// inspecting a template's declared variables (or invoking its script), and
/// render+print. They never reach into catalog internals or device control
/// codes.
pub struct PrintService {
    catalog: TemplateCatalog,
    scripts: ScriptRegistry,
    renderer: TemplateRenderer,
    client: PrinterClient,
}

impl PrintService {
    pub fn new(
        catalog: TemplateCatalog,
        scripts: ScriptRegistry,
        renderer: TemplateRenderer,
        client: PrinterClient,
    ) -> Self {
        Self {
            catalog,
            scripts,
            renderer,
            client,
        }
    }

    pub fn list_templates(&self) -> Vec<&str> {
        self.catalog.list()
    }

    pub fn template(&self, key: &str) -> Result<&TemplateDefinition> {
        Ok(self.catalog.get(key)?)
    }

    /// Declared variables of a template, for building an input form.
    pub fn template_variables(&self, key: &str) -> Result<&[VariableSpec]> {
        Ok(self.catalog.get(key).map(|t| t.variables.as_slice())?)
    }

    pub fn has_script(&self, key: &str) -> bool {
        self.scripts.has_script(key)
    }

    /// Resolve the context used for rendering `key`.
    ///
    /// When a script is registered for the template, its output supersedes the
    /// user input entirely (the input acts as the script's parameters).
    /// Otherwise the input is the context.
    pub fn resolve_context(&self, key: &str, input: RenderContext) -> Result<RenderContext> {
        self.catalog.get(key)?;
        if self.scripts.has_script(key) {
            let params: ScriptParams = input;
            Ok(self.scripts.generate(key, &params)?)
        } else {
            Ok(input)
        }
    }

    /// Render without printing. Used for previews.
    pub fn preview(&self, key: &str, context: &RenderContext) -> Result<Vec<StyledSegment>> {
        let template = self.catalog.get(key)?;
        Ok(self.renderer.render(template, context)?)
    }

    /// Render `key` with `context` and send the result to the printer.
    ///
    /// Rendering happens before any device connection is opened, so an unknown
    /// template or a missing variable never touches the device.
    pub fn print(&self, key: &str, context: &RenderContext) -> Result<()> {
        self.print_with_cancel(key, context, &CancelToken::new())
    }

    pub fn print_with_cancel(
        &self,
        key: &str,
        context: &RenderContext,
        cancel: &CancelToken,
    ) -> Result<()> {
        let segments = self.preview(key, context)?;
        self.client.print_with_cancel(&segments, cancel)?;
        info!("Printed template '{}'", key);
        Ok(())
    }
}
