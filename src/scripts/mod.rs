// ABOUTME: Script registry for per-template dynamic context generators
// ABOUTME: Defines the script capability trait and the static registration scheme

pub mod agenda;
pub mod error;
pub mod shopping_list;

pub use error::{Result, ScriptError};

use std::collections::HashMap;
use tracing::debug;

use crate::renderer::RenderContext;

/// Parameters handed to a script's `generate`, keyed by parameter name.
pub type ScriptParams = HashMap<String, String>;

/// An optional per-template context generator.
///
/// Scripts are stateless and may be invoked repeatedly. A script is associated
/// with a template by name: `name()` must equal the template key it serves.
/// Scripts may read the wall clock for date computation; implementations doing
/// so must accept an injectable clock so tests can pin it.
pub trait TemplateScript: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn required_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    /// Compute a render context from the given parameters.
    fn generate(&self, params: &ScriptParams) -> Result<RenderContext>;

    /// Check a generated context before it is handed to the renderer.
    fn validate(&self, context: &RenderContext) -> bool {
        !context.is_empty()
    }
}

/// Static registry mapping template keys to their context generator scripts.
///
/// Populated at startup; templates without a registered script simply have no
/// script. No runtime code loading takes place.
pub struct ScriptRegistry {
    scripts: HashMap<String, Box<dyn TemplateScript>>,
}

impl ScriptRegistry {
    /// An empty registry with no scripts.
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
        }
    }

    /// A registry with all built-in scripts registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(agenda::AgendaScript::new()));
        registry.register(Box::new(shopping_list::ShoppingListScript));
        registry
    }

    pub fn register(&mut self, script: Box<dyn TemplateScript>) {
        let name = script.name().to_string();
        debug!("Registered template script '{}'", name);
        self.scripts.insert(name, script);
    }

    pub fn has_script(&self, template_key: &str) -> bool {
        self.scripts.contains_key(template_key)
    }

    /// The script serving `template_key`, if one is registered.
    pub fn get(&self, template_key: &str) -> Option<&dyn TemplateScript> {
        self.scripts.get(template_key).map(|s| s.as_ref())
    }

    /// Run the script registered for `template_key` and validate its output.
    ///
    /// Fails if no script is registered, a required parameter is missing, the
    /// script itself fails, or the generated context does not validate. A
    /// failing validation never hands back the invalid context.
    pub fn generate(&self, template_key: &str, params: &ScriptParams) -> Result<RenderContext> {
        let script = self
            .scripts
            .get(template_key)
            .ok_or_else(|| ScriptError::Unavailable {
                template: template_key.to_string(),
            })?;

        for required in script.required_parameters() {
            if !params.contains_key(*required) {
                return Err(ScriptError::MissingParameter {
                    script: script.name().to_string(),
                    parameter: required.to_string(),
                });
            }
        }

        let context = script.generate(params)?;
        if !script.validate(&context) {
            return Err(ScriptError::InvalidContext {
                script: script.name().to_string(),
            });
        }
        Ok(context)
    }
}

impl Default for ScriptRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
