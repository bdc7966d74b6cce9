// ABOUTME: Built-in script formatting a shopping list for the shopping_list template
// ABOUTME: Turns a comma-separated item parameter into a checkbox listing

use super::error::Result;
use super::{ScriptParams, TemplateScript};
use crate::renderer::RenderContext;

/// Generates the context for the shopping list template from a
/// comma-separated `items` parameter.
pub struct ShoppingListScript;

impl TemplateScript for ShoppingListScript {
    fn name(&self) -> &'static str {
        "shopping_list"
    }

    fn description(&self) -> &'static str {
        "Formats a comma-separated item list as a checkbox listing"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["items"]
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        &["title"]
    }

    fn generate(&self, params: &ScriptParams) -> Result<RenderContext> {
        // Required parameters are checked by the registry before this runs.
        let raw_items = params.get("items").map(String::as_str).unwrap_or_default();
        let title = params
            .get("title")
            .cloned()
            .unwrap_or_else(|| "Shopping List".to_string());

        let items: Vec<&str> = raw_items
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect();

        let formatted = items
            .iter()
            .map(|item| format!("[ ] {item}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut context = RenderContext::new();
        context.insert("title".to_string(), title);
        context.insert("items".to_string(), formatted);
        context.insert("total_items".to_string(), items.len().to_string());
        Ok(context)
    }

    fn validate(&self, context: &RenderContext) -> bool {
        context.contains_key("title") && context.contains_key("items")
    }
}
