// ABOUTME: Integration tests for the script registry and built-in scripts
// ABOUTME: Covers discovery, parameter checking, validation, and pinned clocks

use chrono::NaiveDate;

use thermprint::renderer::RenderContext;
use thermprint::scripts::agenda::AgendaScript;
use thermprint::scripts::{ScriptError, ScriptParams, ScriptRegistry, TemplateScript};

fn pinned_registry() -> ScriptRegistry {
    let mut registry = ScriptRegistry::new();
    registry.register(Box::new(AgendaScript::with_clock(|| {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    })));
    registry
}

#[test]
fn test_script_discovery_by_template_key() {
    let registry = ScriptRegistry::with_builtins();
    assert!(registry.has_script("agenda"));
    assert!(registry.has_script("shopping_list"));
    assert!(!registry.has_script("task"));

    let script = registry.get("shopping_list").unwrap();
    assert_eq!(script.required_parameters(), &["items"]);
    assert_eq!(script.optional_parameters(), &["title"]);
}

#[test]
fn test_generate_for_unregistered_template() {
    let registry = ScriptRegistry::new();
    let err = registry.generate("agenda", &ScriptParams::new()).unwrap_err();
    assert!(matches!(err, ScriptError::Unavailable { template } if template == "agenda"));
}

#[test]
fn test_agenda_with_pinned_clock() {
    let registry = pinned_registry();
    let context = registry.generate("agenda", &ScriptParams::new()).unwrap();

    assert_eq!(context["week_number"], "10");
    assert_eq!(context["week_start_date"], "2025-03-03");
    assert_eq!(context["week_end_date"], "2025-03-09");
    assert_eq!(context["days"].lines().count(), 7);
}

#[test]
fn test_missing_required_parameter() {
    let registry = ScriptRegistry::with_builtins();
    let err = registry
        .generate("shopping_list", &ScriptParams::new())
        .unwrap_err();
    assert_eq!(
        err,
        ScriptError::MissingParameter {
            script: "shopping_list".to_string(),
            parameter: "items".to_string(),
        }
    );
}

#[test]
fn test_invalid_context_is_never_returned() {
    struct EmptyScript;
    impl TemplateScript for EmptyScript {
        fn name(&self) -> &'static str {
            "empty"
        }
        fn description(&self) -> &'static str {
            "always produces an empty context"
        }
        fn generate(&self, _params: &ScriptParams) -> Result<RenderContext, ScriptError> {
            Ok(RenderContext::new())
        }
    }

    let mut registry = ScriptRegistry::new();
    registry.register(Box::new(EmptyScript));
    let err = registry.generate("empty", &ScriptParams::new()).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidContext { script } if script == "empty"));
}

#[test]
fn test_script_failure_propagates() {
    let registry = pinned_registry();
    let mut params = ScriptParams::new();
    params.insert("date".to_string(), "not-a-date".to_string());
    let err = registry.generate("agenda", &params).unwrap_err();
    assert!(matches!(err, ScriptError::Failed { .. }));
}
