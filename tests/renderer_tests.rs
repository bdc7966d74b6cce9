// ABOUTME: Integration tests for the template renderer
// ABOUTME: Exercises the spec scenarios end to end from YAML definitions

use std::collections::HashMap;

use thermprint::catalog::{SegmentStyles, TemplateCatalog};
use thermprint::renderer::{RenderContext, RenderError, StyledSegment, TemplateRenderer};

mod common;

fn context(pairs: &[(&str, &str)]) -> RenderContext {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_reference_scenario_markdown_split() {
    let dir = common::test_template_dir();
    let catalog = TemplateCatalog::load(dir.path()).unwrap();
    let template = catalog.get("test_template").unwrap();

    let renderer = TemplateRenderer::new(true);
    let segments = renderer
        .render(template, &context(&[("name", "Alice")]))
        .unwrap();

    let bold = SegmentStyles::default().with_bold();
    let plain = SegmentStyles::default();
    assert_eq!(
        segments,
        vec![
            StyledSegment::new("Hello there", bold),
            StyledSegment::new(", Alice!", plain),
            StyledSegment::new("\n", plain),
            StyledSegment::new("Nice to meet you.", plain),
        ]
    );
}

#[test]
fn test_reference_scenario_accent_folding() {
    let dir = common::test_template_dir();
    let catalog = TemplateCatalog::load(dir.path()).unwrap();
    let template = catalog.get("test_template").unwrap();

    let renderer = TemplateRenderer::new(true);
    let segments = renderer
        .render(template, &context(&[("name", "Zażółć gęślą jaźń")]))
        .unwrap();
    assert_eq!(segments[1].text, ", Zazolc gesla jazn!");

    let unfolded = TemplateRenderer::new(false)
        .render(template, &context(&[("name", "Zażółć gęślą jaźń")]))
        .unwrap();
    assert_eq!(unfolded[1].text, ", Zażółć gęślą jaźń!");
}

#[test]
fn test_missing_required_variable_names_it() {
    let dir = common::test_template_dir();
    let catalog = TemplateCatalog::load(dir.path()).unwrap();
    let template = catalog.get("test_template").unwrap();

    let err = TemplateRenderer::new(true)
        .render(template, &RenderContext::new())
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::MissingVariable {
            template: "test_template".to_string(),
            variable: "name".to_string(),
        }
    );
}

#[test]
fn test_zero_variable_templates_render_with_empty_context() {
    let catalog = TemplateCatalog::load(std::path::Path::new("templates")).unwrap();
    let renderer = TemplateRenderer::new(true);

    let template = catalog.get("small_note").unwrap();
    assert!(template.variables.is_empty());
    let segments = renderer.render(template, &RenderContext::new()).unwrap();
    assert_eq!(segments.len(), 1);
}

#[test]
fn test_rendering_is_deterministic() {
    let dir = common::test_template_dir();
    let catalog = TemplateCatalog::load(dir.path()).unwrap();
    let template = catalog.get("test_template").unwrap();
    let renderer = TemplateRenderer::new(true);

    let ctx = context(&[("name", "Bob")]);
    assert_eq!(
        renderer.render(template, &ctx).unwrap(),
        renderer.render(template, &ctx).unwrap()
    );
}

#[test]
fn test_unterminated_marker_stays_literal() {
    let dir = tempfile::TempDir::new().unwrap();
    common::write_template(
        dir.path(),
        "stray.yaml",
        "name: Stray\nsegments:\n  - text: \"**bold\"\n    markdown: true\n",
    );
    let catalog = TemplateCatalog::load(dir.path()).unwrap();
    let segments = TemplateRenderer::new(true)
        .render(catalog.get("stray").unwrap(), &HashMap::new())
        .unwrap();
    assert_eq!(
        segments,
        vec![StyledSegment::new("**bold", SegmentStyles::default())]
    );
}

#[test]
fn test_agenda_template_renders_from_script_shaped_context() {
    let catalog = TemplateCatalog::load(std::path::Path::new("templates")).unwrap();
    let template = catalog.get("agenda").unwrap();

    let ctx = context(&[
        ("week_number", "10"),
        ("week_start_date", "2025-03-03"),
        ("week_end_date", "2025-03-09"),
        ("days", "Monday 2025-03-03\nTuesday 2025-03-04"),
    ]);
    let segments = TemplateRenderer::new(true).render(template, &ctx).unwrap();
    let text: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert!(text.contains("Week 10"));
    assert!(text.contains("2025-03-03 - 2025-03-09"));
    assert!(text.contains("Monday 2025-03-03"));
}
