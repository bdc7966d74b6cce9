// ABOUTME: Command implementations for the thermprint CLI
// ABOUTME: Builds the print service from configuration and executes subcommands

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use super::config::Config;
use crate::catalog::TemplateCatalog;
use crate::printer::PrinterClient;
use crate::renderer::{RenderContext, StyledSegment, TemplateRenderer};
use crate::scripts::ScriptRegistry;
use crate::service::PrintService;

pub fn list_templates(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let scripts = ScriptRegistry::with_builtins();
    let mut keys = catalog.list();
    keys.sort();
    if keys.is_empty() {
        println!(
            "No templates found in {:?}",
            config.printer.template_dir
        );
        return Ok(());
    }
    for key in keys {
        let template = catalog.get(key)?;
        let script_marker = if scripts.has_script(key) { " (script)" } else { "" };
        println!("{key}{script_marker} - {}", template.name);
    }
    Ok(())
}

pub fn show_template(config: &Config, key: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let template = catalog.get(key)?;

    println!("{} ({key})", template.name);
    if let Some(description) = &template.description {
        println!("{description}");
    }
    if template.variables.is_empty() {
        println!("No declared variables.");
        return Ok(());
    }
    println!("Variables:");
    for var in &template.variables {
        let required = if var.required { "required" } else { "optional" };
        let markdown = if var.markdown { ", markdown" } else { "" };
        println!("  {} ({required}{markdown}) - {}", var.name, var.description);
    }
    Ok(())
}

pub fn print_template(
    config: &Config,
    key: &str,
    input: RenderContext,
    preview: bool,
) -> Result<()> {
    let service = build_service(config, !preview)?;
    let context = service.resolve_context(key, input)?;

    check_required_variables(&service, key, &context)?;

    if preview {
        let segments = service.preview(key, &context)?;
        print_preview(&segments);
        return Ok(());
    }

    service.print(key, &context)?;
    println!("Printed using template '{key}'.");
    Ok(())
}

pub fn settings_set_address(
    config: &mut Config,
    path: Option<&Path>,
    address: String,
) -> Result<()> {
    config.printer.address = Some(address.clone());
    config.save(path)?;
    println!("Printer address set to {address}");
    Ok(())
}

pub fn settings_set_width(config: &mut Config, path: Option<&Path>, width: usize) -> Result<()> {
    if width == 0 {
        bail!("Characters per line must be positive");
    }
    config.printer.chars_per_line = width;
    config.save(path)?;
    println!("Characters per line set to {width}");
    Ok(())
}

pub fn settings_set_folding(
    config: &mut Config,
    path: Option<&Path>,
    enabled: bool,
) -> Result<()> {
    config.printer.accent_folding = enabled;
    config.save(path)?;
    println!("Accent folding set to {enabled}");
    Ok(())
}

pub fn settings_show(config: &Config) -> Result<()> {
    let address = config.printer.address.as_deref().unwrap_or("not set");
    println!("Printer address: {address}");
    println!("Characters per line: {}", config.printer.chars_per_line);
    println!("Accent folding: {}", config.printer.accent_folding);
    println!("Timeout seconds: {}", config.printer.timeout_secs);
    println!("Template directory: {:?}", config.printer.template_dir);
    Ok(())
}

fn load_catalog(config: &Config) -> Result<TemplateCatalog> {
    TemplateCatalog::load(&config.printer.template_dir).with_context(|| {
        format!(
            "Failed to load templates from {:?}",
            config.printer.template_dir
        )
    })
}

fn build_service(config: &Config, require_address: bool) -> Result<PrintService> {
    let catalog = load_catalog(config)?;
    let address = match config.printer.address.clone() {
        Some(address) => address,
        None if require_address => {
            bail!("Printer address not set. Use 'thermprint settings set-address'.")
        }
        // Previews never open a connection, so any placeholder will do.
        None => "127.0.0.1".to_string(),
    };
    let client = PrinterClient::network(
        &address,
        config.printer.chars_per_line,
        Duration::from_secs(config.printer.timeout_secs),
    );
    let renderer = TemplateRenderer::new(config.printer.accent_folding);
    Ok(PrintService::new(
        catalog,
        ScriptRegistry::with_builtins(),
        renderer,
        client,
    ))
}

fn check_required_variables(
    service: &PrintService,
    key: &str,
    context: &RenderContext,
) -> Result<()> {
    let missing: Vec<&str> = service
        .template(key)?
        .variables
        .iter()
        .filter(|v| v.required && !context.contains_key(&v.name))
        .map(|v| v.name.as_str())
        .collect();
    if !missing.is_empty() {
        bail!(
            "Missing required variables for '{key}': {}. Pass them with --var name=value.",
            missing.join(", ")
        );
    }
    Ok(())
}

fn print_preview(segments: &[StyledSegment]) {
    for segment in segments {
        print!("{}", segment.text);
    }
    println!();
}
