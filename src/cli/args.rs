// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for thermprint

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "thermprint")]
#[command(about = "Render YAML receipt templates and print them on a network thermal printer")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available templates
    Templates,

    /// Show a template's declared variables
    Show {
        #[arg(help = "Template key")]
        template: String,
    },

    /// Render a template and send it to the printer
    Print {
        #[arg(help = "Template key")]
        template: String,

        #[arg(
            short = 'V',
            long = "var",
            help = "Template variables or script parameters (key=value)"
        )]
        vars: Vec<String>,

        #[arg(long, help = "Render to stdout instead of the printer")]
        preview: bool,
    },

    /// Manage persisted settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Set the printer network address
    SetAddress {
        #[arg(help = "Printer address, host or host:port")]
        address: String,
    },

    /// Set the number of characters per printed line
    SetWidth {
        #[arg(help = "Characters per line")]
        width: usize,
    },

    /// Enable or disable accent folding
    SetFolding {
        #[arg(help = "true to fold accented letters to ASCII")]
        enabled: bool,
    },

    /// Show current settings
    Show,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, String>> {
        let mut variables = HashMap::new();
        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.trim().to_string(), value.to_string());
            } else {
                anyhow::bail!("Invalid variable format '{}', expected key=value", var);
            }
        }
        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = vec!["name=Alice".to_string(), "note=a=b".to_string()];
        let parsed = Args::parse_variables(&vars).unwrap();
        assert_eq!(parsed["name"], "Alice");
        assert_eq!(parsed["note"], "a=b");
    }

    #[test]
    fn test_parse_variables_rejects_bare_key() {
        assert!(Args::parse_variables(&["name".to_string()]).is_err());
    }
}
