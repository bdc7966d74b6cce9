// ABOUTME: Main application orchestration for the thermprint CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::args::{Args, Commands, SettingsCommands};
use super::commands;
use super::config::Config;

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        debug!("Starting thermprint v{}", env!("CARGO_PKG_VERSION"));
        let config_path = args.config.as_deref();

        match args.command {
            Commands::Templates => commands::list_templates(&self.config),
            Commands::Show { template } => commands::show_template(&self.config, &template),
            Commands::Print {
                template,
                vars,
                preview,
            } => {
                let input = Args::parse_variables(&vars)?;
                commands::print_template(&self.config, &template, input, preview)
            }
            Commands::Settings(settings) => match settings {
                SettingsCommands::SetAddress { address } => {
                    commands::settings_set_address(&mut self.config, config_path, address)
                }
                SettingsCommands::SetWidth { width } => {
                    commands::settings_set_width(&mut self.config, config_path, width)
                }
                SettingsCommands::SetFolding { enabled } => {
                    commands::settings_set_folding(&mut self.config, config_path, enabled)
                }
                SettingsCommands::Show => commands::settings_show(&self.config),
            },
        }
    }
}
