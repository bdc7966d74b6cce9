// ABOUTME: CLI module for the thermprint application
// ABOUTME: Exports command line arguments, configuration, and the app entry point

pub mod app;
pub mod args;
pub mod commands;
pub mod config;

pub use app::App;
pub use args::{Args, Commands, SettingsCommands};
pub use config::Config;
