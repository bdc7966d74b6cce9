// ABOUTME: Binary entry point for the thermprint CLI
// ABOUTME: Loads configuration and hands control to the application

use anyhow::Result;
use thermprint::cli::{App, Args, Config};

fn main() -> Result<()> {
    let args = Args::parse_args();
    let config = Config::load(args.config.as_deref())?;

    let mut app = App::new(config);
    app.run(args)?;

    Ok(())
}
