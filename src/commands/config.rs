//! Config subcommands handler

use anyhow::Result;

use oscrec::cli::ConfigCommands;
use oscrec::Config;

pub fn handle(command: ConfigCommands, config: &Config) -> Result<()> {
    match command {
        ConfigCommands::Show => handle_show(config),
        ConfigCommands::Path => handle_path(),
        ConfigCommands::Init => handle_init(),
    }
}

/// Show the effective configuration as TOML.
fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file is already there.
fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }

    let path = Config::default().save()?;
    println!("Created {}", path.display());
    Ok(())
}
