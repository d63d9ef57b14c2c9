//! Configuration view and validation commands: `jobtrack config`.

use anyhow::Result;
use std::path::Path;

use jobtrack::config::{CONFIG_FILE, CliOverrides, TrackerConfig, TrackerToml, get_tracker_dir};

use super::super::{Cli, ConfigCommands};

pub fn cmd_config(project_dir: &Path, cli: &Cli, command: Option<ConfigCommands>) -> Result<()> {
    let tracker_dir = get_tracker_dir(project_dir);
    let config_path = tracker_dir.join(CONFIG_FILE);

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Jobtrack Configuration");
            println!("======================");
            println!();

            let toml = if config_path.exists() {
                println!("Config file: {}", config_path.display());
                TrackerToml::load(&config_path)?
            } else {
                println!("No {} found at {}", CONFIG_FILE, config_path.display());
                println!("Using default configuration.");
                TrackerToml::default()
            };
            println!();

            println!("[data]");
            match &toml.data.jobs {
                Some(jobs) => println!("  jobs = \"{}\"", jobs.display()),
                None => println!("  jobs = (bundled sample)"),
            }
            println!();

            println!("[storage]");
            if let Some(path) = &toml.storage.path {
                println!("  path = \"{}\"", path.display());
            }
            println!("  saved_key = \"{}\"", toml.storage.saved_key);
            println!();

            println!("[display]");
            println!("  hamburger = {}", toml.display.hamburger);
            println!();

            // Effective values include env and CLI overrides
            let config = TrackerConfig::new(
                project_dir.to_path_buf(),
                CliOverrides {
                    jobs: cli.jobs.clone(),
                    storage: cli.storage.clone(),
                },
            )?;
            println!("Effective values (with env/CLI overrides):");
            match &config.jobs_path {
                Some(path) => println!("  jobs = \"{}\"", path.display()),
                None => println!("  jobs = (bundled sample)"),
            }
            println!("  storage = \"{}\"", config.storage_path.display());
            println!();

            if !config_path.exists() {
                println!("Run 'jobtrack config init' to create a {} file.", CONFIG_FILE);
                println!();
            }
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            if !config_path.exists() {
                println!("No {} found. Using defaults (valid).", CONFIG_FILE);
                return Ok(());
            }

            let toml = TrackerToml::load(&config_path)?;
            let warnings = toml.validate(project_dir);

            if warnings.is_empty() {
                println!("Configuration is valid.");
            } else {
                println!("Configuration warnings:");
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            if config_path.exists() {
                println!("{} already exists at {}", CONFIG_FILE, config_path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            if !tracker_dir.exists() {
                std::fs::create_dir_all(&tracker_dir)?;
            }

            TrackerToml::default().save(&config_path)?;

            println!("Created {} at {}", CONFIG_FILE, config_path.display());
            println!();
            println!("You can now customize:");
            println!("  - [data] jobs");
            println!("  - [storage] path, saved_key");
            println!("  - [display] hamburger");
            println!();
        }
    }

    Ok(())
}
