//! Scaffold a `leadmap.toml` holding the default scoring tables and
//! archetype catalog, ready for local editing.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{LeadmapConfig, DEFAULT_CONFIG_FILE};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let rendered = toml::to_string_pretty(&LeadmapConfig::default())?;
    std::fs::write(&config_path, rendered).map_err(|err| {
        crate::errors::LeadmapError::io("failed to write config", &config_path, err)
    })?;
    println!("Created {DEFAULT_CONFIG_FILE} configuration file");

    Ok(())
}
