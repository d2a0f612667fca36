//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod hero;
pub(crate) mod show;

use std::path::Path;

use iz_config::{LoadedConfig, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use hero::HeroArgs;
pub(crate) use show::ShowArgs;

/// Load the configuration and report where it came from.
fn load_config(path: Option<&Path>, output: &Output) -> Result<LoadedConfig, CliError> {
    let loaded = SiteConfig::load(path)?;
    tracing::debug!(source = %source_label(&loaded), "Configuration loaded");
    match &loaded.source {
        Some(source) => output.info(&format!("Config: {}", source.display())),
        None => output.warning("Config: no site file found, using built-in configuration"),
    }
    Ok(loaded)
}

/// Where a configuration came from, for display.
fn source_label(loaded: &LoadedConfig) -> String {
    loaded.source.as_ref().map_or_else(
        || "built-in".to_owned(),
        |path| path.display().to_string(),
    )
}
