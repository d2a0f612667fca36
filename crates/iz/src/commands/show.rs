//! `iz show` command implementation.

use std::path::PathBuf;

use clap::Args;
use iz_config::Format;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long, env = "IZ_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: toml, json or yaml.
    #[arg(short, long, default_value_t = Format::Toml)]
    format: Format,
}

impl ShowArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let rendered = self.render(output)?;
        output.document(&rendered)?;
        Ok(())
    }

    /// Load the configuration and serialize it in the selected format.
    fn render(&self, output: &Output) -> Result<String, CliError> {
        let loaded = super::load_config(self.config.as_deref(), output)?;
        Ok(self.format.render(&loaded.config)?)
    }
}
