//! CLI error types.

use iz_config::ConfigError;
use iz_markup::MarkupError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Markup(#[from] MarkupError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
