//! Site configuration for the Index Zero blog.
//!
//! Defines the [`SiteConfig`] schema consumed by the site generator, the
//! built-in configuration ([`site_config`]) and a loader for override files
//! with auto-discovery in parent directories.
//!
//! ## Config Files
//!
//! [`SiteConfig::load`] looks for `site.toml`, `site.json`, `site.yaml` or
//! `site.yml` (in that order) in the current directory and its parents.
//! When none exists, the built-in configuration is used.
//!
//! ## Environment Variable Expansion
//!
//! URL-like configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `logo.src`, `image.src`, `hero.image.src`
//! - `href` of every link in `headerNavLinks`, `footerNavLinks`,
//!   `socialLinks` and `hero.actions`
//! - `subscribe.formUrl`

mod defaults;
mod expand;
mod format;
mod link;
mod pagination;
mod schema;

use std::path::{Path, PathBuf};

pub use defaults::site_config;
pub use format::Format;
pub use link::{LinkKind, NavMenu};
pub use pagination::Pagination;
pub use schema::{Hero, Image, Link, SiteConfig, Subscribe};

/// Configuration filenames to search for, in priority order.
const CONFIG_FILENAMES: [&str; 4] = ["site.toml", "site.json", "site.yaml", "site.yml"];

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Serialization error.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
    /// File extension does not map to a known format.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`subscribe.formUrl`").
        field: String,
        /// Error message (e.g., "${`NEWSLETTER_URL`} not set").
        message: String,
    },
}

/// A configuration together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The effective configuration.
    pub config: SiteConfig,
    /// Path of the loaded file, `None` for the built-in configuration.
    pub source: Option<PathBuf>,
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn validate_image(image: &Image, field: &str) -> Result<(), ConfigError> {
    require_non_empty(&image.src, &format!("{field}.src"))
}

fn validate_links(links: Option<&[Link]>, field: &str) -> Result<(), ConfigError> {
    for (i, link) in links.unwrap_or_default().iter().enumerate() {
        require_non_empty(&link.text, &format!("{field}[{i}].text"))?;
        require_non_empty(&link.href, &format!("{field}[{i}].href"))?;
    }
    Ok(())
}

fn expand_links(links: Option<&mut Vec<Link>>, field: &str) -> Result<(), ConfigError> {
    for (i, link) in links.into_iter().flatten().enumerate() {
        expand::expand_in_place(&mut link.href, &format!("{field}[{i}].href"))?;
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from file, falling back to the built-in one.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for a `site.*` file in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if parsing,
    /// expansion or validation of the file fails.
    pub fn load(config_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path).map(|config| LoadedConfig {
                config,
                source: Some(path.to_path_buf()),
            });
        }

        let cwd = std::env::current_dir()?;
        Self::load_from_dir(&cwd, None)
    }

    /// Discover a config file starting at `start`, or use the built-in one.
    ///
    /// The search stops after `boundary` when given, otherwise at the root.
    fn load_from_dir(start: &Path, boundary: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        match Self::discover_config(start, boundary) {
            Some(discovered) => Ok(LoadedConfig {
                config: Self::from_file(&discovered)?,
                source: Some(discovered),
            }),
            None => {
                tracing::debug!(start = %start.display(), "No config file found, using built-in");
                Ok(LoadedConfig {
                    config: site_config().clone(),
                    source: None,
                })
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// The format is chosen by extension. Environment references are
    /// expanded before validation.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, expanded or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let mut config = format.parse(&content)?;
        tracing::debug!(path = %path.display(), %format, "Loaded config file");

        config.expand_env_vars()?;
        config.validate()?;

        Ok(config)
    }

    /// Search for a config file in `start` and its parents, up to `boundary`.
    fn discover_config(start: &Path, boundary: Option<&Path>) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for filename in CONFIG_FILENAMES {
                let candidate = current.join(filename);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "Discovered config file");
                    return Some(candidate);
                }
            }
            if boundary == Some(current.as_path()) || !current.pop() {
                return None;
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that required fields are present and non-empty. Page sizes
    /// are positive by construction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.description, "description")?;

        if let Some(logo) = &self.logo {
            validate_image(logo, "logo")?;
        }
        if let Some(image) = &self.image {
            validate_image(image, "image")?;
        }

        validate_links(self.header_nav_links.as_deref(), "headerNavLinks")?;
        validate_links(self.footer_nav_links.as_deref(), "footerNavLinks")?;
        validate_links(self.social_links.as_deref(), "socialLinks")?;

        if let Some(hero) = &self.hero {
            if let Some(image) = &hero.image {
                validate_image(image, "hero.image")?;
            }
            validate_links(hero.actions.as_deref(), "hero.actions")?;
        }

        if let Some(subscribe) = &self.subscribe {
            require_non_empty(&subscribe.form_url, "subscribe.formUrl")?;
        }

        Ok(())
    }

    /// Expand environment variable references in URL-like fields.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(logo) = &mut self.logo {
            expand::expand_in_place(&mut logo.src, "logo.src")?;
        }
        if let Some(image) = &mut self.image {
            expand::expand_in_place(&mut image.src, "image.src")?;
        }

        expand_links(self.header_nav_links.as_mut(), "headerNavLinks")?;
        expand_links(self.footer_nav_links.as_mut(), "footerNavLinks")?;
        expand_links(self.social_links.as_mut(), "socialLinks")?;

        if let Some(hero) = &mut self.hero {
            if let Some(image) = &mut hero.image {
                expand::expand_in_place(&mut image.src, "hero.image.src")?;
            }
            expand_links(hero.actions.as_mut(), "hero.actions")?;
        }

        if let Some(subscribe) = &mut self.subscribe {
            expand::expand_in_place(&mut subscribe.form_url, "subscribe.formUrl")?;
        }

        Ok(())
    }
}
