//! Interchange formats for configuration files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{ConfigError, SiteConfig};

/// Serialization format of a configuration file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))
    }

    /// Parse a configuration document.
    pub fn parse(self, content: &str) -> Result<SiteConfig, ConfigError> {
        let config = match self {
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(config)
    }

    /// Serialize a configuration. JSON output is pretty-printed.
    pub fn render(self, config: &SiteConfig) -> Result<String, ConfigError> {
        match self {
            Self::Toml => {
                toml::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            Self::Json => serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Yaml => {
                serde_yaml::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
        }
    }

    /// Canonical file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown format '{other}', expected toml, json or yaml")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_config;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("site.toml")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("site.JSON")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("a/site.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("site.yaml")).unwrap(), Format::Yaml);
    }

    #[test]
    fn test_from_path_unsupported() {
        let err = Format::from_path(Path::new("site.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(p) if p == PathBuf::from("site.ini")));

        let err = Format::from_path(Path::new("site")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_round_trip_all_formats() {
        let config = site_config();
        for format in [Format::Toml, Format::Json, Format::Yaml] {
            let rendered = format.render(config).unwrap();
            let parsed = format.parse(&rendered).unwrap();
            assert_eq!(&parsed, config, "round-trip through {format}");
        }
    }

    #[test]
    fn test_round_trip_preserves_absence() {
        let mut config = SiteConfig::new("Blog", "A blog");
        config.subtitle = Some(String::new());

        for format in [Format::Toml, Format::Json, Format::Yaml] {
            let parsed = format.parse(&format.render(&config).unwrap()).unwrap();
            assert_eq!(parsed.subtitle, Some(String::new()));
            assert!(parsed.hero.is_none());
            assert!(parsed.posts_per_page.is_none());
        }
    }

    #[test]
    fn test_parse_errors_map_to_variants() {
        assert!(matches!(
            Format::Toml.parse("title = ").unwrap_err(),
            ConfigError::Toml(_)
        ));
        assert!(matches!(
            Format::Json.parse("{").unwrap_err(),
            ConfigError::Json(_)
        ));
        assert!(matches!(
            Format::Yaml.parse("title: [").unwrap_err(),
            ConfigError::Yaml(_)
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("TOML".parse::<Format>().unwrap(), Format::Toml);
        assert!("xml".parse::<Format>().unwrap_err().contains("xml"));
    }
}
