//! `iz check` command implementation.

use std::path::PathBuf;

use clap::Args;
use iz_config::{LinkKind, NavMenu, SiteConfig};
use iz_markup::contains_html;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long, env = "IZ_CONFIG")]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loading already validates; this prints what was validated.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let loaded = super::load_config(self.config.as_deref(), output)?;
        // Built-in config skips file validation, so check it explicitly.
        loaded.config.validate()?;

        output.highlight(&loaded.config.title);
        for line in summarize(&loaded.config) {
            output.info(&line);
        }
        if hero_embeds_html(&loaded.config) {
            output.warning("hero.text embeds raw HTML; it is rendered verbatim unless --policy is set");
        }
        output.success(&format!(
            "Configuration OK ({})",
            super::source_label(&loaded)
        ));
        Ok(())
    }
}

/// Whether the hero body text contains raw HTML.
fn hero_embeds_html(config: &SiteConfig) -> bool {
    config
        .hero
        .as_ref()
        .and_then(|hero| hero.text.as_deref())
        .is_some_and(contains_html)
}

/// Human-readable summary lines for a configuration.
fn summarize(config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    for (label, menu) in [
        ("Header links", NavMenu::Header),
        ("Footer links", NavMenu::Footer),
        ("Social links", NavMenu::Social),
    ] {
        let links = config.nav_links(menu);
        let external = links
            .iter()
            .filter(|link| link.kind() == LinkKind::External)
            .count();
        lines.push(format!("{label}: {} ({external} external)", links.len()));
    }

    let hero = match &config.hero {
        Some(hero) => {
            let actions = hero.actions.as_deref().map_or(0, <[_]>::len);
            format!("Hero: {actions} action(s)")
        }
        None => "Hero: not configured".to_owned(),
    };
    lines.push(hero);

    lines.push(match &config.subscribe {
        Some(subscribe) => format!("Subscribe form: {}", subscribe.form_url),
        None => "Subscribe form: not configured".to_owned(),
    });

    let page_size = |size: Option<std::num::NonZeroU32>| {
        size.map_or_else(|| "unset".to_owned(), |n| n.to_string())
    };
    lines.push(format!(
        "Page sizes: posts {}, projects {}",
        page_size(config.posts_per_page),
        page_size(config.projects_per_page)
    ));

    lines
}
