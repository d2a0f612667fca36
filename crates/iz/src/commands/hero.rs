//! `iz hero` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use iz_config::Hero;
use iz_markup::{MarkupError, MarkupPolicy, escape_html, render_markup};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the hero command.
#[derive(Args)]
pub(crate) struct HeroArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long, env = "IZ_CONFIG")]
    config: Option<PathBuf>,

    /// Treatment of embedded HTML: trusted, escape or reject.
    #[arg(short, long, default_value_t = MarkupPolicy::Trusted)]
    policy: MarkupPolicy,
}

impl HeroArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        match self.render(output)? {
            Some(html) => output.document(&html)?,
            None => output.warning("No hero block configured"),
        }
        Ok(())
    }

    /// Load the configuration and render its hero block, if any.
    fn render(&self, output: &Output) -> Result<Option<String>, CliError> {
        let loaded = super::load_config(self.config.as_deref(), output)?;
        let Some(hero) = &loaded.config.hero else {
            return Ok(None);
        };
        Ok(Some(render_hero(hero, self.policy)?))
    }
}

/// Render the hero block as an HTML section.
fn render_hero(hero: &Hero, policy: MarkupPolicy) -> Result<String, MarkupError> {
    let mut html = String::from("<section class=\"hero\">\n");

    if let Some(title) = &hero.title {
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));
    }
    if let Some(text) = &hero.text {
        html.push_str(&render_markup(text, policy)?);
    }
    if let Some(image) = &hero.image {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&image.src),
            escape_html(image.alt.as_deref().unwrap_or_default())
        );
    }
    for action in hero.actions.iter().flatten() {
        let _ = writeln!(
            html,
            "<a class=\"action\" href=\"{}\">{}</a>",
            escape_html(&action.href),
            escape_html(&action.text)
        );
    }

    html.push_str("</section>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::write_config;
    use iz_config::{Link, site_config};
    use pretty_assertions::assert_eq;

    const HERO_TOML: &str = r#"
title = "Scratch"
description = "A scratch blog"

[hero]
title = "Hi"
text = "See <a href='/about'>about</a>."
"#;

    fn hero_args(config: PathBuf, policy: MarkupPolicy) -> HeroArgs {
        HeroArgs {
            config: Some(config),
            policy,
        }
    }

    fn builtin_hero() -> &'static Hero {
        site_config().hero.as_ref().unwrap()
    }

    #[test]
    fn test_render_builtin_hero() {
        let html = render_hero(builtin_hero(), MarkupPolicy::Trusted).unwrap();
        assert!(html.starts_with("<section class=\"hero\">\n<h1>Welcome to my personal blog!</h1>\n<p>"));
        assert!(html.contains("<a href='https://plank.co'>Plank</a>"));
        assert!(html.contains(
            "<img src=\"/hero.jpg\" alt=\"A person sitting on a couch smiling at his coworkers\">"
        ));
        assert!(html.contains("<a class=\"action\" href=\"/contact\">Get in Touch</a>"));
        assert!(html.ends_with("</section>\n"));
    }

    #[test]
    fn test_render_hero_reject_policy() {
        let err = render_hero(builtin_hero(), MarkupPolicy::Reject).unwrap_err();
        assert!(err.to_string().contains("Embedded HTML"));
    }

    #[test]
    fn test_render_hero_escapes_title_and_actions() {
        let hero = Hero {
            title: Some("Tips & <Tricks>".to_owned()),
            actions: Some(vec![Link::new("Say \"hi\"", "/contact?a=1&b=2")]),
            ..Hero::default()
        };
        let html = render_hero(&hero, MarkupPolicy::Trusted).unwrap();
        assert_eq!(
            html,
            "<section class=\"hero\">\n\
             <h1>Tips &amp; &lt;Tricks&gt;</h1>\n\
             <a class=\"action\" href=\"/contact?a=1&amp;b=2\">Say &quot;hi&quot;</a>\n\
             </section>\n"
        );
    }

    #[test]
    fn test_hero_from_file_with_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "site.toml", HERO_TOML);

        let html = hero_args(path.clone(), MarkupPolicy::Trusted)
            .render(&Output::new())
            .unwrap()
            .unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<a href='/about'>about</a>"));

        let html = hero_args(path, MarkupPolicy::Escape)
            .render(&Output::new())
            .unwrap()
            .unwrap();
        assert!(html.contains("&lt;a href='/about'&gt;about&lt;/a&gt;"));
    }

    #[test]
    fn test_hero_reject_policy_propagates_markup_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "site.toml", HERO_TOML);

        let err = hero_args(path, MarkupPolicy::Reject)
            .execute(&Output::new())
            .unwrap_err();
        assert!(matches!(err, CliError::Markup(_)));
    }

    #[test]
    fn test_hero_missing_block_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "site.json",
            r#"{"title": "Scratch", "description": "A scratch blog"}"#,
        );

        let args = hero_args(path.clone(), MarkupPolicy::Trusted);
        assert_eq!(args.render(&Output::new()).unwrap(), None);
        assert!(hero_args(path, MarkupPolicy::Trusted)
            .execute(&Output::new())
            .is_ok());
    }
}
