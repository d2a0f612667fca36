//! The built-in Index Zero configuration.

use std::num::NonZeroU32;
use std::sync::LazyLock;

use crate::schema::{Hero, Image, Link, SiteConfig, Subscribe};

const HERO_IMAGE: &str = "/hero.jpg";
const HERO_IMAGE_ALT: &str = "A person sitting on a couch smiling at his coworkers";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/massimo-triassi-b430b5157/";
const PAGE_SIZE: NonZeroU32 = NonZeroU32::new(8).unwrap();

const HERO_TEXT: &str = concat!(
    "I'm **Massimo Triassi**, a Senior Back-end developer and Team lead at ",
    "<a href='https://plank.co'>Plank</a>. ",
    "I'm passionate about building great user experiences and I love to share my knowledge with others. ",
    "I'm also a big fan of open source and I'm always looking for new projects to contribute to. ",
    "If you're interested in working with me, feel free to get in touch. ",
    "You can find more about me on my ",
    "<a href='https://www.linkedin.com/in/massimo-triassi-b430b5157/'>LinkedIn</a> profile or ",
    "you can see some of my work on my <a href='https://github.com/massimo-triassi'>GitHub</a> profile.",
);

static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::index_zero);

/// Shared read-only instance of the built-in configuration.
///
/// Built on first access; every caller sees the same value.
#[must_use]
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

fn hero_image() -> Image {
    Image::new(HERO_IMAGE).with_alt(HERO_IMAGE_ALT)
}

impl SiteConfig {
    /// Build the Index Zero blog configuration.
    #[must_use]
    pub fn index_zero() -> Self {
        Self {
            logo: None,
            title: "Index Zero".to_owned(),
            subtitle: Some("Musings on development by Massimo Triassi".to_owned()),
            description: "A technology blog by Massimo Triassi".to_owned(),
            image: Some(hero_image()),
            header_nav_links: Some(vec![
                Link::new("Home", "/"),
                Link::new("Blog", "/blog"),
                Link::new("Tags", "/tags"),
                Link::new("Resume", "https://www.triassi.ca?utm_source=blog"),
            ]),
            footer_nav_links: Some(vec![
                Link::new("About", "/about"),
                Link::new("Contact", "/contact"),
                Link::new("Terms", "/terms"),
            ]),
            social_links: Some(vec![
                Link::new("LinkedIn", LINKEDIN_URL),
                Link::new("Bluesky", "https://bsky.app/profile/triassi.dev"),
            ]),
            hero: Some(Hero {
                title: Some("Welcome to my personal blog!".to_owned()),
                text: Some(HERO_TEXT.to_owned()),
                image: Some(hero_image()),
                actions: Some(vec![Link::new("Get in Touch", "/contact")]),
            }),
            subscribe: Some(Subscribe {
                title: Some("Subscribe to the Index Zero Newsletter".to_owned()),
                text: Some(
                    "One update per week. All the latest posts directly in your inbox.".to_owned(),
                ),
                form_url: "#".to_owned(),
            }),
            posts_per_page: Some(PAGE_SIZE),
            projects_per_page: Some(PAGE_SIZE),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::index_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hrefs(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.href.as_str()).collect()
    }

    #[test]
    fn test_required_fields_present() {
        let config = site_config();
        assert_eq!(config.title, "Index Zero");
        assert_eq!(config.description, "A technology blog by Massimo Triassi");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_header_nav_links() {
        let links = site_config().header_nav_links.as_deref().unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0], Link::new("Home", "/"));
        assert_eq!(
            hrefs(links),
            vec!["/", "/blog", "/tags", "https://www.triassi.ca?utm_source=blog"]
        );
    }

    #[test]
    fn test_footer_nav_links_order() {
        let links = site_config().footer_nav_links.as_deref().unwrap();
        let labels: Vec<&str> = links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, vec!["About", "Contact", "Terms"]);
    }

    #[test]
    fn test_social_links_order() {
        let links = site_config().social_links.as_deref().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text, "LinkedIn");
        assert_eq!(links[1].text, "Bluesky");
    }

    #[test]
    fn test_reading_twice_yields_same_order() {
        let first = site_config().header_nav_links.clone();
        let second = site_config().header_nav_links.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hero_block() {
        let hero = site_config().hero.as_ref().unwrap();
        assert_eq!(hero.title.as_deref(), Some("Welcome to my personal blog!"));
        assert_eq!(hero.actions.as_deref().unwrap()[0].href, "/contact");
        assert_eq!(hero.image, site_config().image);

        let text = hero.text.as_deref().unwrap();
        assert!(text.starts_with("I'm **Massimo Triassi**"));
        assert!(text.contains("<a href='https://plank.co'>Plank</a>"));
        assert!(text.ends_with("profile."));
    }

    #[test]
    fn test_subscribe_block() {
        let subscribe = site_config().subscribe.as_ref().unwrap();
        assert_eq!(subscribe.form_url, "#");
        assert_eq!(
            subscribe.title.as_deref(),
            Some("Subscribe to the Index Zero Newsletter")
        );
    }

    #[test]
    fn test_page_sizes() {
        let config = site_config();
        assert_eq!(config.posts_per_page.map(NonZeroU32::get), Some(8));
        assert_eq!(config.projects_per_page.map(NonZeroU32::get), Some(8));
    }

    #[test]
    fn test_default_matches_shared_instance() {
        assert_eq!(&SiteConfig::default(), site_config());
        assert!(site_config().logo.is_none());
    }
}
