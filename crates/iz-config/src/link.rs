//! Link classification and menu access.

use crate::schema::{Link, SiteConfig};

/// Where a link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Absolute URL to another site (`https://`, `mailto:`, `//host`).
    External,
    /// Site-relative path.
    Internal,
    /// In-page anchor (`#...`).
    Fragment,
}

/// Navigation menus declared in the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMenu {
    Header,
    Footer,
    Social,
}

impl Link {
    /// Classify the link destination.
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        let href = self.href.as_str();
        if href.starts_with('#') {
            LinkKind::Fragment
        } else if href.starts_with("//") || has_external_scheme(href) {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    /// Whether the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.kind() == LinkKind::External
    }
}

fn has_external_scheme(href: &str) -> bool {
    const SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];
    SCHEMES.iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl SiteConfig {
    /// Links of a menu in declared order. Empty when the menu is not configured.
    #[must_use]
    pub fn nav_links(&self, menu: NavMenu) -> &[Link] {
        let links = match menu {
            NavMenu::Header => &self.header_nav_links,
            NavMenu::Footer => &self.footer_nav_links,
            NavMenu::Social => &self.social_links,
        };
        links.as_deref().unwrap_or_default()
    }
}
