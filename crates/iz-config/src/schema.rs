//! Typed shape of the site configuration.
//!
//! Field names serialize in camelCase (`headerNavLinks`, `formUrl`, ...) so
//! the same files can be shared with JavaScript tooling. Absent optional
//! fields are skipped on output, which keeps "absent" and "empty" distinct
//! across a round-trip.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// An image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    /// Path or URL of the image.
    pub src: String,
    /// Accessibility text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Image {
    /// Create an image with only a source.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            caption: None,
        }
    }

    /// Set the alt text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// A navigation entry: display label plus destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Display label.
    pub text: String,
    /// Absolute URL or site-relative path. Not checked for reachability.
    pub href: String,
}

impl Link {
    #[must_use]
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// Top-of-page promotional block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text. Markdown that may embed raw inline HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Call-to-action links, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Link>>,
}

/// Newsletter sign-up prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Subscribe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Endpoint the sign-up form posts to.
    pub form_url: String,
}

/// Site-wide configuration consumed by the site generator.
///
/// Only `title` and `description` are required; every other field may be
/// absent. Link sequences keep declaration order, which is the order menus
/// are rendered in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Image>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    /// Default social/preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_nav_links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_nav_links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<Subscribe>,
    /// Blog listing page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_per_page: Option<NonZeroU32>,
    /// Project listing page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_per_page: Option<NonZeroU32>,
}

impl SiteConfig {
    /// Create a minimal configuration with only the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            logo: None,
            title: title.into(),
            subtitle: None,
            description: description.into(),
            image: None,
            header_nav_links: None,
            footer_nav_links: None,
            social_links: None,
            hero: None,
            subscribe: None,
            posts_per_page: None,
            projects_per_page: None,
        }
    }
}
