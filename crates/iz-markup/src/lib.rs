//! Rendering of configuration text fields to HTML.
//!
//! Text fields such as `hero.text` are markdown that may embed raw HTML
//! (anchor tags in the built-in configuration). [`render_markup`] converts
//! them to HTML and applies a [`MarkupPolicy`] to the embedded fragments:
//!
//! - [`MarkupPolicy::Trusted`]: emitted verbatim (default)
//! - [`MarkupPolicy::Escape`]: emitted as visible, escaped text
//! - [`MarkupPolicy::Reject`]: rendering fails with [`MarkupError::EmbeddedHtml`]

use std::fmt;
use std::str::FromStr;

use pulldown_cmark::{Event, Options, Parser, html};

/// How embedded HTML in text fields is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkupPolicy {
    /// Pass embedded HTML through unchanged.
    #[default]
    Trusted,
    /// Escape embedded HTML so it renders as text.
    Escape,
    /// Refuse text containing embedded HTML.
    Reject,
}

impl FromStr for MarkupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trusted" => Ok(Self::Trusted),
            "escape" => Ok(Self::Escape),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown markup policy '{other}', expected trusted, escape or reject"
            )),
        }
    }
}

impl fmt::Display for MarkupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Trusted => "trusted",
            Self::Escape => "escape",
            Self::Reject => "reject",
        })
    }
}

/// Error type for markup rendering.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// Text contains raw HTML while the policy rejects it.
    #[error("Embedded HTML is not allowed: {fragment}")]
    EmbeddedHtml {
        /// The first offending HTML fragment.
        fragment: String,
    },
}

/// Render markdown `text` to HTML under `policy`.
///
/// # Errors
///
/// Returns `MarkupError::EmbeddedHtml` when `policy` is
/// [`MarkupPolicy::Reject`] and the text contains raw HTML.
pub fn render_markup(text: &str, policy: MarkupPolicy) -> Result<String, MarkupError> {
    let events: Vec<Event<'_>> = Parser::new_ext(text, Options::empty()).collect();

    let events = match policy {
        MarkupPolicy::Trusted => events,
        MarkupPolicy::Escape => events
            .into_iter()
            .map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            })
            .collect(),
        MarkupPolicy::Reject => {
            if let Some(fragment) = events.iter().find_map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Some(raw.trim().to_owned()),
                _ => None,
            }) {
                tracing::debug!(%fragment, "Rejected embedded HTML");
                return Err(MarkupError::EmbeddedHtml { fragment });
            }
            events
        }
    };

    let mut output = String::with_capacity(text.len() + text.len() / 4);
    html::push_html(&mut output, events.into_iter());
    Ok(output)
}

/// Escape text for safe inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Whether `text` contains raw HTML that a policy would act on.
#[must_use]
pub fn contains_html(text: &str) -> bool {
    Parser::new_ext(text, Options::empty())
        .any(|event| matches!(event, Event::Html(_) | Event::InlineHtml(_)))
}
