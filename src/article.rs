//! Article document model and HTML rendering.
//!
//! Decodes the article payload served by the portal API and renders each
//! content block. Paragraph text goes through [`crate::links`] so bare URLs
//! become external links.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::links::{is_web_url, render_link, render_paragraph};

const DEFAULT_IMAGE_ALT: &str = "Article image";
const IMAGE_UNAVAILABLE: &str = "Image unavailable";

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Malformed article payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A full article as returned by `/api/articles/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentBlock>,
}

/// One element of an article body, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default)]
        level: Option<u8>,
    },
    Paragraph {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
    },
    List {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        ordered: bool,
    },
    Photo {
        #[serde(default, deserialize_with = "null_as_default")]
        url: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    Link {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "null_as_default")]
        url: String,
    },
    /// Any block type this crate does not know. Renders nothing.
    #[serde(other)]
    Unknown,
}

/// Decodes a missing key or an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ArticleDocument {
    /// Decodes an article payload.
    ///
    /// Missing or `null` fields fall back to empty values.
    ///
    /// # Errors
    /// Returns `ArticleError::Malformed` if the payload is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(payload: &str) -> Result<Self, ArticleError> {
        let document: Self = serde_json::from_str(payload)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "article decoded: {:?} with {} block(s)",
            document.title,
            document.content.len()
        );

        Ok(document)
    }

    /// Renders the title, the summary and every content block.
    pub fn render_html(&self) -> String {
        let mut html = format!("<h1>{}</h1>", escape(&self.title));
        if !self.summary.is_empty() {
            html.push_str(&format!(
                "<section class=\"summary\"><p>{}</p></section>",
                escape(&self.summary)
            ));
        }
        html.push_str("<article>");
        for block in &self.content {
            html.push_str(&block.render_html());
        }
        html.push_str("</article>");
        html
    }
}

impl ContentBlock {
    /// Renders this block as HTML. `Unknown` blocks render as an empty string.
    pub fn render_html(&self) -> String {
        match self {
            ContentBlock::Heading { text, level } => {
                let tag = match level.unwrap_or(1) {
                    0 | 1 => "h1",
                    2 => "h2",
                    _ => "h3",
                };
                format!("<{tag}>{}</{tag}>", escape(text))
            }
            ContentBlock::Paragraph { text } => render_paragraph(text),
            ContentBlock::List { items, ordered } => {
                let tag = if *ordered { "ol" } else { "ul" };
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", escape(item)))
                    .collect();
                format!("<{tag}>{items}</{tag}>")
            }
            ContentBlock::Photo { url, alt, caption } => {
                let body = if url.is_empty() {
                    format!("<div class=\"image-placeholder\">{}</div>", IMAGE_UNAVAILABLE)
                } else {
                    let alt = alt.as_deref().filter(|a| !a.is_empty()).unwrap_or(DEFAULT_IMAGE_ALT);
                    format!("<img src=\"{}\" alt=\"{}\">", escape(url), escape(alt))
                };
                let caption = caption
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .map(|c| format!("<figcaption>{}</figcaption>", escape(c)))
                    .unwrap_or_default();
                format!("<figure>{body}{caption}</figure>")
            }
            ContentBlock::Link { text, url } => {
                let label = if text.is_empty() { url } else { text };
                if is_web_url(url) {
                    format!("<div>{}</div>", render_link(url, label))
                } else {
                    format!("<div>{}</div>", escape(label))
                }
            }
            ContentBlock::Unknown => String::new(),
        }
    }
}

fn escape(text: &str) -> String {
    htmlescape::encode_minimal(text)
}
