//! Inline link extraction for article text.
//!
//! Splits text into alternating plain and URL segments so paragraphs can
//! be rendered with clickable links. The URL pattern is compiled once and
//! cached in a `OnceLock`.

use std::sync::OnceLock;

use regex::Regex;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("valid URL regex"))
}

/// A contiguous span of the input, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Link(&'a str),
}

impl<'a> Segment<'a> {
    /// Returns the borrowed text of this span, link or not.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Plain(text) | Segment::Link(text) => *text,
        }
    }

    /// Returns `true` for a URL span.
    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link(_))
    }
}

/// Splits `text` around every `http://` or `https://` URL.
///
/// Even indices are plain spans (possibly empty), odd indices are links.
/// Joining every segment's text gives back `text` unchanged. Text without
/// URLs yields a single plain segment.
pub fn extract_links(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in url_pattern().find_iter(text) {
        segments.push(Segment::Plain(&text[last..m.start()]));
        segments.push(Segment::Link(m.as_str()));
        last = m.end();
    }
    segments.push(Segment::Plain(&text[last..]));

    segments
}

/// Checks that `url` uses the `http` or `https` scheme.
///
/// Anything else (`javascript:`, `data:`, relative paths) must not be
/// rendered as a clickable link.
pub fn is_web_url(url: &str) -> bool {
    let url = url.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Renders an external link that opens in a new tab without leaking
/// the referrer or `window.opener`.
pub fn render_link(url: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"link link-primary\">{}</a>",
        htmlescape::encode_minimal(url),
        htmlescape::encode_minimal(text)
    )
}

/// Renders segments as inline HTML. Plain text is escaped.
pub fn render_segments(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => htmlescape::encode_minimal(text),
            Segment::Link(url) => render_link(url, url),
        })
        .collect()
}

/// Renders a paragraph of text, turning URLs into links.
pub fn render_paragraph(text: &str) -> String {
    format!("<p>{}</p>", render_segments(&extract_links(text)))
}
