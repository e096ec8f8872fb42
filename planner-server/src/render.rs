//! Markdown to HTML presentation.

use planner_core::ReportBundle;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// URL schemes allowed in link and image destinations.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Replacement for destinations with any other scheme.
const BLOCKED_URL: &str = "#";

/// Converts CommonMark to HTML.
///
/// Raw HTML in the input is emitted as escaped text and link or image
/// destinations outside [`ALLOWED_SCHEMES`] become `#`, so model output can
/// never inject markup or script into the page.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(tag) => Event::Start(sanitize_tag(tag)),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn sanitize_tag(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link { link_type, dest_url, title, id } if !is_allowed_url(&dest_url) => {
            Tag::Link { link_type, dest_url: CowStr::Borrowed(BLOCKED_URL), title, id }
        }
        Tag::Image { link_type, dest_url, title, id } if !is_allowed_url(&dest_url) => {
            Tag::Image { link_type, dest_url: CowStr::Borrowed(BLOCKED_URL), title, id }
        }
        other => other,
    }
}

/// Relative URLs pass; absolute ones need an allowed scheme.
///
/// Whitespace and control characters are ignored first, as browsers do when
/// parsing a scheme.
fn is_allowed_url(url: &str) -> bool {
    let url: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    match url.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(end) if url[end..].starts_with(':') => {
            ALLOWED_SCHEMES.iter().any(|scheme| url[..end].eq_ignore_ascii_case(scheme))
        }
        _ => true,
    }
}

/// Same keys, each value converted independently.
pub fn present(bundle: &ReportBundle) -> ReportBundle {
    bundle.map_content(markdown_to_html)
}
