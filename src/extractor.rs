use crate::utils::{clean_text, resolve_against_origin};
use crate::PageMetadata;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Substrings an anchor href must contain to count as a social profile link.
///
/// `youtub.com` is kept exactly as configured even though it looks like a
/// truncated `youtube.com`.
pub const SOCIAL_DOMAINS: [&str; 4] = ["linkedin.com", "twitter.com", "facebook.com", "youtub.com"];

/// Metadata extractor, responsible for extracting schema fields from webpage content.
///
/// Every field is looked up independently; a missing or malformed element only
/// leaves its own field empty.
#[derive(Clone)]
pub struct MetadataExtractor {
    social_domains: Vec<String>,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor {
    pub fn new() -> Self {
        Self {
            social_domains: SOCIAL_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn with_social_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            social_domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// `origin` is the scheme and host of the requested URL; relative icon and
    /// image references are joined onto it.
    pub fn extract(&self, html: &str, origin: &str) -> PageMetadata {
        let document = Html::parse_document(html);

        let metadata = PageMetadata {
            title: self.extract_title(&document),
            description: self.extract_description(&document),
            icon_url: self
                .extract_icon_href(&document)
                .and_then(|href| resolve_against_origin(origin, &href)),
            image_url: self
                .extract_image_src(&document)
                .and_then(|src| resolve_against_origin(origin, &src)),
            social_links: self.extract_social_links(&document),
            domain: origin.to_string(),
        };

        debug!(
            title = ?metadata.title,
            description = ?metadata.description,
            icon = ?metadata.icon_url,
            image = ?metadata.image_url,
            social_links = metadata.social_links.len(),
            "Metadata extraction results"
        );

        metadata
    }

    fn extract_title(&self, document: &Html) -> Option<String> {
        let title_selector = Selector::parse("title").ok()?;

        document
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .and_then(|s| clean_text(&s))
    }

    fn extract_description(&self, document: &Html) -> Option<String> {
        let meta_selector = Selector::parse("meta[name]").ok()?;

        document
            .select(&meta_selector)
            .find(|el| {
                el.value()
                    .attr("name")
                    .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
            })
            .and_then(|el| el.value().attr("content"))
            .and_then(clean_text)
    }

    fn extract_icon_href(&self, document: &Html) -> Option<String> {
        let link_selector = Selector::parse("link[rel]").ok()?;

        document
            .select(&link_selector)
            .find(|el| has_rel_token(el, "icon"))
            .and_then(|el| el.value().attr("href"))
            .and_then(clean_text)
    }

    fn extract_image_src(&self, document: &Html) -> Option<String> {
        let img_selector = Selector::parse("img[src]").ok()?;

        document
            .select(&img_selector)
            .filter_map(|el| el.value().attr("src"))
            .find_map(clean_text)
    }

    fn extract_social_links(&self, document: &Html) -> Vec<String> {
        let Ok(anchor_selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        document
            .select(&anchor_selector)
            .filter_map(|el| el.value().attr("href"))
            .filter_map(clean_text)
            .filter(|href| self.social_domains.iter().any(|d| href.contains(d.as_str())))
            .collect()
    }
}

fn has_rel_token(el: &ElementRef<'_>, token: &str) -> bool {
    el.value()
        .attr("rel")
        .is_some_and(|rel| rel.split_ascii_whitespace().any(|t| t.eq_ignore_ascii_case(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://example.com";

    #[test]
    fn test_rel_token_matching() {
        let html = r#"<link rel="apple-touch-icon" href="/apple.png">
            <link rel="Shortcut Icon" href="/favicon.ico">"#;
        let metadata = MetadataExtractor::new().extract(html, ORIGIN);
        assert_eq!(
            metadata.icon_url.as_deref(),
            Some("https://example.com/favicon.ico")
        );
    }

    #[test]
    fn test_custom_social_domains() {
        let html = r#"<a href="https://mastodon.social/@me">m</a>
            <a href="https://twitter.com/me">t</a>"#;
        let extractor = MetadataExtractor::with_social_domains(["mastodon.social"]);
        let metadata = extractor.extract(html, ORIGIN);
        assert_eq!(metadata.social_links, vec!["https://mastodon.social/@me"]);
    }

    #[test]
    fn test_domain_comes_from_origin() {
        let metadata = MetadataExtractor::new().extract("", ORIGIN);
        assert_eq!(metadata.domain, ORIGIN);
        assert_eq!(metadata.title, None);
        assert!(metadata.social_links.is_empty());
    }
}
