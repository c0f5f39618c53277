use schema_service::{MetadataExtractor, SOCIAL_DOMAINS};

const ORIGIN: &str = "https://example.com";

fn extract(html: &str) -> schema_service::PageMetadata {
    MetadataExtractor::new().extract(html, ORIGIN)
}

#[test]
fn test_title_is_trimmed() {
    let metadata = extract("<html><head><title>\n   Example  \t</title></head></html>");
    assert_eq!(metadata.title.as_deref(), Some("Example"));
}

#[test]
fn test_whitespace_title_is_absent() {
    let metadata = extract("<html><head><title>   </title></head></html>");
    assert_eq!(metadata.title, None);

    let metadata = extract("<html><head></head><body>no title</body></html>");
    assert_eq!(metadata.title, None);
}

#[test]
fn test_first_title_wins() {
    let metadata = extract("<title>First</title><title>Second</title>");
    assert_eq!(metadata.title.as_deref(), Some("First"));
}

#[test]
fn test_description() {
    let metadata = extract(r#"<meta name="description" content="  A page about things.  ">"#);
    assert_eq!(metadata.description.as_deref(), Some("A page about things."));

    let metadata = extract(r#"<meta name="Description" content="Mixed case name">"#);
    assert_eq!(metadata.description.as_deref(), Some("Mixed case name"));
}

#[test]
fn test_missing_description_is_absent() {
    assert_eq!(extract("<title>x</title>").description, None);
    assert_eq!(extract(r#"<meta name="description">"#).description, None);
    assert_eq!(
        extract(r#"<meta name="description" content="   ">"#).description,
        None
    );
    assert_eq!(
        extract(r#"<meta property="og:description" content="og only">"#).description,
        None
    );
}

#[test]
fn test_icon_and_image_resolve_against_origin() {
    let html = r#"<head><link rel="stylesheet" href="/style.css"><link rel="icon" href="static/icon.png"></head>
        <body><img alt="no src"><img src="/img/first.jpg"><img src="/img/second.jpg"></body>"#;
    let metadata = MetadataExtractor::new().extract(html, "https://example.com");

    assert_eq!(
        metadata.icon_url.as_deref(),
        Some("https://example.com/static/icon.png")
    );
    assert_eq!(
        metadata.image_url.as_deref(),
        Some("https://example.com/img/first.jpg")
    );
}

#[test]
fn test_absolute_image_kept() {
    let metadata = extract(r#"<img src="https://cdn.example.net/pic.webp">"#);
    assert_eq!(
        metadata.image_url.as_deref(),
        Some("https://cdn.example.net/pic.webp")
    );
}

#[test]
fn test_social_links_keep_document_order() {
    let html = r#"
        <a href="https://facebook.com/example">fb</a>
        <a href="https://example.com/contact">contact</a>
        <a href="">empty</a>
        <a href="https://www.linkedin.com/in/someone">li</a>
        <a href="https://twitter.com/example">tw</a>
        <a href="https://facebook.com/example">fb again</a>
        <a>no href</a>
    "#;
    let metadata = extract(html);
    assert_eq!(
        metadata.social_links,
        vec![
            "https://facebook.com/example",
            "https://www.linkedin.com/in/someone",
            "https://twitter.com/example",
            "https://facebook.com/example",
        ]
    );
}

#[test]
fn test_social_domain_list_is_reproduced_as_configured() {
    assert_eq!(
        SOCIAL_DOMAINS,
        ["linkedin.com", "twitter.com", "facebook.com", "youtub.com"]
    );
    // The configured entry does not match real youtube.com links.
    let metadata = extract(
        r#"<a href="https://www.youtube.com/@example">yt</a><a href="https://youtub.com/x">typo</a>"#,
    );
    assert_eq!(metadata.social_links, vec!["https://youtub.com/x"]);
}

#[test]
fn test_malformed_html_does_not_fail() {
    let html = r#"<html><head><title>Broken <b>page</title><meta name="description" content="still here"
        <body><div><p>unclosed <img src="/a.png"<a href="https://twitter.com/x">x"#;
    let metadata = extract(html);
    assert!(metadata.title.is_some());
    assert_eq!(metadata.domain, ORIGIN);
}

#[test]
fn test_empty_document() {
    let metadata = extract("");
    assert_eq!(metadata.title, None);
    assert_eq!(metadata.description, None);
    assert_eq!(metadata.icon_url, None);
    assert_eq!(metadata.image_url, None);
    assert!(metadata.social_links.is_empty());
}
