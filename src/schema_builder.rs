use crate::placeholders::*;
use crate::{PageMetadata, SchemaError, SchemaType};
use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::percent_decode_str;
use serde_json::{json, Map, Value};
use url::Url;

/// A generated JSON-LD object. Always carries `@context` and `@type`.
pub type SchemaResult = Map<String, Value>;

/// Everything a template may read. Templates are pure functions of this.
#[derive(Debug, Clone)]
pub struct SchemaContext<'a> {
    pub schema_type: SchemaType,
    pub url: &'a str,
    pub metadata: &'a PageMetadata,
    pub now: DateTime<Utc>,
}

impl SchemaContext<'_> {
    fn title(&self) -> Value {
        or_not_available(&self.metadata.title)
    }

    fn description(&self) -> Value {
        or_not_available(&self.metadata.description)
    }

    fn image(&self) -> Value {
        or_not_available(&self.metadata.image_url)
    }

    fn icon(&self) -> Value {
        or_not_available(&self.metadata.icon_url)
    }

    fn social_links(&self) -> Value {
        json!(self.metadata.social_links)
    }

    fn timestamp(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

fn or_not_available(value: &Option<String>) -> Value {
    Value::String(value.as_deref().unwrap_or(NOT_AVAILABLE).to_string())
}

/// Builds `schema_type` for `url` stamped with the current time.
pub fn build(
    schema_type: &str,
    url: &str,
    metadata: &PageMetadata,
) -> Result<SchemaResult, SchemaError> {
    build_at(schema_type, url, metadata, Utc::now())
}

pub fn build_at(
    schema_type: &str,
    url: &str,
    metadata: &PageMetadata,
    now: DateTime<Utc>,
) -> Result<SchemaResult, SchemaError> {
    let schema_type: SchemaType = schema_type.parse()?;
    let ctx = SchemaContext {
        schema_type,
        url,
        metadata,
        now,
    };
    Ok(render(&ctx))
}

pub(crate) fn render(ctx: &SchemaContext<'_>) -> SchemaResult {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!(SCHEMA_CONTEXT));
    schema.insert("@type".into(), json!(ctx.schema_type.as_str()));
    schema.extend((ctx.schema_type.builder())(ctx));
    schema
}

fn into_map(value: Value) -> SchemaResult {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub(crate) fn organization(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "url": ctx.url,
        "logo": ctx.icon(),
        "description": ctx.description(),
        "sameAs": ctx.social_links(),
    }))
}

pub(crate) fn web_page(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "description": ctx.description(),
        "url": ctx.url,
        "image": ctx.image(),
        "dateModified": ctx.timestamp(),
        "isPartOf": {
            "@type": "WebSite",
            "url": ctx.metadata.domain,
        },
    }))
}

pub(crate) fn blog_posting(ctx: &SchemaContext<'_>) -> SchemaResult {
    let now = ctx.timestamp();
    into_map(json!({
        "headline": ctx.title(),
        "description": ctx.description(),
        "image": ctx.image(),
        "url": ctx.url,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": ctx.url,
        },
        "author": {
            "@type": "Person",
            "name": BLOG_AUTHOR_NAME,
        },
        "publisher": {
            "@type": "Organization",
            "name": ctx.title(),
            "logo": {
                "@type": "ImageObject",
                "url": ctx.icon(),
            },
        },
        "datePublished": now,
        "dateModified": now,
    }))
}

pub(crate) fn event(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "description": ctx.description(),
        "url": ctx.url,
        "image": ctx.image(),
        "startDate": EVENT_START_DATE,
        "endDate": EVENT_END_DATE,
        "eventStatus": EVENT_STATUS,
        "eventAttendanceMode": EVENT_ATTENDANCE_MODE,
        "location": {
            "@type": "Place",
            "name": EVENT_VENUE_NAME,
            "address": {
                "@type": "PostalAddress",
                "streetAddress": EVENT_STREET_ADDRESS,
                "addressLocality": EVENT_LOCALITY,
                "addressRegion": EVENT_REGION,
                "postalCode": EVENT_POSTAL_CODE,
                "addressCountry": EVENT_COUNTRY,
            },
        },
        "organizer": {
            "@type": "Organization",
            "name": ctx.title(),
            "url": ctx.metadata.domain,
        },
        "offers": {
            "@type": "Offer",
            "url": ctx.url,
            "price": EVENT_OFFER_PRICE,
            "priceCurrency": EVENT_OFFER_CURRENCY,
            "availability": EVENT_OFFER_AVAILABILITY,
            "validFrom": EVENT_OFFER_VALID_FROM,
        },
    }))
}

pub(crate) fn breadcrumb_list(ctx: &SchemaContext<'_>) -> SchemaResult {
    let domain = ctx.metadata.domain.trim_end_matches('/');
    let segments: Vec<String> = Url::parse(ctx.url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .map(|s| s.filter(|seg| !seg.is_empty()).map(String::from).collect())
        })
        .unwrap_or_default();

    let mut items = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": "Home",
        "item": domain,
    })];

    let mut path = String::from(domain);
    for (i, segment) in segments.iter().enumerate() {
        path.push('/');
        path.push_str(segment);

        let is_last = i + 1 == segments.len();
        let name = match (&ctx.metadata.title, is_last) {
            (Some(title), true) => title.clone(),
            _ => humanize_segment(segment),
        };

        items.push(json!({
            "@type": "ListItem",
            "position": i + 2,
            "name": name,
            "item": path,
        }));
    }

    into_map(json!({ "itemListElement": items }))
}

/// Readable breadcrumb name for a raw (percent-encoded) path segment.
/// Segments with nothing readable left keep their raw form.
fn humanize_segment(segment: &str) -> String {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let stem = decoded.rsplit_once('.').map_or(&*decoded, |(stem, _)| stem);
    let name = stem
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if name.trim().is_empty() {
        segment.to_string()
    } else {
        name
    }
}

pub(crate) fn claim_review(ctx: &SchemaContext<'_>) -> SchemaResult {
    let now = ctx.timestamp();
    into_map(json!({
        "url": ctx.url,
        "claimReviewed": ctx.description(),
        "itemReviewed": {
            "@type": "Claim",
            "author": {
                "@type": "Organization",
                "name": ctx.title(),
                "sameAs": ctx.metadata.domain,
            },
            "datePublished": now,
        },
        "author": {
            "@type": "Organization",
            "name": ctx.title(),
            "url": ctx.metadata.domain,
        },
        "reviewRating": {
            "@type": "Rating",
            "ratingValue": CLAIM_RATING_VALUE,
            "bestRating": CLAIM_BEST_RATING,
            "worstRating": CLAIM_WORST_RATING,
            "alternateName": CLAIM_RATING_NAME,
        },
        "datePublished": now,
    }))
}

pub(crate) fn faq_page(ctx: &SchemaContext<'_>) -> SchemaResult {
    let questions: Vec<Value> = FAQ_ENTRIES
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    into_map(json!({
        "name": ctx.title(),
        "url": ctx.url,
        "mainEntity": questions,
    }))
}

pub(crate) fn image_object(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "description": ctx.description(),
        "contentUrl": ctx.image(),
        "url": ctx.url,
        "creator": {
            "@type": "Person",
            "name": IMAGE_CREATOR_NAME,
        },
        "copyrightNotice": IMAGE_COPYRIGHT_NOTICE,
        "creditText": IMAGE_CREDIT_TEXT,
        "license": IMAGE_LICENSE,
    }))
}

pub(crate) fn product(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "description": ctx.description(),
        "image": ctx.image(),
        "url": ctx.url,
        "brand": {
            "@type": "Brand",
            "name": PRODUCT_BRAND,
        },
        "sku": PRODUCT_SKU,
        "offers": {
            "@type": "Offer",
            "url": ctx.url,
            "price": PRODUCT_PRICE,
            "priceCurrency": PRODUCT_CURRENCY,
            "availability": PRODUCT_AVAILABILITY,
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": PRODUCT_RATING_VALUE,
            "reviewCount": PRODUCT_REVIEW_COUNT,
        },
    }))
}

pub(crate) fn profile_page(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "description": ctx.description(),
        "url": ctx.url,
        "dateModified": ctx.timestamp(),
        "mainEntity": {
            "@type": "Person",
            "name": ctx.title(),
            "description": ctx.description(),
            "image": ctx.image(),
            "sameAs": ctx.social_links(),
        },
    }))
}

pub(crate) fn video_object(ctx: &SchemaContext<'_>) -> SchemaResult {
    into_map(json!({
        "name": ctx.title(),
        "description": ctx.description(),
        "thumbnailUrl": ctx.image(),
        "uploadDate": ctx.timestamp(),
        "contentUrl": VIDEO_CONTENT_URL,
        "embedUrl": VIDEO_EMBED_URL,
        "duration": VIDEO_DURATION,
        "interactionStatistic": {
            "@type": "InteractionCounter",
            "interactionType": { "@type": "WatchAction" },
            "userInteractionCount": VIDEO_WATCH_COUNT,
        },
    }))
}
