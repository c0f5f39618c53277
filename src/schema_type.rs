use crate::schema_builder::{self, SchemaContext, SchemaResult};
use crate::SchemaError;
use std::fmt;
use std::str::FromStr;

/// The closed set of schema.org types the service can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Organization,
    WebPage,
    BlogPosting,
    Event,
    BreadcrumbList,
    ClaimReview,
    FaqPage,
    ImageObject,
    Product,
    ProfilePage,
    VideoObject,
}

type Builder = fn(&SchemaContext<'_>) -> SchemaResult;

impl SchemaType {
    pub const ALL: [SchemaType; 11] = [
        SchemaType::Organization,
        SchemaType::WebPage,
        SchemaType::BlogPosting,
        SchemaType::Event,
        SchemaType::BreadcrumbList,
        SchemaType::ClaimReview,
        SchemaType::FaqPage,
        SchemaType::ImageObject,
        SchemaType::Product,
        SchemaType::ProfilePage,
        SchemaType::VideoObject,
    ];

    /// The `@type` tag, which is also the accepted `schemaType` value.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Organization => "Organization",
            SchemaType::WebPage => "WebPage",
            SchemaType::BlogPosting => "BlogPosting",
            SchemaType::Event => "Event",
            SchemaType::BreadcrumbList => "BreadcrumbList",
            SchemaType::ClaimReview => "ClaimReview",
            SchemaType::FaqPage => "FAQPage",
            SchemaType::ImageObject => "ImageObject",
            SchemaType::Product => "Product",
            SchemaType::ProfilePage => "ProfilePage",
            SchemaType::VideoObject => "VideoObject",
        }
    }

    pub(crate) fn builder(self) -> Builder {
        match self {
            SchemaType::Organization => schema_builder::organization,
            SchemaType::WebPage => schema_builder::web_page,
            SchemaType::BlogPosting => schema_builder::blog_posting,
            SchemaType::Event => schema_builder::event,
            SchemaType::BreadcrumbList => schema_builder::breadcrumb_list,
            SchemaType::ClaimReview => schema_builder::claim_review,
            SchemaType::FaqPage => schema_builder::faq_page,
            SchemaType::ImageObject => schema_builder::image_object,
            SchemaType::Product => schema_builder::product,
            SchemaType::ProfilePage => schema_builder::profile_page,
            SchemaType::VideoObject => schema_builder::video_object,
        }
    }
}

impl FromStr for SchemaType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnsupportedType(s.to_string()))
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_every_tag() {
        for schema_type in SchemaType::ALL {
            assert_eq!(schema_type.as_str().parse::<SchemaType>().unwrap(), schema_type);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "webpage".parse::<SchemaType>(),
            Err(SchemaError::UnsupportedType(t)) if t == "webpage"
        ));
        assert!("FaqPage".parse::<SchemaType>().is_err());
        assert_eq!("FAQPage".parse::<SchemaType>().unwrap(), SchemaType::FaqPage);
    }
}
