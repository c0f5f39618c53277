//! Fixed values used by the schema templates.
//!
//! `NOT_AVAILABLE` stands in for metadata the page did not provide. The rest is
//! sample business data that some templates carry regardless of the page; swap
//! these out without touching extraction or template code.

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

pub const NOT_AVAILABLE: &str = "Not Available";

// BlogPosting
pub const BLOG_AUTHOR_NAME: &str = "Editorial Team";

// Event
pub const EVENT_START_DATE: &str = "2025-07-21T19:00:00-05:00";
pub const EVENT_END_DATE: &str = "2025-07-21T23:00:00-05:00";
pub const EVENT_STATUS: &str = "https://schema.org/EventScheduled";
pub const EVENT_ATTENDANCE_MODE: &str = "https://schema.org/OfflineEventAttendanceMode";
pub const EVENT_VENUE_NAME: &str = "Downtown Convention Center";
pub const EVENT_STREET_ADDRESS: &str = "100 Main Street";
pub const EVENT_LOCALITY: &str = "Springfield";
pub const EVENT_REGION: &str = "IL";
pub const EVENT_POSTAL_CODE: &str = "62701";
pub const EVENT_COUNTRY: &str = "US";
pub const EVENT_OFFER_PRICE: &str = "30.00";
pub const EVENT_OFFER_CURRENCY: &str = "USD";
pub const EVENT_OFFER_AVAILABILITY: &str = "https://schema.org/InStock";
pub const EVENT_OFFER_VALID_FROM: &str = "2025-05-21T12:00:00-05:00";

// ClaimReview
pub const CLAIM_RATING_VALUE: u8 = 1;
pub const CLAIM_BEST_RATING: u8 = 5;
pub const CLAIM_WORST_RATING: u8 = 1;
pub const CLAIM_RATING_NAME: &str = "False";

// FAQPage
pub const FAQ_ENTRIES: [(&str, &str); 3] = [
    (
        "What does this website offer?",
        "This website provides information, products and services described on its pages.",
    ),
    (
        "How can I contact the site owner?",
        "Use the contact details or contact form published on the website.",
    ),
    (
        "Is the information on this website up to date?",
        "Content is reviewed regularly, but check the publication date on each page.",
    ),
];

// ImageObject
pub const IMAGE_CREATOR_NAME: &str = "Site Photographer";
pub const IMAGE_COPYRIGHT_NOTICE: &str = "© All rights reserved";
pub const IMAGE_CREDIT_TEXT: &str = "Image courtesy of the site owner";
pub const IMAGE_LICENSE: &str = "https://creativecommons.org/licenses/by/4.0/";

// Product
pub const PRODUCT_BRAND: &str = "Generic Brand";
pub const PRODUCT_SKU: &str = "SKU-0001";
pub const PRODUCT_PRICE: &str = "19.99";
pub const PRODUCT_CURRENCY: &str = "USD";
pub const PRODUCT_AVAILABILITY: &str = "https://schema.org/InStock";
pub const PRODUCT_RATING_VALUE: &str = "4.5";
pub const PRODUCT_REVIEW_COUNT: &str = "24";

// VideoObject
pub const VIDEO_CONTENT_URL: &str = "https://www.example.com/video/sample.mp4";
pub const VIDEO_EMBED_URL: &str = "https://www.example.com/embed/sample";
pub const VIDEO_DURATION: &str = "PT1M33S";
pub const VIDEO_WATCH_COUNT: u32 = 1000;
