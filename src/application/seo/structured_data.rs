// src/application/seo/structured_data.rs
//! Schema.org JSON-LD documents embedded in rendered pages.

use super::site::SiteProfile;
use crate::domain::article::Article;
use chrono::SecondsFormat;
use serde_json::{Value, json};

/// `Review` of the product an article tests.
pub fn article_review(site: &SiteProfile, article: &Article) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Review",
        "itemReviewed": {
            "@type": "Product",
            "name": article.fields.title.as_str(),
            "image": site.absolute(article.fields.image_url.as_str()),
            "description": article.fields.excerpt.as_str(),
        },
        "author": {
            "@type": "Person",
            "name": site.author_name,
            "description": site.author_description,
        },
        "publisher": {
            "@type": "Organization",
            "name": site.brand_name,
            "url": site.base_url(),
        },
        "reviewBody": article.fields.excerpt.as_str(),
        "datePublished": article.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// `WebSite` and `Person` graph for the home page.
pub fn home_graph(site: &SiteProfile) -> Value {
    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "WebSite",
                "name": site.brand_name,
                "url": site.base_url(),
                "description": site.tagline,
                "publisher": {
                    "@type": "Person",
                    "name": site.author_name,
                },
            },
            {
                "@type": "Person",
                "name": site.author_name,
                "description": site.author_description,
                "jobTitle": "Experte cadeaux",
                "url": site.base_url(),
            },
        ],
    })
}
