// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MAX_CHARS: usize = 200;
pub const EXCERPT_MAX_CHARS: usize = 500;
pub const CONTENT_MAX_CHARS: usize = 100_000;
pub const IMAGE_ALT_MAX_CHARS: usize = 200;

/// Identifier assigned by the article store. Never rewritten once issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        if value.len() > 128 || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(DomainError::Validation("article id is malformed".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

fn require_text(value: String, field: &str, max: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} is too long (max {max} characters)"
        )));
    }
    Ok(value)
}

macro_rules! text_value_object {
    ($name:ident, $field:literal, $max:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                require_text(value.into(), $field, $max).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_value_object!(ArticleTitle, "title", TITLE_MAX_CHARS);
text_value_object!(ArticleExcerpt, "excerpt", EXCERPT_MAX_CHARS);
text_value_object!(ArticleContent, "content", CONTENT_MAX_CHARS);
text_value_object!(ImageAlt, "image alt text", IMAGE_ALT_MAX_CHARS);

impl ArticleContent {
    /// Content that already went through the sanitizer. Escaping can make it
    /// longer than the form limit, so only emptiness is checked.
    pub fn sanitized(value: impl Into<String>) -> DomainResult<Self> {
        require_text(value.into(), "content", usize::MAX).map(Self)
    }
}

/// Slug derived from the title at write time. Not unique across articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True for absolute `http`/`https` URLs with a host.
pub fn is_web_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    let rest = if let Some(rest) = lower.strip_prefix("https://") {
        rest
    } else if let Some(rest) = lower.strip_prefix("http://") {
        rest
    } else {
        return false;
    };

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty() && !value.chars().any(|c| c.is_whitespace() || c.is_control())
}

fn is_site_relative_path(value: &str) -> bool {
    if value.is_empty() || value.starts_with("//") {
        return false;
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let path = value.split(['?', '#']).next().unwrap_or_default();
    if path.split('/').any(|segment| segment == "..") {
        return false;
    }
    // a colon before the first slash would be read as a scheme
    let head = path.split('/').next().unwrap_or_default();
    !head.contains(':')
}

/// Cover image location: either an absolute web URL or a path on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("image url cannot be empty".into()));
        }
        if !(is_web_url(&value) || is_site_relative_path(&value)) {
            return Err(DomainError::Validation(
                "image url must be an http(s) url or a site path".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn is_absolute(&self) -> bool {
        is_web_url(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateLink(String);

impl AffiliateLink {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_web_url(&value) {
            return Err(DomainError::Validation(
                "affiliate link must start with http:// or https://".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
