// src/infrastructure/sanitizer.rs
use crate::application::ports::sanitizer::HtmlSanitizer;
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "i", "b", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li",
    "a", "img", "blockquote", "code", "pre", "span", "div",
];
const ALLOWED_ATTRIBUTES: &[&str] = &["href", "src", "alt", "title", "target", "rel", "class", "id"];
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Whitelist sanitizer for article HTML.
#[derive(Default, Clone)]
pub struct AmmoniaSanitizer;

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, dirty: &str) -> String {
        if dirty.is_empty() {
            return String::new();
        }

        Builder::default()
            .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
            .tag_attributes(HashMap::new())
            .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
            .url_schemes(ALLOWED_SCHEMES.iter().copied().collect::<HashSet<_>>())
            .link_rel(None)
            .strip_comments(true)
            .clean(dirty)
            .to_string()
    }
}
