// src/application/seo/site.rs
use crate::domain::navigation::Route;

pub const DEFAULT_BASE_URL: &str = "https://lechoixdeclara.fr";
pub const DEFAULT_IMAGE_PATH: &str = "clara-experte-avis-activewear-lechoixdeclara.webp";

/// Public identity of the site, used to build absolute URLs and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    base_url: String,
    pub site_name: String,
    pub brand_name: String,
    pub author_name: String,
    pub author_description: String,
    pub tagline: String,
    pub default_image_path: String,
    pub analytics_share_url: Option<String>,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SiteProfile {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
            site_name: "LeChoixDeClara.fr".into(),
            brand_name: "Le Choix de Clara".into(),
            author_name: "Clara".into(),
            author_description: "Experte en cadeaux et tests produits".into(),
            tagline: "Clara, 28 ans, 1m78. Je guide les hommes attentionnés dans leur choix de cadeaux pour leur chérie avec des tests sans concession.".into(),
            default_image_path: DEFAULT_IMAGE_PATH.into(),
            analytics_share_url: None,
        }
    }

    pub fn with_analytics_share_url(mut self, url: Option<String>) -> Self {
        self.analytics_share_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Home page URL, always with a trailing slash.
    pub fn home_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn url_for(&self, route: &Route) -> String {
        format!("{}/{}", self.base_url, route.to_query())
    }

    /// Resolve an image reference: absolute URLs are kept, site paths are joined to the base.
    pub fn absolute(&self, path_or_url: &str) -> String {
        let lower = path_or_url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path_or_url.trim_start_matches('/'))
        }
    }

    pub fn default_image(&self) -> String {
        self.absolute(&self.default_image_path)
    }

    /// URL of the analytics dashboard in its embeddable form.
    pub fn analytics_embed_url(&self) -> Option<String> {
        self.analytics_share_url.as_ref().map(|url| {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{url}{separator}view=integrated")
        })
    }
}
