// src/application/seo/meta.rs
use super::site::SiteProfile;
use crate::application::dto::{MetaTagDto, PageMetaDto};
use crate::domain::article::Article;
use crate::domain::navigation::Route;

/// Builder for the `<title>`, canonical link, OpenGraph and Twitter tags of a page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    title: String,
    description: String,
    image: Option<String>,
    route: Route,
    og_type: &'static str,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, route: Route) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
            route,
            og_type: "website",
        }
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn og_type(mut self, og_type: &'static str) -> Self {
        self.og_type = og_type;
        self
    }

    /// Meta for an article page: "<title> | Avis de Clara", Open Graph type `article`.
    pub fn for_article(article: &Article) -> Self {
        Self::new(
            format!("{} | Avis de Clara", article.fields.title),
            article.fields.excerpt.as_str(),
            Route::Article(article.id.clone()),
        )
        .image(article.fields.image_url.as_str())
        .og_type("article")
    }

    pub fn render(self, site: &SiteProfile) -> PageMetaDto {
        let title = if self.title.contains('|') {
            self.title
        } else {
            format!("{} | {}", self.title, site.site_name)
        };
        let url = site.url_for(&self.route);
        let image = self
            .image
            .filter(|image| !image.trim().is_empty())
            .map(|image| site.absolute(&image))
            .unwrap_or_else(|| site.default_image());

        let tag = |attribute: &str, key: &str, content: &str| MetaTagDto {
            attribute: attribute.to_string(),
            key: key.to_string(),
            content: content.to_string(),
        };

        let tags = vec![
            tag("name", "description", &self.description),
            tag("property", "og:title", &title),
            tag("property", "og:description", &self.description),
            tag("property", "og:image", &image),
            tag("property", "og:url", &url),
            tag("property", "og:type", self.og_type),
            tag("name", "twitter:title", &title),
            tag("name", "twitter:description", &self.description),
            tag("name", "twitter:image", &image),
            tag("name", "twitter:url", &url),
        ];

        PageMetaDto {
            title,
            description: self.description,
            canonical_url: url,
            image,
            og_type: self.og_type.to_string(),
            tags,
        }
    }
}
