use crate::domain::article::Article;
use crate::domain::navigation::Route;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub sub_category: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub image_alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_link: Option<String>,
    pub affiliate_type: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let sub_category = article.sub_category().as_str().to_string();
        let fields = article.fields;
        Self {
            id: article.id.into(),
            title: fields.title.into_inner(),
            category: fields.category.as_str().to_string(),
            sub_category,
            excerpt: fields.excerpt.into_inner(),
            content: fields.content.into_inner(),
            image_url: fields.image_url.into_inner(),
            image_alt: fields.image_alt.into_inner(),
            affiliate_link: fields.affiliate_link.map(|link| link.into_inner()),
            affiliate_type: fields.affiliate_type.as_str().to_string(),
            slug: article.slug.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Grid tile shown in catalogue listings and "related" sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCardDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image_url: String,
    pub image_alt: String,
    /// Query suffix leading to the article page.
    pub href: String,
}

impl From<&Article> for ArticleCardDto {
    fn from(article: &Article) -> Self {
        let alt = article.fields.image_alt.as_str();
        Self {
            id: article.id.to_string(),
            title: article.fields.title.to_string(),
            category: article.category().as_str().to_string(),
            excerpt: article.fields.excerpt.to_string(),
            image_url: article.fields.image_url.as_str().to_string(),
            image_alt: if alt.is_empty() {
                article.fields.title.to_string()
            } else {
                alt.to_string()
            },
            href: Route::Article(article.id.clone()).to_query(),
        }
    }
}
