// src/domain/article/entity.rs
use crate::domain::article::category::{AffiliateType, Category, SubCategory};
use crate::domain::article::value_objects::{
    AffiliateLink, ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle, ImageAlt,
    ImageUrl,
};
use chrono::{DateTime, Utc};

/// Editable part of an article, as written from the admin console.
#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: ArticleTitle,
    pub category: Category,
    pub excerpt: ArticleExcerpt,
    pub content: ArticleContent,
    pub image_url: ImageUrl,
    pub image_alt: ImageAlt,
    pub affiliate_link: Option<AffiliateLink>,
    pub affiliate_type: AffiliateType,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub fields: ArticleFields,
    pub slug: ArticleSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn sub_category(&self) -> SubCategory {
        self.fields.category.sub_category()
    }

    pub fn category(&self) -> Category {
        self.fields.category
    }

    /// Replace the editable fields. The identifier and creation time stay as they are.
    pub fn rewrite(&mut self, fields: ArticleFields, slug: ArticleSlug, now: DateTime<Utc>) {
        self.fields = fields;
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub fields: ArticleFields,
    pub slug: ArticleSlug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub fields: ArticleFields,
    pub slug: ArticleSlug,
    pub updated_at: DateTime<Utc>,
}
