// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    AffiliateLink, AffiliateType, Article, ArticleContent, ArticleExcerpt, ArticleFields,
    ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository, ImageAlt,
    ImageUrl, NewArticle, entity::ArticleUpdate,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str = "id, title, category, excerpt, content, image_url, image_alt, \
     affiliate_link, affiliate_type, slug, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    category: String,
    excerpt: String,
    content: String,
    image_url: String,
    image_alt: String,
    affiliate_link: Option<String>,
    affiliate_type: Option<String>,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let affiliate_type = match row.affiliate_type.as_deref() {
            Some(kind) if !kind.is_empty() => kind.parse()?,
            _ => AffiliateType::default(),
        };

        Ok(Article {
            id: ArticleId::new(row.id)?,
            fields: ArticleFields {
                title: ArticleTitle::new(row.title)?,
                category: row.category.parse()?,
                excerpt: ArticleExcerpt::new(row.excerpt)?,
                content: ArticleContent::sanitized(row.content)?,
                image_url: ImageUrl::new(row.image_url)?,
                image_alt: ImageAlt::new(row.image_alt)?,
                affiliate_link: row
                    .affiliate_link
                    .filter(|link| !link.is_empty())
                    .map(AffiliateLink::new)
                    .transpose()?,
                affiliate_type,
            },
            slug: ArticleSlug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            fields,
            slug,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, category, excerpt, content, image_url, image_alt, \
             affiliate_link, affiliate_type, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(fields.title.as_str())
            .bind(fields.category.as_str())
            .bind(fields.excerpt.as_str())
            .bind(fields.content.as_str())
            .bind(fields.image_url.as_str())
            .bind(fields.image_alt.as_str())
            .bind(fields.affiliate_link.as_ref().map(|link| link.as_str()))
            .bind(fields.affiliate_type.as_str())
            .bind(slug.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            fields,
            slug,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE articles SET title = $2, category = $3, excerpt = $4, content = $5, \
             image_url = $6, image_alt = $7, affiliate_link = $8, affiliate_type = $9, \
             slug = $10, updated_at = $11
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .bind(fields.title.as_str())
            .bind(fields.category.as_str())
            .bind(fields.excerpt.as_str())
            .bind(fields.content.as_str())
            .bind(fields.image_url.as_str())
            .bind(fields.image_alt.as_str())
            .bind(fields.affiliate_link.as_ref().map(|link| link.as_str()))
            .bind(fields.affiliate_type.as_str())
            .bind(slug.as_str())
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1
             ORDER BY created_at DESC, id DESC LIMIT 1"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Article::try_from).collect()
    }
}
