use super::{ArticleCardDto, ArticleDto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One `<meta>` tag; `attribute` is `property` for OpenGraph and `name` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetaTagDto {
    pub attribute: String,
    pub key: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaDto {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub image: String,
    pub og_type: String,
    pub tags: Vec<MetaTagDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbItemDto {
    pub label: String,
    /// Query suffix to navigate to; absent for the current location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueViewDto {
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_label: Option<String>,
    pub articles: Vec<ArticleCardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AffiliateCtaDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub label: String,
    pub partner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleViewDto {
    /// Article with its HTML content already sanitized.
    pub article: ArticleDto,
    /// SEO-friendly `<category>/<title>` path.
    pub seo_path: String,
    pub affiliate: AffiliateCtaDto,
    pub related: Vec<ArticleCardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_heading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageViewDto {
    pub key: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminViewDto {
    pub article_count: usize,
    pub articles: Vec<ArticleDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewContent {
    Catalogue(CatalogueViewDto),
    Article(ArticleViewDto),
    Page(PageViewDto),
    Admin(AdminViewDto),
}

/// Everything a client needs to render one navigation state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewDto {
    pub view: String,
    pub route: String,
    pub meta: PageMetaDto,
    pub breadcrumb: Vec<BreadcrumbItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub structured_data: Option<serde_json::Value>,
    pub content: ViewContent,
}
