pub mod category;
pub mod entity;
pub mod filter;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use category::{AffiliateType, Category, Section, SubCategory};
pub use entity::{Article, ArticleFields, NewArticle};
pub use filter::{ArticleFilter, related_articles, sort_catalogue};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use validation::{ArticleDraft, ValidationIssue};
pub use value_objects::{
    AffiliateLink, ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle, ImageAlt,
    ImageUrl,
};
