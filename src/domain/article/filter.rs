// src/domain/article/filter.rs
use crate::domain::article::category::{Section, SubCategory};
use crate::domain::article::entity::Article;

pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleFilter {
    pub section: Section,
    pub sub_category: Option<SubCategory>,
}

impl ArticleFilter {
    pub fn section(section: Section) -> Self {
        Self {
            section,
            sub_category: None,
        }
    }

    pub fn gallery(section: Section, sub_category: SubCategory) -> Self {
        Self {
            section,
            sub_category: Some(sub_category),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.section == Section::All && self.sub_category.is_none()
    }

    pub fn matches(&self, article: &Article) -> bool {
        if !self.section.includes(article.category()) {
            return false;
        }
        self.sub_category
            .is_none_or(|sub| article.sub_category() == sub)
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Catalogue order: newest first, id as tie-breaker so the order is stable.
pub fn sort_catalogue(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.as_str().cmp(a.id.as_str()))
    });
}

/// Other articles of the same category, in catalogue order.
pub fn related_articles<'a>(catalogue: &'a [Article], article: &Article) -> Vec<&'a Article> {
    catalogue
        .iter()
        .filter(|other| other.category() == article.category() && other.id != article.id)
        .take(RELATED_LIMIT)
        .collect()
}
