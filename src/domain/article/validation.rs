// src/domain/article/validation.rs
use crate::domain::article::category::{AffiliateType, Category};
use crate::domain::article::entity::ArticleFields;
use crate::domain::article::value_objects::{
    AffiliateLink, ArticleContent, ArticleExcerpt, ArticleTitle, CONTENT_MAX_CHARS,
    EXCERPT_MAX_CHARS, IMAGE_ALT_MAX_CHARS, ImageAlt, ImageUrl, TITLE_MAX_CHARS,
};
use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("title is required")]
    TitleMissing,
    #[error("title is too long (max {TITLE_MAX_CHARS} characters)")]
    TitleTooLong,
    #[error("category is invalid")]
    CategoryInvalid,
    #[error("excerpt is required")]
    ExcerptMissing,
    #[error("excerpt is too long (max {EXCERPT_MAX_CHARS} characters)")]
    ExcerptTooLong,
    #[error("content is required")]
    ContentMissing,
    #[error("content is too long (max {CONTENT_MAX_CHARS} characters)")]
    ContentTooLong,
    #[error("image url is required")]
    ImageUrlMissing,
    #[error("image url is invalid (http(s) url or site path expected)")]
    ImageUrlInvalid,
    #[error("image alt text is required")]
    ImageAltMissing,
    #[error("image alt text is too long (max {IMAGE_ALT_MAX_CHARS} characters)")]
    ImageAltTooLong,
    #[error("affiliate link is invalid (must start with http:// or https://)")]
    AffiliateLinkInvalid,
    #[error("affiliate type is invalid")]
    AffiliateTypeInvalid,
}

/// Raw article input as submitted by the admin form.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub image_alt: String,
    pub affiliate_link: Option<String>,
    pub affiliate_type: Option<String>,
}

fn check_text(value: &str, max: usize, missing: ValidationIssue, too_long: ValidationIssue, issues: &mut Vec<ValidationIssue>) {
    if value.is_empty() {
        issues.push(missing);
    } else if value.chars().count() > max {
        issues.push(too_long);
    }
}

impl ArticleDraft {
    /// Trim surrounding whitespace from every free-text field.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            image_alt: self.image_alt.trim().to_string(),
            affiliate_link: self
                .affiliate_link
                .map(|link| link.trim().to_string())
                .filter(|link| !link.is_empty()),
            affiliate_type: self
                .affiliate_type
                .map(|kind| kind.trim().to_string())
                .filter(|kind| !kind.is_empty()),
        }
    }

    /// Every problem with the draft, in form order. Empty when the draft is valid.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        check_text(&self.title, TITLE_MAX_CHARS, ValidationIssue::TitleMissing, ValidationIssue::TitleTooLong, &mut issues);

        if self.category.parse::<Category>().is_err() {
            issues.push(ValidationIssue::CategoryInvalid);
        }

        check_text(&self.excerpt, EXCERPT_MAX_CHARS, ValidationIssue::ExcerptMissing, ValidationIssue::ExcerptTooLong, &mut issues);
        check_text(&self.content, CONTENT_MAX_CHARS, ValidationIssue::ContentMissing, ValidationIssue::ContentTooLong, &mut issues);

        if self.image_url.is_empty() {
            issues.push(ValidationIssue::ImageUrlMissing);
        } else if ImageUrl::new(self.image_url.clone()).is_err() {
            issues.push(ValidationIssue::ImageUrlInvalid);
        }

        check_text(&self.image_alt, IMAGE_ALT_MAX_CHARS, ValidationIssue::ImageAltMissing, ValidationIssue::ImageAltTooLong, &mut issues);

        if let Some(link) = &self.affiliate_link {
            if AffiliateLink::new(link.clone()).is_err() {
                issues.push(ValidationIssue::AffiliateLinkInvalid);
            }
        }

        if let Some(kind) = &self.affiliate_type {
            if kind.parse::<AffiliateType>().is_err() {
                issues.push(ValidationIssue::AffiliateTypeInvalid);
            }
        }

        issues
    }

    /// Normalize, validate and convert into typed fields.
    pub fn into_fields(self) -> Result<ArticleFields, DomainError> {
        let draft = self.normalized();
        let issues = draft.issues();
        if !issues.is_empty() {
            let message = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DomainError::Validation(message));
        }

        Ok(ArticleFields {
            title: ArticleTitle::new(draft.title)?,
            category: draft.category.parse()?,
            excerpt: ArticleExcerpt::new(draft.excerpt)?,
            content: ArticleContent::new(draft.content)?,
            image_url: ImageUrl::new(draft.image_url)?,
            image_alt: ImageAlt::new(draft.image_alt)?,
            affiliate_link: draft.affiliate_link.map(AffiliateLink::new).transpose()?,
            affiliate_type: draft
                .affiliate_type
                .map(|kind| kind.parse())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}
