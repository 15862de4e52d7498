// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use clara_blog::application::ports::util::SlugGenerator;
use clara_blog::domain::article::*;
use clara_blog::infrastructure::util::DefaultSlugGenerator;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: String,
    title: String,
    category: Category,
    excerpt: String,
    content: String,
    image_url: String,
    image_alt: String,
    affiliate_link: Option<String>,
    affiliate_type: AffiliateType,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "Legging gainant".into(),
            category: Category::Activewear,
            excerpt: "Tenue parfaite pendant une heure de HIIT.".into(),
            content: "<p>Testé pendant trois semaines.</p>".into(),
            image_url: "images/legging.webp".into(),
            image_alt: "Legging noir".into(),
            affiliate_link: Some("https://amzn.to/legging".into()),
            affiliate_type: AffiliateType::Amazon,
            created_at: fixed_now() - Duration::days(1),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn affiliate(mut self, link: Option<&str>, kind: AffiliateType) -> Self {
        self.affiliate_link = link.map(Into::into);
        self.affiliate_type = kind;
        self
    }

    /// 作成日時を固定時刻から `days` 日前に設定
    pub fn days_ago(mut self, days: i64) -> Self {
        self.created_at = fixed_now() - Duration::days(days);
        self
    }

    pub fn build(self) -> Article {
        let slug = DefaultSlugGenerator.slugify(&self.title);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            fields: ArticleFields {
                title: ArticleTitle::new(self.title).unwrap(),
                category: self.category,
                excerpt: ArticleExcerpt::new(self.excerpt).unwrap(),
                content: ArticleContent::new(self.content).unwrap(),
                image_url: ImageUrl::new(self.image_url).unwrap(),
                image_alt: ImageAlt::new(self.image_alt).unwrap(),
                affiliate_link: self.affiliate_link.map(|l| AffiliateLink::new(l).unwrap()),
                affiliate_type: self.affiliate_type,
            },
            slug: ArticleSlug::new(slug).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// 両セクションにまたがる小さなカタログ（新しい順: g1, m1, t1, m2）
pub fn sample_catalogue() -> Vec<Article> {
    vec![
        ArticleBuilder::new("m1")
            .title("Legging gainant")
            .category(Category::Activewear)
            .days_ago(2)
            .build(),
        ArticleBuilder::new("m2")
            .title("Pyjama en soie")
            .category(Category::Loungewear)
            .days_ago(10)
            .build(),
        ArticleBuilder::new("g1")
            .title("Manette sans fil")
            .category(Category::Geek)
            .affiliate(Some("https://www.instant-gaming.com/fr/"), AffiliateType::InstantGaming)
            .days_ago(1)
            .build(),
        ArticleBuilder::new("t1")
            .title("Casque Bluetooth")
            .category(Category::Tech)
            .affiliate(None, AffiliateType::Amazon)
            .days_ago(5)
            .build(),
    ]
}

/// 管理画面フォームと同じ形の JSON
pub fn article_form(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "category": category,
        "excerpt": "Un avis franc et sans détour.",
        "content": "<p>Confort <strong>impeccable</strong>.</p><script>alert(1)</script>",
        "imageUrl": "images/test.webp",
        "imageAlt": "Photo du produit",
        "affiliateLink": "https://amzn.to/xyz",
        "affiliateType": "AMAZON"
    })
}
