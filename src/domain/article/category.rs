// src/domain/article/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Product category chosen by the admin when writing a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Activewear,
    Loungewear,
    Beachwear,
    Geek,
    Tech,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Activewear,
        Category::Loungewear,
        Category::Beachwear,
        Category::Geek,
        Category::Tech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Activewear => "ACTIVEWEAR",
            Category::Loungewear => "LOUNGEWEAR",
            Category::Beachwear => "BEACHWEAR",
            Category::Geek => "GEEK",
            Category::Tech => "TECH",
        }
    }

    pub fn sub_category(&self) -> SubCategory {
        match self {
            Category::Activewear => SubCategory::Activewear,
            Category::Loungewear => SubCategory::Loungewear,
            Category::Beachwear => SubCategory::Beachwear,
            Category::Geek => SubCategory::JeuxVideo,
            Category::Tech => SubCategory::Tech,
        }
    }

    /// The parent section an article of this category is listed under.
    pub fn section(&self) -> Section {
        match self {
            Category::Activewear | Category::Loungewear | Category::Beachwear => Section::Mode,
            Category::Geek | Category::Tech => Section::Geek,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown category '{s}'")))
    }
}

/// Finer grouping shown in category galleries; always derived from [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubCategory {
    Activewear,
    Loungewear,
    Beachwear,
    JeuxVideo,
    Tech,
}

impl SubCategory {
    pub const ALL: [SubCategory; 5] = [
        SubCategory::Activewear,
        SubCategory::Loungewear,
        SubCategory::Beachwear,
        SubCategory::JeuxVideo,
        SubCategory::Tech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::Activewear => "ACTIVEWEAR",
            SubCategory::Loungewear => "LOUNGEWEAR",
            SubCategory::Beachwear => "BEACHWEAR",
            SubCategory::JeuxVideo => "JEUX_VIDEO",
            SubCategory::Tech => "TECH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubCategory::Activewear => "Activewear",
            SubCategory::Loungewear => "Loungewear",
            SubCategory::Beachwear => "Beachwear",
            SubCategory::JeuxVideo => "Jeux Vidéos",
            SubCategory::Tech => "Tech",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            SubCategory::Activewear | SubCategory::Loungewear | SubCategory::Beachwear => {
                Section::Mode
            }
            SubCategory::JeuxVideo | SubCategory::Tech => Section::Geek,
        }
    }
}

impl FromStr for SubCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubCategory::ALL
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown sub-category '{s}'")))
    }
}

/// Top-level catalogue filter. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    #[default]
    All,
    Mode,
    Geek,
}

const MODE_CATEGORIES: &[Category] = &[
    Category::Activewear,
    Category::Loungewear,
    Category::Beachwear,
];
const GEEK_CATEGORIES: &[Category] = &[Category::Geek, Category::Tech];

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::All => "ALL",
            Section::Mode => "MODE",
            Section::Geek => "GEEK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::All => "Accueil",
            Section::Mode => "Le Dressing",
            Section::Geek => "Le Coin Geek",
        }
    }

    /// Heading of the article grid when this section is selected.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::All => "Derniers tests de Clara",
            Section::Mode => "Le Dressing de Clara",
            Section::Geek => "Le Coin Geek",
        }
    }

    pub fn includes(&self, category: Category) -> bool {
        match self {
            Section::All => true,
            Section::Mode => MODE_CATEGORIES.contains(&category),
            Section::Geek => GEEK_CATEGORIES.contains(&category),
        }
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Section::All),
            "MODE" => Ok(Section::Mode),
            "GEEK" => Ok(Section::Geek),
            other => Err(DomainError::Validation(format!("unknown section '{other}'"))),
        }
    }
}

/// Commission program a purchase link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AffiliateType {
    #[default]
    Amazon,
    InstantGaming,
}

impl AffiliateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffiliateType::Amazon => "AMAZON",
            AffiliateType::InstantGaming => "INSTANT_GAMING",
        }
    }

    pub fn partner_name(&self) -> &'static str {
        match self {
            AffiliateType::Amazon => "Amazon",
            AffiliateType::InstantGaming => "Instant Gaming",
        }
    }

    pub fn call_to_action(&self) -> &'static str {
        match self {
            AffiliateType::Amazon => "Vérifier le prix sur Amazon",
            AffiliateType::InstantGaming => "Vérifier la promo sur Instant Gaming",
        }
    }
}

impl FromStr for AffiliateType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AMAZON" => Ok(AffiliateType::Amazon),
            "INSTANT_GAMING" => Ok(AffiliateType::InstantGaming),
            other => Err(DomainError::Validation(format!(
                "unknown affiliate type '{other}'"
            ))),
        }
    }
}

pub fn parse_category(value: &str) -> DomainResult<Category> {
    value.trim().parse()
}
