// src/domain/navigation.rs
//! Query-string routing. The whole public surface of the site is addressed by
//! four query keys: `a` (article id), `p` (page), `c` (section) and `s`
//! (sub-category).

use crate::domain::article::{ArticleId, Section, SubCategory};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticPage {
    About,
    Privacy,
    Affiliation,
    Legal,
}

impl StaticPage {
    pub const ALL: [StaticPage; 4] = [
        StaticPage::About,
        StaticPage::Privacy,
        StaticPage::Affiliation,
        StaticPage::Legal,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StaticPage::About => "about",
            StaticPage::Privacy => "privacy",
            StaticPage::Affiliation => "affiliation",
            StaticPage::Legal => "legal",
        }
    }
}

impl FromStr for StaticPage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StaticPage::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or(())
    }
}

/// Raw query parameters as they appear in the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home(Section),
    CategoryGallery(Section, SubCategory),
    Article(ArticleId),
    Page(StaticPage),
    Admin,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home(Section::All)
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl Route {
    /// Map URL parameters to a route. Article beats page beats section;
    /// anything unrecognised lands on the unfiltered home page.
    pub fn from_params(params: &RouteParams) -> Self {
        if let Some(id) = non_empty(params.a.as_ref()).and_then(|a| ArticleId::new(a).ok()) {
            return Route::Article(id);
        }

        if let Some(page) = non_empty(params.p.as_ref()) {
            if page == "admin" {
                return Route::Admin;
            }
            if let Ok(page) = page.parse::<StaticPage>() {
                return Route::Page(page);
            }
        }

        let section = non_empty(params.c.as_ref())
            .and_then(|c| c.parse::<Section>().ok())
            .unwrap_or_default();

        if section != Section::All {
            let sub = non_empty(params.s.as_ref())
                .and_then(|s| s.parse::<SubCategory>().ok())
                .filter(|sub| sub.section() == section);
            if let Some(sub) = sub {
                return Route::CategoryGallery(section, sub);
            }
        }

        Route::Home(section)
    }

    pub fn to_params(&self) -> RouteParams {
        let mut params = RouteParams::default();
        match self {
            Route::Home(Section::All) => {}
            Route::Home(section) => params.c = Some(section.as_str().into()),
            Route::CategoryGallery(section, sub) => {
                params.c = Some(section.as_str().into());
                params.s = Some(sub.as_str().into());
            }
            Route::Article(id) => params.a = Some(id.to_string()),
            Route::Page(page) => params.p = Some(page.key().into()),
            Route::Admin => params.p = Some("admin".into()),
        }
        params
    }

    /// URL suffix for this route, e.g. `?a=abc` or an empty string for home.
    pub fn to_query(&self) -> String {
        let encoded = serde_urlencoded::to_string(self.to_params()).unwrap_or_default();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{encoded}")
        }
    }

    pub fn view_name(&self) -> &'static str {
        match self {
            Route::Home(_) => "home",
            Route::CategoryGallery(..) => "category-gallery",
            Route::Article(_) => "article",
            Route::Page(page) => page.key(),
            Route::Admin => "admin",
        }
    }
}
