// src/application/seo/breadcrumb.rs
//! Navigation trails. Every trail starts at "Accueil"; the last item is the
//! current location and carries no link.

use crate::application::dto::BreadcrumbItemDto;
use crate::domain::article::{Article, Section, SubCategory};
use crate::domain::navigation::Route;

const HOME_LABEL: &str = "Accueil";

fn link(label: &str, route: Route) -> BreadcrumbItemDto {
    BreadcrumbItemDto {
        label: label.to_string(),
        href: Some(route.to_query()),
    }
}

fn current(label: &str) -> BreadcrumbItemDto {
    BreadcrumbItemDto {
        label: label.to_string(),
        href: None,
    }
}

fn home() -> BreadcrumbItemDto {
    link(HOME_LABEL, Route::default())
}

/// Trail for a catalogue listing. The unfiltered home page has none.
pub fn catalogue_trail(section: Section, sub_category: Option<SubCategory>) -> Vec<BreadcrumbItemDto> {
    if section == Section::All {
        return Vec::new();
    }
    match sub_category {
        None => vec![home(), current(section.label())],
        Some(sub) => vec![
            home(),
            link(section.label(), Route::Home(section)),
            current(sub.label()),
        ],
    }
}

pub fn article_trail(article: &Article) -> Vec<BreadcrumbItemDto> {
    let section = article.category().section();
    vec![
        home(),
        link(section.label(), Route::Home(section)),
        current(article.fields.title.as_str()),
    ]
}

pub fn page_trail(title: &str) -> Vec<BreadcrumbItemDto> {
    vec![home(), current(title)]
}
