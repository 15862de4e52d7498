// src/application/seo/sitemap.rs
use super::site::SiteProfile;
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::article::Article;
use crate::domain::navigation::{Route, StaticPage};
use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub const HOME_PRIORITY: f32 = 1.0;
pub const ABOUT_PRIORITY: f32 = 0.8;
pub const ARTICLE_PRIORITY: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub priority: f32,
}

/// Home, the about page, then one entry per article in the given order.
pub fn sitemap_entries(site: &SiteProfile, articles: &[Article], today: NaiveDate) -> Vec<SitemapEntry> {
    let entry = |loc: String, priority: f32| SitemapEntry {
        loc,
        lastmod: today,
        priority,
    };

    let mut entries = Vec::with_capacity(articles.len() + 2);
    entries.push(entry(site.home_url(), HOME_PRIORITY));
    entries.push(entry(
        site.url_for(&Route::Page(StaticPage::About)),
        ABOUT_PRIORITY,
    ));
    entries.extend(
        articles
            .iter()
            .map(|article| entry(site.url_for(&Route::Article(article.id.clone())), ARTICLE_PRIORITY)),
    );
    entries
}

fn xml_error(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("sitemap serialization failed: {err}"))
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> ApplicationResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)?;
    Ok(())
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> ApplicationResult<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer
        .write_event(Event::Start(urlset))
        .map_err(xml_error)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(xml_error)?;
        // BytesText escapes the '&' that joins query parameters
        write_text_element(&mut writer, "loc", &entry.loc)?;
        write_text_element(
            &mut writer,
            "lastmod",
            &entry.lastmod.format("%Y-%m-%d").to_string(),
        )?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(xml_error)?;

    let body = writer.into_inner().into_inner();
    let mut xml = String::from_utf8(body).map_err(xml_error)?;
    xml.push('\n');
    Ok(xml)
}
