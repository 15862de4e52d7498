// src/bin/write_sitemap.rs
use anyhow::Result;
use chrono::Utc;
use clara_blog::application::seo::{SiteProfile, render_sitemap, sitemap_entries};
use clara_blog::config::SitemapConfig;
use clara_blog::domain::article::{ArticleReadRepository, sort_catalogue};
use clara_blog::infrastructure::{database, repositories::PostgresArticleReadRepository};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SitemapConfig::from_env();
    let site = SiteProfile::new(config.site_base_url());

    let pool = database::init_pool(config.database_url()).await?;
    let repo = PostgresArticleReadRepository::new(pool);
    let mut articles = repo.list().await?;
    sort_catalogue(&mut articles);

    let entries = sitemap_entries(&site, &articles, Utc::now().date_naive());
    let xml = render_sitemap(&entries)?;

    let path = Path::new(config.output_path());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, xml)?;
    println!(
        "Sitemap with {} URLs written to {}",
        entries.len(),
        config.output_path()
    );
    Ok(())
}
