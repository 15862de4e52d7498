// src/application/seo/mod.rs
pub mod breadcrumb;
pub mod meta;
pub mod site;
pub mod sitemap;
pub mod structured_data;

pub use meta::PageMeta;
pub use site::SiteProfile;
pub use sitemap::{SitemapEntry, render_sitemap, sitemap_entries};
