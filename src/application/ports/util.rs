// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    /// `<category>/<title>` path used for SEO-friendly links.
    fn article_path(&self, category: &str, title: &str) -> String {
        format!("{}/{}", self.slugify(category), self.slugify(title))
    }
}
