// src/application/ports/sanitizer.rs
/// Removes markup that must never reach a reader's browser.
pub trait HtmlSanitizer: Send + Sync {
    fn sanitize(&self, dirty: &str) -> String;
}
