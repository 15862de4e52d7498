// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use unicode_normalization::UnicodeNormalization;

/// Lowercase ASCII slugs. Accents are removed by canonical decomposition;
/// any other character outside `[a-z0-9]`, whitespace and `-` is dropped, not
/// transliterated (`Cœur 50€` gives `cur-50`). Words are joined by single dashes.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let kept: String = input
            .to_lowercase()
            .nfd()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
            .collect();
        slug::slugify(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_punctuation() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Le Legging de l'été !"), "le-legging-de-lete");
        assert_eq!(slugger.slugify("Jeux Vidéos"), "jeux-videos");
        assert_eq!(slugger.slugify("Crème & Soin"), "creme-soin");
    }

    #[test]
    fn drops_symbols_instead_of_transliterating() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Cœur 50€ ½ Straße"), "cur-50-strae");
        assert_eq!(slugger.slugify("Œuvre"), "uvre");
        assert_eq!(slugger.slugify("Prix 30€"), "prix-30");
        assert_eq!(slugger.slugify("Größe"), "groe");
        assert_eq!(slugger.slugify("½ tasse"), "tasse");
    }

    #[test]
    fn collapses_dashes_and_whitespace() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("  push -- up   bra  "), "push-up-bra");
        assert_eq!(slugger.slugify("--Casque--"), "casque");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn is_deterministic() {
        let slugger = DefaultSlugGenerator;
        let title = "Sweat Oversize Été 2025";
        assert_eq!(slugger.slugify(title), slugger.slugify(title));
        assert_eq!(slugger.slugify(title), "sweat-oversize-ete-2025");
    }

    #[test]
    fn article_path_joins_category_and_title() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(
            slugger.article_path("ACTIVEWEAR", "Brassière Sport"),
            "activewear/brassiere-sport"
        );
    }
}
