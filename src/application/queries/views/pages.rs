// src/application/queries/views/pages.rs
use super::ViewQueryService;
use crate::{
    application::{
        dto::{PageViewDto, ViewContent, ViewDto},
        seo::{PageMeta, breadcrumb},
    },
    domain::navigation::{Route, StaticPage},
};

/// Fixed editorial content of an informational page.
#[derive(Debug, Clone, Copy)]
pub struct StaticPageContent {
    pub title: &'static str,
    pub description: &'static str,
    pub paragraphs: &'static [&'static str],
}

const ABOUT: StaticPageContent = StaticPageContent {
    title: "À Propos : Qui est Clara ?",
    description: "Clara, 28 ans, 1m78 : l'experte qui teste les cadeaux avant vous.",
    paragraphs: &[
        "Parce que trouver le cadeau parfait pour une femme ne devrait plus être une épreuve de force.",
        "Bienvenue sur mon site. Je m'appelle Clara. J'ai 28 ans, je mesure 1m78 et je possède une silhouette athlétique que j'entretiens avec passion.",
        "Ma mission : être l'arme secrète des hommes. Je teste tout ce qu'elle rêve de recevoir pour que vous ne puissiez plus jamais vous tromper.",
        "Je porte, je lave, je plie, je connecte et j'éprouve chaque produit avant de vous donner mon verdict final.",
        "Clara, experte en cadeaux (et en vérité).",
    ],
};

const PRIVACY: StaticPageContent = StaticPageContent {
    title: "Politique de Confidentialité",
    description: "Comment LeChoixDeClara.fr respecte votre anonymat.",
    paragraphs: &[
        "Le site LeChoixDeClara.fr respecte votre anonymat. Nous utilisons Umami Cloud pour nos statistiques, un outil respectueux de la vie privée qui ne dépose aucun cookie traceur et ne collecte aucune donnée personnelle identifiable.",
        "Vos données de navigation restent anonymes et ne sont jamais revendues.",
    ],
};

const AFFILIATION: StaticPageContent = StaticPageContent {
    title: "Divulgation d'Affiliation",
    description: "Transparence sur nos partenariats Amazon et Instant Gaming.",
    paragraphs: &[
        "LeChoixDeClara.fr participe au Programme Partenaires d'Amazon EU et au programme d'affiliation d'Instant Gaming.",
        "Ces programmes nous permettent de percevoir une commission sur les achats que vous effectuez via nos liens, sans aucun surcoût pour vous.",
        "En tant que Partenaire Amazon, je réalise un bénéfice sur les achats remplissant les conditions requises. Clara sélectionne les produits en toute indépendance selon ses tests personnels.",
    ],
};

const LEGAL: StaticPageContent = StaticPageContent {
    title: "Mentions Légales",
    description: "Éditeur, hébergement et propriété intellectuelle de LeChoixDeClara.fr.",
    paragraphs: &[
        "Le site LeChoixDeClara.fr est édité à titre personnel par son propriétaire.",
        "L'ensemble des contenus (textes, logos, photographies générées par IA de Clara) est la propriété exclusive de l'éditeur.",
        "Toute reproduction est interdite sans accord préalable.",
    ],
};

pub fn static_page(page: StaticPage) -> &'static StaticPageContent {
    match page {
        StaticPage::About => &ABOUT,
        StaticPage::Privacy => &PRIVACY,
        StaticPage::Affiliation => &AFFILIATION,
        StaticPage::Legal => &LEGAL,
    }
}

impl ViewQueryService {
    pub(super) fn page_view(&self, page: StaticPage) -> ViewDto {
        let route = Route::Page(page);
        let content = static_page(page);

        let meta = PageMeta::new(content.title, content.description, route.clone());
        let meta = if page == StaticPage::About {
            meta.image(self.site.default_image_path.clone())
        } else {
            meta
        };

        ViewDto {
            view: route.view_name().to_string(),
            route: route.to_query(),
            meta: meta.render(&self.site),
            breadcrumb: breadcrumb::page_trail(content.title),
            structured_data: None,
            content: ViewContent::Page(PageViewDto {
                key: page.key().to_string(),
                title: content.title.to_string(),
                paragraphs: content.paragraphs.iter().map(|p| p.to_string()).collect(),
            }),
        }
    }
}
