// src/application/queries/views/catalogue.rs
use super::ViewQueryService;
use crate::{
    application::{
        dto::{ArticleCardDto, CatalogueViewDto, ViewContent, ViewDto},
        seo::{PageMeta, breadcrumb, structured_data},
    },
    domain::{
        article::{Article, ArticleFilter, Section, SubCategory},
        navigation::Route,
    },
};

const EMPTY_MESSAGE: &str = "Aucun test dans cette catégorie pour le moment.";
const HOME_TITLE: &str = "Le Choix de Clara : l'arme secrète pour ses cadeaux";

impl ViewQueryService {
    pub(super) fn catalogue_view(
        &self,
        catalogue: &[Article],
        section: Section,
        sub_category: Option<SubCategory>,
    ) -> ViewDto {
        let (route, filter) = match sub_category {
            Some(sub) => (
                Route::CategoryGallery(section, sub),
                ArticleFilter::gallery(section, sub),
            ),
            None => (Route::Home(section), ArticleFilter::section(section)),
        };

        let articles: Vec<ArticleCardDto> = filter
            .apply(catalogue)
            .into_iter()
            .map(ArticleCardDto::from)
            .collect();

        let title = match (section, sub_category) {
            (Section::All, _) => HOME_TITLE.to_string(),
            (section, None) => section.heading().to_string(),
            (section, Some(sub)) => format!("{} - {}", sub.label(), section.label()),
        };

        let meta = PageMeta::new(title, self.site.tagline.clone(), route.clone()).render(&self.site);
        let structured_data =
            (section == Section::All).then(|| structured_data::home_graph(&self.site));

        let content = CatalogueViewDto {
            section: section.as_str().to_string(),
            sub_category: sub_category.map(|sub| sub.as_str().to_string()),
            heading: section.heading().to_string(),
            filter_label: (section != Section::All)
                .then(|| format!("Filtre : {}", section.label())),
            empty_message: articles.is_empty().then(|| EMPTY_MESSAGE.to_string()),
            articles,
        };

        ViewDto {
            view: route.view_name().to_string(),
            route: route.to_query(),
            meta,
            breadcrumb: breadcrumb::catalogue_trail(section, sub_category),
            structured_data,
            content: ViewContent::Catalogue(content),
        }
    }
}
