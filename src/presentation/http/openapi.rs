// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::sign_in_anonymously,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::views::resolve_view,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::feed::live_articles,
        crate::presentation::http::controllers::admin::preview_article,
        crate::presentation::http::controllers::admin::analytics,
        crate::presentation::http::controllers::site::sitemap,
        crate::presentation::http::controllers::site::health
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::site::StatusResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::presentation::http::controllers::admin::AnalyticsResponse,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleCardDto,
            crate::application::dto::ArticleSnapshot,
            crate::application::dto::ViewDto,
            crate::application::dto::ViewContent,
            crate::application::dto::PageMetaDto,
            crate::application::dto::MetaTagDto,
            crate::application::dto::BreadcrumbItemDto,
            crate::application::dto::CatalogueViewDto,
            crate::application::dto::ArticleViewDto,
            crate::application::dto::AffiliateCtaDto,
            crate::application::dto::PageViewDto,
            crate::application::dto::AdminViewDto
        )
    ),
    tags(
        (name = "Auth", description = "Visitor and administrator sessions"),
        (name = "Views", description = "Page resolution for the public site"),
        (name = "Articles", description = "Product test catalogue"),
        (name = "Admin", description = "Editorial console"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Le Choix de Clara API",
        description = "Catalogue, page views and editorial console for LeChoixDeClara.fr",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:8080") {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    // The Swagger UI router also serves the document at /openapi.json.
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
