// tests/e2e_views.rs
use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

async fn view(uri: &str, token: &str) -> Value {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get(uri, Some(token))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    support::json_body(resp).await
}

fn card_ids(view: &Value) -> Vec<&str> {
    view["content"]["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn empty_query_is_the_home_page() {
    let body = view("/api/v1/view", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "home");
    assert_eq!(body["route"], "");
    assert_eq!(body["content"]["kind"], "catalogue");
    assert_eq!(body["content"]["section"], "ALL");
    assert!(body["content"].get("filterLabel").is_none());
    assert_eq!(card_ids(&body), ["g1", "m1", "t1", "m2"]);
    assert_eq!(body["breadcrumb"], json!([]));
    assert_eq!(
        body["meta"]["title"],
        "Le Choix de Clara : l'arme secrète pour ses cadeaux | LeChoixDeClara.fr"
    );
    assert_eq!(body["meta"]["canonicalUrl"], "https://lechoixdeclara.fr/");
    assert_eq!(body["structuredData"]["@graph"][0]["@type"], "WebSite");
}

#[tokio::test]
async fn section_and_gallery_views() {
    let body = view("/api/v1/view?c=GEEK", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "home");
    assert_eq!(body["route"], "?c=GEEK");
    assert_eq!(body["content"]["filterLabel"], "Filtre : Le Coin Geek");
    assert_eq!(card_ids(&body), ["g1", "t1"]);
    assert!(body.get("structuredData").is_none());
    assert_eq!(body["breadcrumb"][1], json!({ "label": "Le Coin Geek" }));

    let body = view("/api/v1/view?c=GEEK&s=JEUX_VIDEO", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "category-gallery");
    assert_eq!(body["route"], "?c=GEEK&s=JEUX_VIDEO");
    assert_eq!(card_ids(&body), ["g1"]);
    assert_eq!(
        body["meta"]["title"],
        "Jeux Vidéos - Le Coin Geek | LeChoixDeClara.fr"
    );
    assert_eq!(body["breadcrumb"][1]["href"], "?c=GEEK");
    assert_eq!(body["breadcrumb"][2]["label"], "Jeux Vidéos");

    // A sub-category outside the section falls back to the section listing.
    let body = view("/api/v1/view?c=MODE&s=TECH", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "home");
    assert_eq!(card_ids(&body), ["m1", "m2"]);
}

#[tokio::test]
async fn empty_gallery_has_a_message() {
    let body = view("/api/v1/view?c=MODE&s=BEACHWEAR", support::VISITOR_TOKEN).await;
    assert_eq!(card_ids(&body), Vec::<&str>::new());
    assert_eq!(
        body["content"]["emptyMessage"],
        "Aucun test dans cette catégorie pour le moment."
    );
}

#[tokio::test]
async fn article_view_carries_seo_and_affiliate_data() {
    let body = view("/api/v1/view?a=m1", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "article");
    assert_eq!(body["route"], "?a=m1");
    assert_eq!(body["content"]["kind"], "article");
    assert_eq!(body["content"]["article"]["title"], "Legging gainant");
    assert_eq!(body["content"]["seoPath"], "activewear/legging-gainant");
    assert_eq!(body["content"]["affiliate"]["href"], "https://amzn.to/legging");
    assert_eq!(body["content"]["affiliate"]["label"], "Vérifier le prix sur Amazon");

    // m2 shares the section but not the category.
    assert_eq!(body["content"]["related"], json!([]));
    assert!(body["content"].get("relatedHeading").is_none());

    assert_eq!(body["meta"]["title"], "Legging gainant | Avis de Clara");
    assert_eq!(body["meta"]["ogType"], "article");
    assert_eq!(
        body["meta"]["image"],
        "https://lechoixdeclara.fr/images/legging.webp"
    );
    assert_eq!(body["structuredData"]["@type"], "Review");

    let labels: Vec<&str> = body["breadcrumb"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["Accueil", "Le Dressing", "Legging gainant"]);
}

#[tokio::test]
async fn related_articles_share_the_category() {
    let catalogue = vec![
        support::ArticleBuilder::new("a").title("Brassière").days_ago(1).build(),
        support::ArticleBuilder::new("b").title("Short").days_ago(2).build(),
        support::ArticleBuilder::new("c")
            .title("Pyjama")
            .category(clara_blog::domain::article::Category::Loungewear)
            .build(),
    ];
    let (app, _repo) = support::make_test_router_with(catalogue);

    let resp = app
        .oneshot(support::get("/api/v1/view?a=b", Some(support::VISITOR_TOKEN)))
        .await
        .unwrap();
    let body = support::json_body(resp).await;
    let related = body["content"]["related"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["id"], "a");
    assert_eq!(related[0]["href"], "?a=a");
    assert_eq!(body["content"]["relatedHeading"], "D'autres pépites activewear ?");
}

#[tokio::test]
async fn unknown_article_falls_back_to_home() {
    let body = view("/api/v1/view?a=vanished&c=GEEK", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "home");
    assert_eq!(body["content"]["section"], "ALL");
}

#[tokio::test]
async fn stored_content_is_sanitized_again_on_display() {
    let catalogue = vec![
        support::ArticleBuilder::new("x")
            .content(r#"<p onclick="steal()">Top</p><iframe src="https://evil.test"></iframe>"#)
            .build(),
    ];
    let (app, _repo) = support::make_test_router_with(catalogue);

    let resp = app
        .oneshot(support::get("/api/v1/view?a=x", Some(support::VISITOR_TOKEN)))
        .await
        .unwrap();
    let body = support::json_body(resp).await;
    assert_eq!(body["content"]["article"]["content"], "<p>Top</p>");
}

#[tokio::test]
async fn static_pages() {
    for (key, title) in [
        ("about", "À Propos : Qui est Clara ?"),
        ("privacy", "Politique de Confidentialité"),
        ("affiliation", "Divulgation d'Affiliation"),
        ("legal", "Mentions Légales"),
    ] {
        let body = view(&format!("/api/v1/view?p={key}"), support::VISITOR_TOKEN).await;
        assert_eq!(body["view"], key);
        assert_eq!(body["content"]["kind"], "page");
        assert_eq!(body["content"]["title"], title);
        assert!(!body["content"]["paragraphs"].as_array().unwrap().is_empty());
        assert_eq!(body["breadcrumb"][1]["label"], title);
    }
}

#[tokio::test]
async fn admin_view_is_reserved_to_the_administrator() {
    let body = view("/api/v1/view?p=admin", support::VISITOR_TOKEN).await;
    assert_eq!(body["view"], "home");

    let body = view("/api/v1/view?p=admin", support::ADMIN_TOKEN).await;
    assert_eq!(body["view"], "admin");
    assert_eq!(body["content"]["kind"], "admin");
    assert_eq!(body["content"]["articleCount"], 4);
    assert_eq!(
        body["content"]["analyticsUrl"],
        format!("{}?view=integrated", support::ANALYTICS_SHARE_URL)
    );
}

#[tokio::test]
async fn views_require_a_token() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get("/api/v1/view", None)).await.unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn admin_preview_renders_unsaved_draft() {
    let (app, repo) = support::make_test_router_with(support::sample_catalogue());
    let form = support::article_form("Pantalon Yoga", "ACTIVEWEAR");

    let resp = app
        .clone()
        .oneshot(support::send_json("POST", "/api/v1/admin/preview", Some(support::ADMIN_TOKEN), &form))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    assert_eq!(body["view"], "article");
    assert_eq!(body["content"]["article"]["id"], "preview");
    assert_eq!(body["content"]["article"]["slug"], "pantalon-yoga");
    assert_eq!(body["content"]["seoPath"], "activewear/pantalon-yoga");
    assert!(!body["content"]["article"]["content"].as_str().unwrap().contains("script"));
    assert_eq!(body["content"]["related"][0]["id"], "m1");
    assert_eq!(repo.snapshot().len(), 4);

    let resp = app
        .oneshot(support::send_json("POST", "/api/v1/admin/preview", Some(support::VISITOR_TOKEN), &form))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn analytics_embed_url_for_admin_only() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::get("/api/v1/admin/analytics", Some(support::ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    assert_eq!(
        body["embedUrl"],
        "https://cloud.umami.is/share/clara?view=integrated"
    );

    let resp = app
        .oneshot(support::get("/api/v1/admin/analytics", Some(support::VISITOR_TOKEN)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}
