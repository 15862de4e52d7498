// tests/e2e_auth.rs
use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn anonymous_sign_in_issues_visitor_session() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::send_json("POST", "/api/v1/auth/anonymous", None, &json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = support::json_body(resp).await;
    assert_eq!(body["token"]["token"], support::VISITOR_TOKEN);
    assert_eq!(body["token"]["expires_in"], 86_400);
    assert_eq!(body["user"]["role"], "visitor");
    assert_eq!(body["user"]["is_anonymous"], true);
    assert_eq!(body["user"]["display_name"], "Visiteur");
    assert!(body["user"]["uid"].as_str().unwrap().starts_with("anon-"));
    assert_eq!(body["user"]["capabilities"], json!(["articles:read"]));
}

#[tokio::test]
async fn admin_login_with_valid_credentials() {
    let app = support::make_test_router();

    let payload = json!({ "email": "Clara@LeChoixDeClara.fr", "password": support::ADMIN_PASSWORD });
    let resp = app
        .oneshot(support::send_json("POST", "/api/v1/auth/login", None, &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = support::json_body(resp).await;
    assert_eq!(body["token"]["token"], support::ADMIN_TOKEN);
    assert_eq!(body["token"]["expires_in"], 3600);
    assert_eq!(body["user"]["uid"], support::ADMIN_UID);
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["is_anonymous"], false);
    let caps = body["user"]["capabilities"].as_array().unwrap();
    assert!(caps.contains(&json!("analytics:view")));
    assert!(caps.contains(&json!("articles:delete")));
}

#[tokio::test]
async fn wrong_password_is_access_denied() {
    let app = support::make_test_router();

    let payload = json!({ "email": support::ADMIN_EMAIL, "password": "guess" });
    let resp = app
        .oneshot(support::send_json("POST", "/api/v1/auth/login", None, &payload))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn unknown_and_malformed_emails_look_the_same() {
    let app = support::make_test_router();

    let unknown = app
        .clone()
        .oneshot(support::send_json(
            "POST",
            "/api/v1/auth/login",
            None,
            &json!({ "email": "someone@else.fr", "password": support::ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();
    let malformed = app
        .oneshot(support::send_json(
            "POST",
            "/api/v1/auth/login",
            None,
            &json!({ "email": "not-an-email", "password": "x" }),
        ))
        .await
        .unwrap();

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(malformed.status(), StatusCode::UNAUTHORIZED);
    let unknown = support::json_body(unknown).await;
    let malformed = support::json_body(malformed).await;
    assert_eq!(unknown, malformed);
    assert_eq!(unknown["message"], "access denied");
}

#[tokio::test]
async fn me_reflects_the_token_subject() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::get("/api/v1/auth/me", Some(support::ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::json_body(resp).await;
    assert_eq!(body["uid"], support::ADMIN_UID);
    assert_eq!(body["role"], "admin");

    let resp = app
        .oneshot(support::get("/api/v1/auth/me", Some(support::VISITOR_TOKEN)))
        .await
        .unwrap();
    let body = support::json_body(resp).await;
    assert_eq!(body["role"], "visitor");
    assert_eq!(body["is_anonymous"], true);
}

#[tokio::test]
async fn me_requires_a_token() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::get("/api/v1/auth/me", None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .oneshot(support::get("/api/v1/auth/me", Some(support::EXPIRED_TOKEN)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}
