use actix_web::http::StatusCode;
use rstest::*;
use serde_json::json;

use crate::tests::utils::seed::seed_account;
use crate::tests::{Account, Error, TestContext, context, create_account};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[rstest]
#[awt]
#[actix_web::test]
async fn test_create_and_follow_location(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let (location, created) = create_account(&app, "John").await;

    assert_eq!(location, format!("/accounts/{}", created.id));
    assert_eq!(created.name, "John");
    assert_eq!(created.email, "john@example.com");
    assert_eq!(created.password, "secret");

    let res = TestRequest::get().uri(&location).send_request(&app).await;

    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Account = test::read_body_json(res).await;
    assert_eq!(fetched, created);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_ids_are_unique(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let (_, first) = create_account(&app, "John").await;

    let res = TestRequest::delete()
        .uri(&format!("/accounts/{}", first.id))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let (_, second) = create_account(&app, "John").await;

    assert_ne!(first.id, second.id);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_list_and_filter(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    seed_account(&context.db.connection, "John").await;
    seed_account(&context.db.connection, "Jane").await;
    seed_account(&context.db.connection, "John").await;

    let res = TestRequest::get().uri("/accounts").send_request(&app).await;
    assert_eq!(res.status(), StatusCode::OK);

    let all: Vec<Account> = test::read_body_json(res).await;
    assert_eq!(all.len(), 3);

    let res = TestRequest::get()
        .uri("/accounts?name=John")
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let johns: Vec<Account> = test::read_body_json(res).await;
    assert_eq!(johns.len(), 2);
    assert!(johns.iter().all(|a| a.name == "John"));

    let res = TestRequest::get()
        .uri("/accounts?name=Jo")
        .send_request(&app)
        .await;

    let partial: Vec<Account> = test::read_body_json(res).await;
    assert!(partial.is_empty());

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_read_missing_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::get()
        .uri("/accounts/999999")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 404);
    assert_eq!(err.message, "Account with id [999999] not found.");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_update_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection, "John").await;

    let res = TestRequest::put()
        .uri(&format!("/accounts/{}", account.id))
        .set_json(json!({
            "id": account.id + 100,
            "name": "Johnny",
            "email": "johnny@example.com",
            "password": "hunter2",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let updated: Account = test::read_body_json(res).await;
    assert_eq!(updated.id, account.id);
    assert_eq!(updated.name, "Johnny");

    let res = TestRequest::get()
        .uri(&format!("/accounts/{}", account.id))
        .send_request(&app)
        .await;

    let fetched: Account = test::read_body_json(res).await;
    assert_eq!(fetched, updated);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_update_text_plain(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection, "John").await;

    let res = TestRequest::put()
        .uri(&format!("/accounts/{}", account.id))
        .insert_header(("content-type", "text/plain"))
        .set_payload("name=Johnny")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_delete_twice(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection, "John").await;

    for _ in 0..2 {
        let res = TestRequest::delete()
            .uri(&format!("/accounts/{}", account.id))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    let res = TestRequest::get()
        .uri(&format!("/accounts/{}", account.id))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[case::non_integer_id("/accounts/abc")]
#[case::unknown_route("/nowhere")]
#[awt]
#[actix_web::test]
async fn test_unroutable_paths(#[future] context: TestContext, #[case] uri: &str) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::get().uri(uri).send_request(&app).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("x-request-id"));

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 404);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_health(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::get().uri("/health").send_request(&app).await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "OK" }));

    let res = TestRequest::get().uri("/").send_request(&app).await;

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({ "name": "Account REST API Service", "status": "OK", "version": "1.0" })
    );

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_openapi_document(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::get()
        .uri("/api-docs/openapi.json")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["paths"]["/accounts"].is_object());
    assert!(body["paths"]["/accounts/{id}"].is_object());

    let _ = context.db.container.stop().await;
}
