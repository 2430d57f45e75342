//! End-to-end coverage of the HTTP surface against a real temporary store.
//!
//! Each test builds the full Actix app with Diesel-backed repositories over
//! a fresh SQLite file, so constraint enforcement (unique email, foreign
//! key) is exercised for real rather than stubbed.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use backend::Trace;
use backend::inbound::http::HttpState;
use backend::inbound::http::health::welcome;
use backend::inbound::http::items::{post_item, search_items};
use backend::inbound::http::users::register;
use backend::outbound::persistence::{
    DbPool, DieselItemRepository, DieselUserRepository, PoolConfig, run_migrations,
};

struct TestStore {
    _dir: TempDir,
    state: HttpState,
}

fn test_store() -> TestStore {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("hub.db");
    let pool = DbPool::new(PoolConfig::new(db_path.to_string_lossy())).expect("build pool");
    run_migrations(&pool).expect("migrations");
    let state = HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselItemRepository::new(pool)),
    );
    TestStore { _dir: dir, state }
}

macro_rules! init_app {
    ($store:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new($store.state.clone()))
                .wrap(Trace)
                .service(welcome)
                .service(register)
                .service(post_item)
                .service(search_items),
        )
        .await
    };
}

async fn post_json<S>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let value = actix_test::read_body_json(response).await;
    (status, value)
}

async fn get_json<S>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let value = actix_test::read_body_json(response).await;
    (status, value)
}

fn register_body(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email })
}

fn item_body(title: &str, description: &str, location: &str, is_lost: bool, user_id: i64) -> Value {
    json!({
        "title": title,
        "description": description,
        "location": location,
        "is_lost": is_lost,
        "user_id": user_id,
    })
}

#[actix_web::test]
async fn welcome_banner_is_served_at_root() {
    let store = test_store();
    let app = init_app!(store);

    let request = actix_test::TestRequest::get().uri("/").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    assert_eq!(body, "Welcome to the Lost & Found Community Hub!".as_bytes());
}

#[actix_web::test]
async fn distinct_emails_register_duplicate_email_is_rejected() {
    let store = test_store();
    let app = init_app!(store);

    let (status, body) = post_json(&app, "/register", register_body("Ann", "ann@x.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = post_json(&app, "/register", register_body("Ben", "ben@x.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);

    let (status, body) =
        post_json(&app, "/register", register_body("Another Ann", "ann@x.com")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");

    // The failed registration must not have consumed an identifier slot
    // visible to clients: the next registration continues the sequence.
    let (status, body) = post_json(&app, "/register", register_body("Cal", "cal@x.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().expect("numeric id") > 2);
}

#[actix_web::test]
async fn orphan_item_is_rejected_and_not_stored() {
    let store = test_store();
    let app = init_app!(store);

    let (status, body) = post_json(
        &app,
        "/post_item",
        item_body("Black Wallet", "lost near park", "Central Park", true, 42),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "unknown_user");

    let (status, results) = get_json(&app, "/search_items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results, json!([]));
}

#[actix_web::test]
async fn lost_flag_filter_includes_and_omits() {
    let store = test_store();
    let app = init_app!(store);

    post_json(&app, "/register", register_body("Ann", "ann@x.com")).await;
    let (status, _) = post_json(
        &app,
        "/post_item",
        item_body("Black Wallet", "lost near park", "Central Park", true, 1),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, lost) = get_json(&app, "/search_items?is_lost=1").await;
    assert_eq!(lost.as_array().map(Vec::len), Some(1));

    let (_, found) = get_json(&app, "/search_items?is_lost=0").await;
    assert_eq!(found, json!([]));
}

#[actix_web::test]
async fn query_matches_substring_across_all_three_fields() {
    let store = test_store();
    let app = init_app!(store);

    post_json(&app, "/register", register_body("Ann", "ann@x.com")).await;
    post_json(
        &app,
        "/post_item",
        item_body("Black Wallet", "leather", "park bench", true, 1),
    )
    .await;
    post_json(
        &app,
        "/post_item",
        item_body("Keys", "found next to a wallet", "station", false, 1),
    )
    .await;
    post_json(
        &app,
        "/post_item",
        item_body("Umbrella", "plain", "Wallet Street", false, 1),
    )
    .await;
    post_json(
        &app,
        "/post_item",
        item_body("Phone", "black", "library", true, 1),
    )
    .await;

    let (status, results) = get_json(&app, "/search_items?query=WALLET").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = results
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Black Wallet", "Keys", "Umbrella"]);
}

#[actix_web::test]
async fn empty_search_returns_every_posted_item() {
    let store = test_store();
    let app = init_app!(store);

    post_json(&app, "/register", register_body("Ann", "ann@x.com")).await;
    post_json(
        &app,
        "/post_item",
        item_body("Black Wallet", "lost near park", "Central Park", true, 1),
    )
    .await;
    post_json(
        &app,
        "/post_item",
        item_body("Umbrella", "found at station", "Main Street", false, 1),
    )
    .await;

    let (status, results) = get_json(&app, "/search_items").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = results
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[actix_web::test]
async fn end_to_end_lost_wallet_scenario() {
    let store = test_store();
    let app = init_app!(store);

    let (status, body) = post_json(&app, "/register", register_body("Ann", "ann@x.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, _) = post_json(
        &app,
        "/post_item",
        item_body("Black Wallet", "lost near park", "Central Park", true, 1),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, results) = get_json(&app, "/search_items?query=wallet").await;
    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().expect("array body").clone();
    assert_eq!(results.len(), 1);
    let item = &results[0];
    assert_eq!(item["title"], "Black Wallet");
    assert_eq!(item["location"], "Central Park");
    assert_eq!(item["is_lost"], true);
    assert!(item["timestamp"].is_string());
    assert_eq!(item["user"], json!({ "name": "Ann", "email": "ann@x.com" }));

    let (status, results) = get_json(&app, "/search_items?query=wallet&is_lost=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results, json!([]));
}

#[actix_web::test]
async fn responses_carry_trace_id_header() {
    let store = test_store();
    let app = init_app!(store);

    let request = actix_test::TestRequest::get().uri("/search_items").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.headers().contains_key("trace-id"));
}
