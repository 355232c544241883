use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use endpoint_integration_tests::{portal_router, send_json};
use shared_config::AppConfig;
use shared_utils::test_utils::{JwtTestUtils, TestConfig, TestUser};

fn config_for(store: &MockServer) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        store_data_api_url: store.uri(),
        ..TestConfig::default().to_app_config()
    })
}

fn stored_booking() -> serde_json::Value {
    json!({
        "_id": {"$oid": "6476a1b2c3d4e5f601234567"},
        "treatment": "Teeth Cleaning",
        "date": "2024-01-01",
        "slot": "9AM",
        "patientName": "A",
        "patientEmail": "a@x.com",
        "paid": false
    })
}

#[tokio::test]
async fn booking_twice_reports_a_conflict_payload_the_second_time() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let router = portal_router(config);

    // First duplicate probe sees an empty collection...
    Mock::given(method("POST"))
        .and(path("/action/findOne"))
        .and(body_partial_json(json!({ "collection": "bookings" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "document": null })))
        .up_to_n_times(1)
        .mount(&store)
        .await;

    // ...then the record inserted by the first request
    Mock::given(method("POST"))
        .and(path("/action/findOne"))
        .and(body_partial_json(json!({ "collection": "bookings" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "document": stored_booking() })),
        )
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/action/insertOne"))
        .and(body_partial_json(json!({ "collection": "bookings" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "insertedId": "6476a1b2c3d4e5f601234567"
        })))
        .expect(1)
        .mount(&store)
        .await;

    let booking_request = json!({
        "treatment": "Teeth Cleaning",
        "date": "2024-01-01",
        "slot": "9AM",
        "patientName": "A",
        "patientEmail": "a@x.com"
    });

    let (status, body) = send_json(
        &router,
        "POST",
        "/booking",
        None,
        Some(booking_request.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["insertedId"].is_string());

    let (status, body) = send_json(&router, "POST", "/booking", None, Some(booking_request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["booking"]["patientName"], "A");
}

#[tokio::test]
async fn protected_routes_refuse_missing_and_bad_credentials() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let secret = config.access_token_secret.clone();
    let router = portal_router(config);

    // No credential at all
    let (status, body) = send_json(&router, "GET", "/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("authorization"));

    // Present but malformed
    let token = JwtTestUtils::create_malformed_token();
    let (status, _) = send_json(&router, "GET", "/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Present but expired
    let user = TestUser::new("a@x.com");
    let token = JwtTestUtils::create_expired_token(&user, &secret);
    let (status, _) = send_json(&router, "GET", "/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Signed with the wrong secret
    let token = JwtTestUtils::create_invalid_signature_token(&user);
    let (status, _) = send_json(&router, "GET", "/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let secret = config.access_token_secret.clone();
    let router = portal_router(config);

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_partial_json(json!({ "collection": "users" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{ "email": "a@x.com" }]
        })))
        .mount(&store)
        .await;

    let user = TestUser::new("a@x.com");
    let token = JwtTestUtils::create_test_token(&user, &secret, Some(24));

    let (status, body) = send_json(&router, "GET", "/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn admin_routes_refuse_non_admin_identities() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let secret = config.access_token_secret.clone();
    let router = portal_router(config);

    // The requester's user record has no role attribute
    Mock::given(method("POST"))
        .and(path("/action/findOne"))
        .and(body_partial_json(json!({
            "collection": "users",
            "filter": { "email": "a@x.com" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": { "email": "a@x.com" }
        })))
        .mount(&store)
        .await;

    let user = TestUser::new("a@x.com");
    let token = JwtTestUtils::create_test_token(&user, &secret, Some(24));

    let (status, body) = send_json(&router, "GET", "/doctor", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("Admin"));
}

#[tokio::test]
async fn admin_identity_passes_both_gates() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let secret = config.access_token_secret.clone();
    let router = portal_router(config);

    Mock::given(method("POST"))
        .and(path("/action/findOne"))
        .and(body_partial_json(json!({
            "collection": "users",
            "filter": { "email": "admin@x.com" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": { "email": "admin@x.com", "role": "admin" }
        })))
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_partial_json(json!({ "collection": "doctors" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [] })))
        .mount(&store)
        .await;

    let admin = TestUser::new("admin@x.com");
    let token = JwtTestUtils::create_test_token(&admin, &secret, Some(24));

    let (status, body) = send_json(&router, "GET", "/doctor", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn patients_cannot_read_someone_elses_bookings() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let secret = config.access_token_secret.clone();
    let router = portal_router(config);

    let user = TestUser::new("a@x.com");
    let token = JwtTestUtils::create_test_token(&user, &secret, Some(24));

    let (status, _) = send_json(
        &router,
        "GET",
        "/booking?patientEmail=b@x.com",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn upserted_user_can_use_the_issued_token_immediately() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let router = portal_router(config);

    Mock::given(method("POST"))
        .and(path("/action/updateOne"))
        .and(body_partial_json(json!({ "collection": "users", "upsert": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matchedCount": 0,
            "modifiedCount": 0,
            "upsertedId": "6476a1b2c3d4e5f601234567"
        })))
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_partial_json(json!({
            "collection": "bookings",
            "filter": { "patientEmail": "a@x.com" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [] })))
        .mount(&store)
        .await;

    let (status, body) = send_json(
        &router,
        "PUT",
        "/user/a@x.com",
        None,
        Some(json!({ "name": "A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &router,
        "GET",
        "/booking?patientEmail=a@x.com",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn available_endpoint_subtracts_booked_slots_end_to_end() {
    let store = MockServer::start().await;
    let config = config_for(&store);
    let router = portal_router(config);

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_partial_json(json!({ "collection": "services" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{
                "name": "Teeth Cleaning",
                "price": 80.0,
                "slots": ["8AM", "9AM", "10AM"]
            }]
        })))
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_partial_json(json!({
            "collection": "bookings",
            "filter": { "date": "2024-01-01" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [stored_booking()]
        })))
        .mount(&store)
        .await;

    let (status, body) = send_json(&router, "GET", "/available?date=2024-01-01", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["slots"], json!(["8AM", "10AM"]));
}

#[tokio::test]
async fn payment_intent_round_trips_through_the_gateway() {
    let store = MockServer::start().await;
    let gateway = MockServer::start().await;
    let config = Arc::new(AppConfig {
        store_data_api_url: store.uri(),
        stripe_secret_key: "sk_test_123".to_string(),
        stripe_api_url: gateway.uri(),
        ..TestConfig::default().to_app_config()
    });
    let secret = config.access_token_secret.clone();
    let router = portal_router(config);

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_12345",
            "amount": 8000,
            "client_secret": "pi_12345_secret_67890"
        })))
        .expect(1)
        .mount(&gateway)
        .await;

    let user = TestUser::new("a@x.com");
    let token = JwtTestUtils::create_test_token(&user, &secret, Some(24));

    let (status, body) = send_json(
        &router,
        "POST",
        "/create-payment-intent",
        Some(&token),
        Some(json!({ "price": 80.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "pi_12345_secret_67890");
}
