// ABOUTME: Integration tests for the TripXplo upstream client against an in-process fake API
// ABOUTME: Verifies bearer auth, token reuse, data pass-through, and the absorb-to-empty policy
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use common::init_test_logging;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tripxplo_ai::config::UpstreamConfig;
use tripxplo_ai::errors::ErrorCode;
use tripxplo_ai::models::PricingQuery;
use tripxplo_ai::upstream::{TravelApi, TripXploClient};

/// Behavior switches and call recording for the fake upstream
#[derive(Default)]
struct FakeUpstream {
    reject_login: bool,
    fail_data: bool,
    logins: AtomicUsize,
    auth_headers: Mutex<Vec<String>>,
    package_searches: Mutex<Vec<Option<String>>>,
}

impl FakeUpstream {
    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        self.auth_headers.lock().unwrap().push(value);
    }
}

async fn login(State(state): State<Arc<FakeUpstream>>) -> impl IntoResponse {
    if state.reject_login {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "bad credentials"})));
    }
    let n = state.logins.fetch_add(1, Ordering::SeqCst) + 1;
    (StatusCode::OK, Json(json!({"accessToken": format!("tok-{n}")})))
}

async fn list_packages(
    State(state): State<Arc<FakeUpstream>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.record_auth(&headers);
    state
        .package_searches
        .lock()
        .unwrap()
        .push(params.get("search").cloned());

    if state.fail_data {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"})));
    }
    (
        StatusCode::OK,
        Json(json!({"result": {"docs": [
            {"packageName": "Goa Delight", "packageId": "P1"}
        ]}})),
    )
}

async fn package_details(
    State(state): State<Arc<FakeUpstream>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.fail_data {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"})));
    }
    (StatusCode::OK, Json(json!({"result": {"packageId": id}})))
}

async fn package_pricing(
    State(state): State<Arc<FakeUpstream>>,
    Path(_id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if state.fail_data {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"})));
    }
    (
        StatusCode::OK,
        Json(json!({"result": {"totalPrice": 42000, "echo": body}})),
    )
}

async fn available_hotels(Path(term): Path<String>) -> Json<Value> {
    Json(json!({"result": [
        {"hotelName": "Sea View", "hotelId": "H1", "searchedFor": term}
    ]}))
}

async fn available_vehicles(Path(_term): Path<String>) -> Json<Value> {
    Json(json!({"result": [{"vehicleName": "Innova", "vehicleId": "V7"}]}))
}

async fn available_activities(Path(_term): Path<String>) -> Json<Value> {
    Json(json!({"result": [{"activityName": "Scuba", "activityId": "A3"}]}))
}

async fn interests() -> Json<Value> {
    Json(json!({"result": [{"interestName": "Beaches"}]}))
}

async fn destinations(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let search = params.get("search").cloned().unwrap_or_default();
    Json(json!({"result": [{"destinationName": search}]}))
}

async fn spawn_upstream(fake: Arc<FakeUpstream>) -> String {
    let app = Router::new()
        .route("/admin/auth/login", put(login))
        .route("/admin/package", get(list_packages))
        .route("/admin/package/interest/get", get(interests))
        .route("/admin/package/destination/search", get(destinations))
        .route("/admin/package/:id", get(package_details))
        .route("/admin/package/:id/pricing", post(package_pricing))
        .route("/admin/package/:id/available/get", get(available_hotels))
        .route("/admin/package/:id/vehicle/get", get(available_vehicles))
        .route("/admin/package/:id/activity/get", get(available_activities))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> TripXploClient {
    TripXploClient::new(UpstreamConfig {
        base_url,
        email: "admin@example.com".to_owned(),
        password: "secret".to_owned(),
    })
}

fn pricing_params() -> PricingQuery {
    PricingQuery {
        start_date: "2025-12-01".to_owned(),
        no_adult: 2,
        no_child: 1,
        no_room_count: 1,
        no_extra_adult: 0,
    }
}

#[tokio::test]
async fn test_packages_passthrough_with_bearer_header() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream::default());
    let client = client_for(spawn_upstream(fake.clone()).await);

    let packages = client.packages(100, 0, None).await.unwrap();

    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["packageName"], "Goa Delight");

    let headers = fake.auth_headers.lock().unwrap();
    assert_eq!(headers.as_slice(), ["Bearer tok-1"]);
}

#[tokio::test]
async fn test_search_parameter_is_forwarded() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream::default());
    let client = client_for(spawn_upstream(fake.clone()).await);

    let _ = client.packages(100, 0, Some("goa")).await.unwrap();
    let _ = client.packages(100, 0, None).await.unwrap();

    let searches = fake.package_searches.lock().unwrap();
    assert_eq!(searches.as_slice(), [Some("goa".to_owned()), None]);
}

#[tokio::test]
async fn test_fetch_failures_absorb_to_empty_results() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream {
        fail_data: true,
        ..FakeUpstream::default()
    });
    let client = client_for(spawn_upstream(fake).await);

    // list endpoints degrade to an empty vec
    let packages = client.packages(100, 0, None).await.unwrap();
    assert!(packages.is_empty());

    // detail and pricing endpoints degrade to an empty map
    let details = client.package_details("P1").await.unwrap();
    assert_eq!(details, json!({}));

    let pricing = client.package_pricing("P1", &pricing_params()).await.unwrap();
    assert_eq!(pricing, json!({}));
}

#[tokio::test]
async fn test_rejected_login_propagates_as_auth_error() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream {
        reject_login: true,
        ..FakeUpstream::default()
    });
    let client = client_for(spawn_upstream(fake).await);

    let error = client.packages(100, 0, None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
}

#[tokio::test]
async fn test_token_is_reused_across_operations() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream::default());
    let client = client_for(spawn_upstream(fake.clone()).await);

    let _ = client.packages(100, 0, None).await.unwrap();
    let _ = client.available_hotels("goa").await.unwrap();
    let _ = client.interests().await.unwrap();

    assert_eq!(fake.logins.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_available_and_search_operations_unwrap_result() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream::default());
    let client = client_for(spawn_upstream(fake).await);

    let hotels = client.available_hotels("goa").await.unwrap();
    assert_eq!(hotels[0]["hotelName"], "Sea View");
    assert_eq!(hotels[0]["searchedFor"], "goa");

    let vehicles = client.available_vehicles("goa").await.unwrap();
    assert_eq!(vehicles[0]["vehicleId"], "V7");

    let activities = client.available_activities("goa").await.unwrap();
    assert_eq!(activities[0]["activityId"], "A3");

    let interests = client.interests().await.unwrap();
    assert_eq!(interests[0]["interestName"], "Beaches");

    let destinations = client.search_destinations("goa").await.unwrap();
    assert_eq!(destinations[0]["destinationName"], "goa");
}

#[tokio::test]
async fn test_pricing_body_reaches_the_upstream() {
    init_test_logging();
    let fake = Arc::new(FakeUpstream::default());
    let client = client_for(spawn_upstream(fake).await);

    let pricing = client.package_pricing("P1", &pricing_params()).await.unwrap();

    assert_eq!(pricing["totalPrice"], 42000);
    assert_eq!(pricing["echo"]["startDate"], "2025-12-01");
    assert_eq!(pricing["echo"]["noAdult"], 2);
    assert_eq!(pricing["echo"]["noExtraAdult"], 0);
}
