//! End-to-end API tests against an in-memory SQLite database.
//!
//! Each test builds a full router with its own database; requests go
//! through the real middleware stack, including JWT auth.

use std::sync::OnceLock;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use carlog::infrastructure::crypto::jwt::JwtConfig;
use carlog::infrastructure::database::migrator::Migrator;
use carlog::interfaces::http::create_api_router;

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("prometheus recorder")
        })
        .clone()
}

async fn test_app() -> Router {
    // A single connection keeps every request on the same in-memory db.
    let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = sea_orm::Database::connect(opts).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrations");

    let jwt_config = JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
        issuer: "carlog".to_string(),
    };

    create_api_router(db, jwt_config, prometheus_handle())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

async fn register_and_login(app: &Router, username: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "correct-horse-battery",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": username, "password": "correct-horse-battery" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string()
}

async fn create_vehicle(app: &Router, token: &str, body: Value) -> String {
    let (status, body) = send(app, "POST", "/api/v1/vehicles", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_str().expect("vehicle id").to_string()
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_login_and_me_flow() {
    let app = test_app().await;
    let token = register_and_login(&app, "alice").await;

    let (status, body) = send(&app, "GET", "/api/v1/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["username"], json!("alice"));
    assert_eq!(body["data"]["email"], json!("alice@example.com"));
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/api/v1/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/v1/vehicles", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_accepts_email_and_rejects_bad_password() {
    let app = test_app().await;
    register_and_login(&app, "bob").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "bob@example.com", "password": "correct-horse-battery" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "bob", "password": "wrong-password-here" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_token_is_single_use() {
    let app = test_app().await;
    register_and_login(&app, "carol").await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": "carol", "password": "correct-horse-battery" })),
    )
    .await;
    let refresh_token = body["data"]["refresh_token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refresh_token": refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["access_token"].is_string());

    // The consumed token must be rejected on replay.
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refresh_token": refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ── Vehicles ────────────────────────────────────────────────────────

#[tokio::test]
async fn vehicle_crud_flow() {
    let app = test_app().await;
    let token = register_and_login(&app, "dave").await;

    let id = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Toyota", "model": "Corolla", "year": 2019, "engine_type": "fuel" }),
    )
    .await;

    // Defaults to everything a fuel engine accepts.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/vehicles/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], json!("Toyota"));
    let types = body["data"]["energy_types"].as_array().unwrap();
    assert_eq!(types.len(), 6);
    assert!(types.contains(&json!("gasoline")));

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/vehicles/{}", id),
        Some(&token),
        Some(json!({ "brand": "Toyota", "year": 2020 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["year"], json!(2020));

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/vehicles/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/v1/vehicles/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn incompatible_energy_types_are_rejected() {
    let app = test_app().await;
    let token = register_and_login(&app, "erin").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/vehicles",
        Some(&token),
        Some(json!({
            "brand": "Tesla",
            "model": "Model 3",
            "year": 2022,
            "engine_type": "electric",
            "energy_types": ["gasoline"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/vehicles",
        Some(&token),
        Some(json!({
            "brand": "Stanley",
            "model": "Steamer",
            "year": 1906,
            "engine_type": "steam",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vehicles_are_scoped_to_their_owner() {
    let app = test_app().await;
    let owner = register_and_login(&app, "frank").await;
    let other = register_and_login(&app, "grace").await;

    let id = create_vehicle(
        &app,
        &owner,
        json!({ "brand": "Honda", "model": "Civic", "year": 2018, "engine_type": "fuel" }),
    )
    .await;

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/v1/vehicles/{}", id),
        Some(&other),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/api/v1/vehicles", Some(&other), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(0));
}

#[tokio::test]
async fn vehicle_list_pagination_envelope() {
    let app = test_app().await;
    let token = register_and_login(&app, "heidi").await;

    for model in ["A", "B", "C"] {
        create_vehicle(
            &app,
            &token,
            json!({ "brand": "VW", "model": model, "year": 2021, "engine_type": "fuel" }),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        "GET",
        "/api/v1/vehicles?page=1&page_size=2",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], json!(3));
    assert_eq!(body["total_pages"], json!(2));
    assert_eq!(body["has_next_page"], json!(true));
    assert_eq!(body["has_previous_page"], json!(false));

    let (_, body) = send(
        &app,
        "GET",
        "/api/v1/vehicles?page=2&page_size=2",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["has_previous_page"], json!(true));
}

// ── Energy entries ──────────────────────────────────────────────────

async fn log_entry(
    app: &Router,
    token: &str,
    vehicle_id: &str,
    date: &str,
    mileage: i64,
    volume: f64,
    cost: Option<f64>,
    price: Option<f64>,
) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/v1/vehicles/{}/energy-entries", vehicle_id),
        Some(token),
        Some(json!({
            "entry_date": date,
            "mileage": mileage,
            "energy_type": "gasoline",
            "energy_unit": "liter",
            "volume": volume,
            "cost": cost,
            "price_per_unit": price,
        })),
    )
    .await
}

#[tokio::test]
async fn mileage_must_follow_the_entry_dates() {
    let app = test_app().await;
    let token = register_and_login(&app, "ivan").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Skoda", "model": "Octavia", "year": 2017, "engine_type": "fuel" }),
    )
    .await;

    let (status, _) = log_entry(
        &app,
        &token,
        &vehicle,
        "2024-05-10T12:00:00Z",
        1000,
        40.0,
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Later date with a lower odometer reading.
    let (status, body) = log_entry(
        &app,
        &token,
        &vehicle,
        "2024-05-11T12:00:00Z",
        900,
        35.0,
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));

    let (status, _) = log_entry(
        &app,
        &token,
        &vehicle,
        "2024-05-11T12:00:00Z",
        1450,
        38.0,
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn disallowed_energy_type_is_rejected_on_logging() {
    let app = test_app().await;
    let token = register_and_login(&app, "judy").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Nissan", "model": "Leaf", "year": 2023, "engine_type": "electric" }),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/energy-entries", vehicle),
        Some(&token),
        Some(json!({
            "entry_date": "2024-05-10T12:00:00Z",
            "mileage": 100,
            "energy_type": "gasoline",
            "energy_unit": "liter",
            "volume": 30.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn statistics_aggregate_per_unit() {
    let app = test_app().await;
    let token = register_and_login(&app, "mallory").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Ford", "model": "Focus", "year": 2016, "engine_type": "fuel" }),
    )
    .await;

    log_entry(
        &app,
        &token,
        &vehicle,
        "2024-05-01T12:00:00Z",
        1000,
        50.0,
        Some(90.0),
        Some(1.8),
    )
    .await;
    // 500 km on 60 l → 12 l/100km
    log_entry(
        &app,
        &token,
        &vehicle,
        "2024-05-15T12:00:00Z",
        1500,
        60.0,
        Some(108.0),
        Some(1.8),
    )
    .await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/vehicles/{}/energy-entries/stats", vehicle),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let stats = &body["data"];
    assert_eq!(stats["total_entries"], json!(2));
    assert_eq!(stats["total_cost"], json!(198.0));

    let units = stats["units"].as_array().unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0]["unit"], json!("liter"));
    assert_eq!(units[0]["average_consumption"], json!(12.0));
    assert_eq!(units[0]["total_volume"], json!(110.0));
    assert_eq!(units[0]["average_price_per_unit"], json!(1.8));
    assert_eq!(units[0]["energy_types"], json!(["gasoline"]));
}

#[tokio::test]
async fn removing_an_energy_type_with_entries_conflicts() {
    let app = test_app().await;
    let token = register_and_login(&app, "oscar").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({
            "brand": "Dacia",
            "model": "Duster",
            "year": 2020,
            "engine_type": "fuel",
            "energy_types": ["gasoline", "lpg"],
        }),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/energy-entries", vehicle),
        Some(&token),
        Some(json!({
            "entry_date": "2024-05-10T12:00:00Z",
            "mileage": 5000,
            "energy_type": "lpg",
            "energy_unit": "liter",
            "volume": 35.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // lpg has logged entries, dropping it must conflict
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/vehicles/{}", vehicle),
        Some(&token),
        Some(json!({ "energy_types": ["gasoline"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));

    // A mixed removal reports only the types that actually have entries:
    // gasoline has none, so the conflict must not name it.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/vehicles/{}", vehicle),
        Some(&token),
        Some(json!({ "energy_types": ["diesel"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("lpg"), "{}", error);
    assert!(!error.contains("gasoline"), "{}", error);
    assert!(error.contains('1'), "{}", error);

    // Adding a type on top of the current set is fine.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/vehicles/{}", vehicle),
        Some(&token),
        Some(json!({ "energy_types": ["gasoline", "lpg", "ethanol"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["energy_types"].as_array().unwrap().len(), 3);
}

// ── Service types and records ───────────────────────────────────────

async fn create_service_type(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/service-types",
        Some(token),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_str().expect("type id").to_string()
}

#[tokio::test]
async fn service_type_names_are_unique_per_user() {
    let app = test_app().await;
    let token = register_and_login(&app, "peggy").await;

    create_service_type(&app, &token, "Oil change").await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/service-types",
        Some(&token),
        Some(json!({ "name": "Oil change" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // A different user may reuse the name.
    let other = register_and_login(&app, "sybil").await;
    create_service_type(&app, &other, "Oil change").await;
}

#[tokio::test]
async fn line_items_win_over_the_manual_cost() {
    let app = test_app().await;
    let token = register_and_login(&app, "trent").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Mazda", "model": "3", "year": 2019, "engine_type": "fuel" }),
    )
    .await;
    let type_id = create_service_type(&app, &token, "Brakes").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Front brake pads",
            "mileage": 60000,
            "service_date": "2024-06-01T09:00:00Z",
            "manual_cost": 999.0,
            "items": [
                { "kind": "part", "name": "Pad set", "unit_price": 80.0, "quantity": 2.0 },
                { "kind": "labor", "name": "Fitting", "unit_price": 40.0, "quantity": 1.0 },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    // 80×2 + 40×1, the manual cost is ignored while items exist
    assert_eq!(body["data"]["total_cost"], json!(200.0));
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn records_sort_by_computed_total_cost() {
    let app = test_app().await;
    let token = register_and_login(&app, "victor").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Opel", "model": "Astra", "year": 2015, "engine_type": "fuel" }),
    )
    .await;
    let type_id = create_service_type(&app, &token, "General").await;

    // total 40 from items
    send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Wipers",
            "mileage": 50000,
            "service_date": "2024-01-10T09:00:00Z",
            "items": [{ "kind": "part", "name": "Blades", "unit_price": 20.0, "quantity": 2.0 }],
        })),
    )
    .await;
    // total 150 from manual cost, no items
    send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Alignment",
            "mileage": 51000,
            "service_date": "2024-02-10T09:00:00Z",
            "manual_cost": 150.0,
        })),
    )
    .await;
    // total 90 from items
    send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Battery",
            "mileage": 52000,
            "service_date": "2024-03-10T09:00:00Z",
            "items": [{ "kind": "part", "name": "Battery", "unit_price": 90.0, "quantity": 1.0 }],
        })),
    )
    .await;

    let (status, body) = send(
        &app,
        "GET",
        &format!(
            "/api/v1/vehicles/{}/service-records?sort_by=totalcost&sort_desc=true",
            vehicle
        ),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Alignment", "Battery", "Wipers"]);
}

#[tokio::test]
async fn search_matches_regardless_of_case() {
    let app = test_app().await;
    let token = register_and_login(&app, "ursula").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Skoda", "model": "Octavia", "year": 2019, "engine_type": "fuel" }),
    )
    .await;
    create_vehicle(
        &app,
        &token,
        json!({ "brand": "Ford", "model": "Focus", "year": 2018, "engine_type": "fuel" }),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/v1/vehicles?search=OCTA", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["items"][0]["model"], json!("Octavia"));

    let type_id = create_service_type(&app, &token, "General").await;
    send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Oil change",
            "mileage": 40000,
            "service_date": "2024-05-01T09:00:00Z",
            "manual_cost": 80.0,
        })),
    )
    .await;
    send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Brake pads",
            "notes": "Front axle only",
            "mileage": 41000,
            "service_date": "2024-06-01T09:00:00Z",
            "manual_cost": 120.0,
        })),
    )
    .await;

    // title match
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/vehicles/{}/service-records?search=OIL", vehicle),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["items"][0]["title"], json!("Oil change"));

    // notes match
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/vehicles/{}/service-records?search=axle", vehicle),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["items"][0]["title"], json!("Brake pads"));
}

#[tokio::test]
async fn referenced_service_type_cannot_be_deleted() {
    let app = test_app().await;
    let token = register_and_login(&app, "walter").await;
    let vehicle = create_vehicle(
        &app,
        &token,
        json!({ "brand": "Kia", "model": "Ceed", "year": 2021, "engine_type": "fuel" }),
    )
    .await;
    let type_id = create_service_type(&app, &token, "Inspection").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/vehicles/{}/service-records", vehicle),
        Some(&token),
        Some(json!({
            "service_type_id": type_id,
            "title": "Annual inspection",
            "mileage": 30000,
            "service_date": "2024-04-01T09:00:00Z",
            "manual_cost": 60.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let record_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/service-types/{}", type_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/vehicles/{}/service-records/{}", vehicle, record_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/service-types/{}", type_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

// ── Health ──────────────────────────────────────────────────────────

#[tokio::test]
async fn health_endpoint_reports_database_status() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"]["status"], json!("ok"));
}
