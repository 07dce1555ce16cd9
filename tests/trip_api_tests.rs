use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use trip_planner::clients::{RawRoute, RoutingProvider};
use trip_planner::config::environment::{EnvironmentConfig, DEFAULT_OSRM_BASE_URL};
use trip_planner::models::trip::RoutePoint;
use trip_planner::routes::create_app_router;
use trip_planner::state::AppState;
use trip_planner::utils::errors::RoutingError;

/// Proveedor de rutas falso que cuenta las llamadas
struct StubProvider {
    calls: AtomicUsize,
    route: Option<RawRoute>,
}

#[async_trait]
impl RoutingProvider for StubProvider {
    async fn fetch_route(&self, points: &[RoutePoint]) -> Result<RawRoute, RoutingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(points.len(), 3);
        self.route
            .ok_or_else(|| RoutingError::Failure("Routing provider returned 500".to_string()))
    }
}

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_origins: vec![],
        osrm_base_url: DEFAULT_OSRM_BASE_URL.to_string(),
        routing_timeout_secs: 5,
    }
}

fn create_test_app(route: Option<RawRoute>) -> (axum::Router, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider {
        calls: AtomicUsize::new(0),
        route,
    });
    let state = AppState::new(test_config(), provider.clone());
    (create_app_router(state), provider)
}

/// ~1199.87 millas en 24 horas
fn long_route() -> RawRoute {
    RawRoute {
        distance_meters: 1_931_000.0,
        duration_seconds: 86_400.0,
    }
}

fn location(name: &str, lon: f64, lat: f64) -> Value {
    json!({
        "type": "Feature",
        "properties": { "name": name },
        "geometry": { "type": "Point", "coordinates": [lon, lat] }
    })
}

fn trip_body() -> Value {
    json!({
        "currentLocation": location("Chicago, IL", -87.6298, 41.8781),
        "pickupLocation": location("Indianapolis, IN", -86.1581, 39.7684),
        "dropoffLocation": location("Atlanta, GA", -84.388, 33.749),
        "currentCycleUsed": 10
    })
}

async fn post_json(app: axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app(Some(long_route()));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_plan_route_full_response() {
    let (app, provider) = create_test_app(Some(long_route()));
    let (status, body) = post_json(app, "/api/trip/route", trip_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

    let route = &body["route"];
    assert_eq!(route["distance"], 1200);
    assert_eq!(route["duration"], 24.0);
    assert_eq!(route["fuelStops"].as_array().unwrap().len(), 1);
    assert_eq!(route["fuelStops"][0]["name"], "Fuel Stop 1");
    assert_eq!(route["fuelStops"][0]["distanceFromStart"], 1000);
    assert_eq!(route["restStops"][0]["type"], "break");
    assert_eq!(route["restStops"][0]["distanceFromStart"], 250);
    assert_eq!(route["restStops"][1]["type"], "rest");
    assert_eq!(route["restStops"][1]["duration"], 10.0);

    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 3);

    let driving: Vec<f64> = logs
        .iter()
        .map(|l| l["totalDriving"].as_f64().unwrap())
        .collect();
    assert_eq!(driving, vec![9.0, 9.0, 6.0]);
    assert_eq!(logs[0]["totalOnDuty"], 10.5);

    for log in logs {
        let statuses: Vec<&str> = log["logs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["status"].as_str().unwrap())
            .collect();
        assert_eq!(
            statuses,
            vec!["on-duty", "driving", "off-duty", "driving", "on-duty", "sleeper"]
        );
        assert_eq!(log["driverName"], "John Doe");
        assert_eq!(log["truckNumber"], "TRK001");
        assert_eq!(log["graph"].as_array().unwrap().len(), 24);
    }

    assert_eq!(logs[0]["logs"][0]["time"], "06:00");
    assert_eq!(logs[0]["logs"][0]["location"], "Chicago, IL");
    assert_eq!(logs[0]["logs"][0]["odometer"], 123456);
    assert_eq!(logs[2]["logs"][5]["location"], "Atlanta, GA");
    assert_eq!(logs[2]["logs"][5]["odometer"], 123456 + 1200);

    let first = NaiveDate::parse_from_str(logs[0]["date"].as_str().unwrap(), "%Y-%m-%d").unwrap();
    let second = NaiveDate::parse_from_str(logs[1]["date"].as_str().unwrap(), "%Y-%m-%d").unwrap();
    assert_eq!(second - first, chrono::Duration::days(1));
}

#[tokio::test]
async fn test_trailing_slash_route() {
    let (app, _) = create_test_app(Some(long_route()));
    let (status, _) = post_json(app, "/api/trip/route/", trip_body().to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_location_skips_routing() {
    let (app, provider) = create_test_app(Some(long_route()));
    let mut body = trip_body();
    body.as_object_mut().unwrap().remove("pickupLocation");

    let (status, response) = post_json(app, "/api/trip/route", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing coordinates");
    assert_eq!(response["code"], "MISSING_INPUT");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_coordinates_rejected() {
    let (app, provider) = create_test_app(Some(long_route()));
    let mut body = trip_body();
    body["dropoffLocation"]["geometry"]["coordinates"] = json!([-84.388]);

    let (status, response) = post_json(app, "/api/trip/route", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_negative_cycle_rejected() {
    let (app, provider) = create_test_app(Some(long_route()));
    let mut body = trip_body();
    body["currentCycleUsed"] = json!(-4);

    let (status, response) = post_json(app, "/api/trip/route", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, provider) = create_test_app(Some(long_route()));
    let (status, response) = post_json(app, "/api/trip/route", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "BAD_REQUEST");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_routing_failure_is_server_error() {
    let (app, provider) = create_test_app(None);
    let (status, response) = post_json(app, "/api/trip/route", trip_body().to_string()).await;

    assert!(status.is_server_error());
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(response["error"], "Routing failed");
    assert_eq!(response["code"], "ROUTING_FAILED");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_default_location_names() {
    let (app, _) = create_test_app(Some(RawRoute {
        distance_meters: 160_934.0,
        duration_seconds: 7_200.0,
    }));
    let body = json!({
        "currentLocation": { "type": "Feature", "properties": {}, "geometry": { "type": "Point", "coordinates": [-87.6, 41.8] } },
        "pickupLocation": { "type": "Feature", "properties": {}, "geometry": { "type": "Point", "coordinates": [-87.0, 41.5] } },
        "dropoffLocation": { "type": "Feature", "properties": {}, "geometry": { "type": "Point", "coordinates": [-86.1, 39.7] } },
        "currentCycleUsed": 0
    });

    let (status, response) = post_json(app, "/api/trip/route", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let events = response["logs"][0]["logs"].as_array().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["location"], "Current Location");
    assert_eq!(events[2]["location"], "Dropoff Location");
    assert!(response["route"]["restStops"].as_array().unwrap().is_empty());
}
