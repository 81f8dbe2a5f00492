//! Integration tests for the e-hailing estimator client (wiremock-based)

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ridewise_server::domain::TripQuery;
use ridewise_server::ehailing::{EHailingClient, EHailingConfig, EstimateError, EstimateSource};

fn client_for(base_url: &str) -> EHailingClient {
    EHailingClient::new(EHailingConfig::new().with_base_url(base_url).with_timeout(5)).unwrap()
}

fn query() -> TripQuery {
    TripQuery::new(" Civic Centre ", "Sea Point").unwrap()
}

fn sample_estimate_json() -> Value {
    json!({
        "pickup": "Civic Centre",
        "dropoff": "Sea Point",
        "distance_km": 4.87,
        "rides": [
            { "ride_type": "UberX", "price": 40.35, "wait_time": "3 min", "travel_time": "12 mins" },
            { "ride_type": "UberXL", "price": 55.09, "wait_time": "5 min", "travel_time": "12 mins" },
            { "ride_type": "UberVan", "price": 74.7, "wait_time": "9 min", "travel_time": "12 mins" }
        ]
    })
}

#[tokio::test]
async fn test_estimate_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/estimate"))
        .and(body_json(json!({
            "pickup_address": "Civic Centre",
            "drop_address": "Sea Point"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_estimate_json()))
        .expect(1)
        .mount(&server)
        .await;

    let estimate = client_for(&server.uri()).estimate(&query()).await.unwrap();

    assert_eq!(estimate.distance_km, 4.87);
    assert_eq!(estimate.rides.len(), 3);
    let cheapest = estimate.cheapest().unwrap();
    assert_eq!(cheapest.ride_type, "UberX");
    assert_eq!(cheapest.travel_time, "12 mins");
}

#[tokio::test]
async fn test_server_error_uses_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "Error getting travel data: list index out of range"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .estimate(&query())
        .await
        .unwrap_err();

    match err {
        EstimateError::Upstream {
            status,
            message,
            url,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error getting travel data: list index out of range");
            assert_eq!(url, format!("{}/estimate", server.uri()));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = client_for(&format!("http://127.0.0.1:{port}"))
        .estimate(&query())
        .await
        .unwrap_err();

    assert!(matches!(err, EstimateError::NetworkUnavailable { .. }));
}

#[tokio::test]
async fn test_slow_estimator_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_estimate_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client =
        EHailingClient::new(EHailingConfig::new().with_base_url(server.uri()).with_timeout(1))
            .unwrap();
    let err = client.estimate(&query()).await.unwrap_err();

    assert!(matches!(err, EstimateError::Timeout { timeout_secs: 1, .. }));
}

#[tokio::test]
async fn test_missing_rides_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "distance_km": 4.87 })))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .estimate(&query())
        .await
        .unwrap_err();

    assert!(matches!(err, EstimateError::MalformedResponse(_)));
}
