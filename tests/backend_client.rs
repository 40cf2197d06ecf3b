//! Backend HTTP client behavior against a local stub server.

mod support;

use support::{http_response, spawn_responder, test_zones, zone_id_of};
use uem_rust::provider::{BackendProvider, MetricProvider, ProviderError};

fn aqi_body(zone_id: &str) -> String {
    format!(
        r#"{{"zone_id":"{}","aqi":152,"pm25":88,"pm10":120,"dust":60,"o3":25,"tvoc":5.2,"noise":64,"lastUpdated":"10:15:00"}}"#,
        zone_id
    )
}

fn flood_body(zone_id: &str) -> String {
    format!(
        r#"{{"zone_id":"{}","floodRisk":42,"waterLevel":1.8,"rainfall":95,"lastUpdated":"10:15:00"}}"#,
        zone_id
    )
}

fn heatwave_body(zone_id: &str) -> String {
    format!(
        r#"{{"zone_id":"{}","heatIndex":38,"temperature":35,"humidity":55,"windSpeed":12,"uvIndex":7,"lastUpdated":"10:15:00"}}"#,
        zone_id
    )
}

#[tokio::test]
async fn fetches_each_kind_from_its_endpoint() {
    let addr = spawn_responder(|request| {
        let zone_id = zone_id_of(request).unwrap_or_default();
        if request.starts_with("POST /aqi ") {
            http_response(200, &aqi_body(&zone_id))
        } else if request.starts_with("POST /flood ") {
            http_response(200, &flood_body(&zone_id))
        } else if request.starts_with("POST /heatwave ") {
            http_response(200, &heatwave_body(&zone_id))
        } else {
            http_response(404, "{}")
        }
    })
    .await;

    let provider = BackendProvider::new(&format!("http://{}", addr), 5).unwrap();
    let zone = test_zones().remove(0);

    let aqi = provider.fetch_aqi(&zone).await.unwrap();
    assert_eq!(aqi.zone_id.as_str(), "zone-a");
    assert_eq!(aqi.aqi, 152.0);

    let flood = provider.fetch_flood(&zone).await.unwrap();
    assert_eq!(flood.flood_risk, 42.0);

    let heat = provider.fetch_heatwave(&zone).await.unwrap();
    assert_eq!(heat.heat_index, 38.0);
    assert_eq!(heat.uv_index, 7.0);
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let addr = spawn_responder(|_| http_response(500, r#"{"error":"boom"}"#)).await;

    let provider = BackendProvider::new(&format!("http://{}", addr), 5).unwrap();
    let zone = test_zones().remove(1);

    let err = provider.fetch_aqi(&zone).await.unwrap_err();
    match &err {
        ProviderError::Status { message, context } => {
            assert!(message.contains("500"), "message: {}", message);
            assert_eq!(context.zone.as_deref(), Some("Bravo"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let addr = spawn_responder(|_| http_response(200, "not json at all")).await;

    let provider = BackendProvider::new(&format!("http://{}", addr), 5).unwrap();
    let zone = test_zones().remove(0);

    let err = provider.fetch_flood(&zone).await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode { .. }), "{:?}", err);
}

#[tokio::test]
async fn body_missing_required_fields_is_a_decode_error() {
    // zone_id present but the flood fields are missing
    let addr =
        spawn_responder(|_| http_response(200, r#"{"zone_id":"zone-a","lastUpdated":"x"}"#)).await;

    let provider = BackendProvider::new(&format!("http://{}", addr), 5).unwrap();
    let zone = test_zones().remove(0);

    let err = provider.fetch_flood(&zone).await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode { .. }), "{:?}", err);
}

#[tokio::test]
async fn connection_refused_is_a_retryable_transport_error() {
    // Bind to get a free port, then drop the listener so nothing is there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = BackendProvider::new(&format!("http://{}", addr), 2).unwrap();
    let zone = test_zones().remove(2);

    let err = provider.fetch_heatwave(&zone).await.unwrap_err();
    assert!(err.is_retryable(), "{:?}", err);
    assert!(matches!(
        err,
        ProviderError::Http { .. } | ProviderError::Timeout { .. }
    ));
}
