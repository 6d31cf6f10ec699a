mod common;

use axum::http::StatusCode;

use agrismart::config::GeocodingConfig;
use agrismart::location::{NominatimClient, ReverseGeocoder};
use agrismart::{Coordinates, Error};

use common::{start_stub, LUDHIANA};

fn client_for(url: &str) -> NominatimClient {
    NominatimClient::from_config(&GeocodingConfig {
        base_url: format!("{url}/"),
        ..GeocodingConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_reverse_lookup() {
    let stub = start_stub("/reverse", StatusCode::OK, LUDHIANA).await;
    let client = client_for(stub.url());

    let place = client
        .reverse(Coordinates::new(30.901, 75.8573))
        .await
        .unwrap();
    assert_eq!(place.city, "Ludhiana");
    assert_eq!(place.state, "Punjab");
    assert_eq!(place.country, "India");
    assert_eq!(place.country_code, "IN");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let query = &requests[0].query;
    assert_eq!(query["format"], "json");
    assert_eq!(query["lat"], "30.901");
    assert_eq!(query["lon"], "75.8573");
    assert_eq!(query["zoom"], "10");
    assert!(requests[0]
        .user_agent
        .as_deref()
        .unwrap()
        .starts_with("agrismart/"));

    stub.stop().await;
}

#[tokio::test]
async fn test_server_error_status() {
    let stub = start_stub(
        "/reverse",
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"backend down"}"#,
    )
    .await;

    let err = client_for(stub.url())
        .reverse(Coordinates::new(1.0, 2.0))
        .await
        .unwrap_err();
    match err {
        Error::Status { service, status, body } => {
            assert_eq!(service, "nominatim");
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("backend down"));
        }
        other => panic!("expected status error, got {other:?}"),
    }

    stub.stop().await;
}

#[tokio::test]
async fn test_malformed_body() {
    let stub = start_stub("/reverse", StatusCode::OK, "<html>not json</html>").await;

    let err = client_for(stub.url())
        .reverse(Coordinates::new(1.0, 2.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));

    stub.stop().await;
}

#[tokio::test]
async fn test_nominatim_error_field() {
    let stub = start_stub("/reverse", StatusCode::OK, r#"{"error":"Unable to geocode"}"#).await;

    let err = client_for(stub.url())
        .reverse(Coordinates::new(0.0, -160.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));

    stub.stop().await;
}
