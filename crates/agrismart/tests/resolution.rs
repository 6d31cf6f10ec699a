mod common;

use axum::http::StatusCode;

use agrismart::config::GeocodingConfig;
use agrismart::location::{FixedGeolocator, NominatimClient, UnavailableGeolocator};
use agrismart::{picker, Coordinates, LocationContext, LocationStore, Resolver};

use common::{start_stub, LUDHIANA};

fn geocoder_for(url: &str) -> NominatimClient {
    NominatimClient::from_config(&GeocodingConfig {
        base_url: url.to_string(),
        ..GeocodingConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_resolve_updates_store_and_content() {
    let stub = start_stub("/reverse", StatusCode::OK, LUDHIANA).await;
    let geocoder = geocoder_for(stub.url());
    let store = LocationStore::default();
    let mut rx = store.subscribe();

    let context = store
        .resolve(
            &FixedGeolocator::new(Coordinates::new(30.901, 75.8573)),
            Some(&geocoder),
        )
        .await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), context);
    assert_eq!(context.city, "Ludhiana");
    assert_eq!(context.country_code, "IN");
    assert!(!context.loading);

    let resolver = Resolver::default();
    let facilities =
        resolver.resolve_cold_storage(&context.country_code, Some(context.state.as_str()));
    assert_eq!(facilities[0].region, "Punjab");

    stub.stop().await;
}

#[tokio::test]
async fn test_geocode_failure_keeps_names_and_coordinates() {
    let stub = start_stub("/reverse", StatusCode::SERVICE_UNAVAILABLE, "{}").await;
    let geocoder = geocoder_for(stub.url());
    let store = LocationStore::default();

    let context = store
        .resolve(
            &FixedGeolocator::new(Coordinates::new(30.901, 75.8573)),
            Some(&geocoder),
        )
        .await;

    let default = LocationContext::default();
    assert_eq!(context.city, default.city);
    assert_eq!(context.country, default.country);
    assert_eq!(context.country_code, "IN");
    assert!(!context.loading);
    assert_eq!(context.coordinates(), Coordinates::new(30.901, 75.8573));
    assert_eq!(store.snapshot().coordinates(), context.coordinates());
    assert_eq!(stub.requests().len(), 1);

    stub.stop().await;
}

#[tokio::test]
async fn test_no_coordinates_makes_no_request() {
    let stub = start_stub("/reverse", StatusCode::OK, LUDHIANA).await;
    let geocoder = geocoder_for(stub.url());
    let store = LocationStore::default();

    let context = store.resolve(&UnavailableGeolocator, Some(&geocoder)).await;

    assert_eq!(context.city, "Bhopal");
    assert!(!context.loading);
    assert!(stub.requests().is_empty());

    stub.stop().await;
}

#[tokio::test]
async fn test_resolve_runs_once() {
    let stub = start_stub("/reverse", StatusCode::OK, LUDHIANA).await;
    let geocoder = geocoder_for(stub.url());
    let store = LocationStore::default();
    let geolocator = FixedGeolocator::new(Coordinates::new(30.901, 75.8573));

    store.resolve(&geolocator, Some(&geocoder)).await;
    store.set(picker::select_region("US", "California"));
    let context = store.resolve(&geolocator, Some(&geocoder)).await;

    assert_eq!(context.city, "California");
    assert_eq!(stub.requests().len(), 1);

    stub.stop().await;
}
