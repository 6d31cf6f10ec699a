//! In-process HTTP stub for the remote services.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One request the stub received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
}

#[derive(Debug)]
pub struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

/// Serve `body` with `status` as JSON on `GET path`, recording every request.
pub async fn start_stub(path: &'static str, status: StatusCode, body: &'static str) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorder = requests.clone();

    let app = Router::new().route(
        path,
        get(
            move |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().unwrap().push(Recorded {
                        query,
                        user_agent: headers
                            .get(header::USER_AGENT)
                            .and_then(|value| value.to_str().ok())
                            .map(str::to_string),
                    });
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let handle = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(err) = server.await {
            eprintln!("stub server error: {err}");
        }
    });

    StubServer {
        url,
        requests,
        shutdown: Some(shutdown_tx),
        handle,
    }
}

pub const LUDHIANA: &str = r#"{
    "place_id": 123456,
    "lat": "30.9010",
    "lon": "75.8573",
    "display_name": "Ludhiana, Punjab, India",
    "address": {
        "town": "Ludhiana",
        "state_district": "Ludhiana",
        "state": "Punjab",
        "postcode": "141001",
        "country": "India",
        "country_code": "in"
    }
}"#;

pub const CURRENT_WEATHER: &str = r#"{
    "coord": {"lon": 75.8573, "lat": 30.901},
    "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
    "main": {"temp": 24.4, "feels_like": 24.6, "temp_min": 24.4, "temp_max": 24.4, "pressure": 1012, "humidity": 82},
    "wind": {"speed": 2.5, "deg": 300},
    "rain": {"1h": 14.0},
    "dt": 1760784000,
    "sys": {"country": "IN"},
    "name": "Ludhiana"
}"#;
