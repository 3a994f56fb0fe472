use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use feedback_form::config::Config;
use feedback_form::forward::sheets::SheetsForwarder;
use feedback_form::i18n::Language;
use feedback_form::state::SharedState;

/// A running form server forwarding to `endpoint_url`.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    #[allow(dead_code)]
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Open the form with no cookie and return the session cookie pair.
    pub async fn start_session(&self) -> String {
        let resp = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .expect("initial page request failed");
        assert_eq!(resp.status(), StatusCode::OK);

        resp.headers()
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .expect("no session cookie set")
            .to_string()
    }

    /// Render the page for a session.
    pub async fn page(&self, cookie: &str) -> String {
        let resp = self
            .client
            .get(self.url("/"))
            .header("cookie", cookie)
            .send()
            .await
            .expect("page request failed");
        assert_eq!(resp.status(), StatusCode::OK);
        resp.text().await.unwrap()
    }

    /// POST form-urlencoded data and return the status and `Location` header.
    pub async fn post_form(
        &self,
        path: &str,
        cookie: &str,
        data: &[(&str, &str)],
    ) -> (StatusCode, Option<String>) {
        let resp = self
            .client
            .post(self.url(path))
            .header("cookie", cookie)
            .form(data)
            .send()
            .await
            .expect("form post failed");
        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        (resp.status(), location)
    }

    pub async fn submit(&self, cookie: &str, name: &str, kind: &str, notes: &str) -> StatusCode {
        let (status, _) = self
            .post_form(
                "/submit",
                cookie,
                &[("customerName", name), ("complaintType", kind), ("notes", notes)],
            )
            .await;
        status
    }
}

pub fn test_config(endpoint_url: &str, default_language: Language) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        endpoint_url: endpoint_url.to_string(),
        forward_timeout: Duration::from_secs(5),
        default_language,
        session_ttl: Duration::from_secs(3600),
        secure_cookie: false,
        log_level: "warn".to_string(),
    }
}

/// Spawn the app forwarding to `endpoint_url`.
pub async fn spawn_app(endpoint_url: &str, default_language: Language) -> TestApp {
    let config = test_config(endpoint_url, default_language);
    let forwarder = SheetsForwarder::new(config.endpoint_url.clone(), config.forward_timeout)
        .expect("Failed to build forwarder");

    let (app, state) = feedback_form::build_app(config, Arc::new(forwarder));

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        state,
    }
}

/// A URL nothing is listening on.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/exec")
}
