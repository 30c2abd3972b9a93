//! Shared helpers for blueprint-service integration tests.
#![allow(dead_code)]

use blueprint_service::config::{BlueprintConfig, GeminiSettings, TelemetrySettings};
use blueprint_service::startup::{Application, BLUEPRINT_ROUTE};
use reqwest::Client;
use secrecy::Secret;
use service_core::config::Config;
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    pub fn blueprint_url(&self) -> String {
        format!("{}{}", self.address, BLUEPRINT_ROUTE)
    }

    pub async fn post_answers(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.blueprint_url())
            .json(body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Gemini settings pointing at a wiremock server.
pub fn gemini_settings(mock_uri: &str, api_key: Option<&str>) -> GeminiSettings {
    GeminiSettings {
        api_key: api_key.map(|k| Secret::new(k.to_string())),
        api_base: format!("{}/v1beta", mock_uri),
        ..GeminiSettings::default()
    }
}

/// Spawn the application on a random port.
pub async fn spawn_app(gemini: GeminiSettings) -> TestApp {
    let config = BlueprintConfig {
        common: Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        gemini,
        telemetry: TelemetrySettings::default(),
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: Client::new(),
    }
}

pub fn sample_answers() -> serde_json::Value {
    serde_json::json!({
        "name": "Dana",
        "business": "Neighbourhood bakery",
        "goal": "Scale Revenue & Growth",
        "challenge": "Ads bring traffic but few orders",
        "current_marketing": "Instagram and flyers",
        "target_customer": "Local families",
        "budget": "$500"
    })
}

pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}
