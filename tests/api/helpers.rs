use once_cell::sync::Lazy;
use pos_receipt_frontend::configuration;
use pos_receipt_frontend::startup::Application;
use pos_receipt_frontend::telemetry;
use serde::Serialize;
use std::time::Duration;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // `stdout` and `sink` are different types, hence the two branches
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    }
});

pub struct TestApp {
    pub address: String,
    /// Stands in for the receipt api.
    pub api_server: MockServer,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Launch the shell in the background on a random port,
    /// pointed at a fresh mock receipt api.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let api_server = MockServer::start().await;

        let config = {
            let mut c = configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            c.application.port = 0;
            c.api_client.base_url = api_server.uri();
            c.api_client.timeout_milliseconds = 2000;
            c
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application.");
        let port = application.port();
        let _ = tokio::spawn(application.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            api_server,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_login_page(&self) -> reqwest::Response {
        self.http_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(&format!("{}/login", &self.address))
            // This `reqwest` method makes sure that the body is URL-encoded
            // and the `Content-Type` header is set accordingly.
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Json bodies the mock api received, once at least `expected` arrived.
    ///
    /// Login calls are detached from the page response, so poll for them.
    pub async fn received_logins(&self, expected: usize) -> Vec<serde_json::Value> {
        for _ in 0..100 {
            let requests = self.api_server.received_requests().await.unwrap_or_default();
            if requests.len() >= expected {
                return requests
                    .iter()
                    .map(|r| serde_json::from_slice(&r.body).expect("Body is not json"))
                    .collect();
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("The receipt api never received {} login requests", expected);
    }
}
