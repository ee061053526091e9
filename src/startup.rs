use crate::api::{ApiClients, HttpApiClient};
use crate::configuration::Settings;
use crate::error::BizErrorEnum;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        // Build the receipt api client once and share it between workers
        let api_client =
            HttpApiClient::new(&config.api_client.base_url, config.api_client.timeout())?;
        let api_clients = ApiClients::from_http_client(api_client);

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener: {}", address);
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::LocalAddrError)?
            .port();

        let server = run(listener, api_clients)?;
        tracing::info!("Serving the login shell on port {}", port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

fn run(listener: TcpListener, api_clients: ApiClients) -> Result<Server, BizErrorEnum> {
    let api_clients = web::Data::new(api_clients);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(api_clients.clone())
            .route("/", web::get().to(routes::login_form))
            .route("/login", web::post().to(routes::login))
            .route("/health_check", web::get().to(routes::health_check))
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    Ok(server)
}
