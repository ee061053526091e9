use pos_receipt_frontend::configuration;
use pos_receipt_frontend::startup::Application;
use pos_receipt_frontend::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber(
        "pos-receipt-frontend".into(),
        "info".into(),
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
