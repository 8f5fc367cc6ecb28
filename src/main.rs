mod telemetry;

use adjutant_api::Application;
use adjutant_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("adjutant".into(), "info".into());
    init_subscriber(subscriber);

    let (context, job_rx) = setup_context();

    let app = Application::new(context, job_rx).await?;
    app.start().await
}
