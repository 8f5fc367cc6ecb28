pub mod agenda;
pub mod error;
pub mod job_dispatch;
pub mod reminder;
pub mod shared;
mod status;
pub mod todo;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use adjutant_infra::{Context, JobReceiver, NagRegistry};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    agenda::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
    todo::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    nags: Arc<NagRegistry>,
}

impl Application {
    pub async fn new(context: Context, job_rx: JobReceiver) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        let nags = context.nags.clone();
        Application::start_background_tasks(context, job_rx);

        Ok(Self { server, port, nags })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_background_tasks(context: Context, job_rx: JobReceiver) {
        job_dispatch::start_job_dispatcher(context.clone(), job_rx);
        job_dispatch::start_reminder_rehydration(context);
    }

    async fn configure_server(context: Context) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        let res = self.server.await;
        // No loop should outlive the server
        self.nags.cancel_all();
        res
    }
}
