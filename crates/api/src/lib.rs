mod error;
mod event;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use calendar_store_infra::CalendarContext;
use error::CalendarError;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    event::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// Malformed paths, query strings and bodies are reported as bad requests
/// in the same format as the errors coming from the use cases
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    let bad_client_data =
        |message: String| actix_web::Error::from(CalendarError::BadClientData(message));
    cfg.app_data(
        web::PathConfig::default().error_handler(move |e, _| bad_client_data(e.to_string())),
    )
    .app_data(
        web::QueryConfig::default().error_handler(move |e, _| bad_client_data(e.to_string())),
    )
    .app_data(
        web::JsonConfig::default().error_handler(move |e, _| bad_client_data(e.to_string())),
    );
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: CalendarContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: CalendarContext) -> Result<(Server, u16), std::io::Error> {
        let address = format!("0.0.0.0:{}", context.config.port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Listening on port: {}", port);

        let ctx = web::Data::new(context);
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(ctx.clone())
                .service(
                    web::scope("/api/v1")
                        .configure(configure_extractors)
                        .configure(configure_server_api),
                )
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
