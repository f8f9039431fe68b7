use std::{io::Error, net::TcpListener};

use actix_web::{
    dev::Server,
    web::{self, Data},
    HttpServer,
};
use pilotage_core::PilotageSource;
use sgtradex_rs::SgtradexClient;
use tracing_actix_web::TracingLogger;

use crate::{routes, settings::Settings};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub async fn build(settings: &Settings) -> Self {
        let listener = TcpListener::bind(settings.api.listener_address()).unwrap();
        let port = listener.local_addr().unwrap().port();

        let source = SgtradexClient::new(settings.sgtradex.url.clone());
        let server = create_server(source, listener).unwrap();

        App { server, port }
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

pub fn create_server<T>(source: T, listener: TcpListener) -> Result<Server, Error>
where
    T: PilotageSource + 'static,
{
    let source = Data::new(source);

    let server = HttpServer::new(move || {
        actix_web::App::new()
            .wrap(TracingLogger::default())
            .app_data(source.clone())
            .route(
                "/v1.0/pilotage/{imo}",
                web::get().to(routes::v1::pilotage::pilotage_status::<T>),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
