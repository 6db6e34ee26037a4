//! # HTTP Lite - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging, registra las rutas y
//! arranca el listener. El único error fatal es no poder hacer bind.

use clap::Parser;
use http_lite::config::Config;
use http_lite::handlers;
use http_lite::router::Router;
use http_lite::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        address = %config.address(),
        directory = ?config.directory,
        "configuración cargada"
    );

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "configuración inválida");
        std::process::exit(1);
    }

    // Las rutas se registran una sola vez y luego se congelan
    let mut router = Router::new();
    if let Err(e) = handlers::register(&mut router, config.directory.clone()) {
        tracing::error!(error = %e, "no se pudieron registrar las rutas");
        std::process::exit(1);
    }
    let routes = router.freeze();
    tracing::info!(routes = routes.len(), "rutas registradas");

    let server = Server::new(config.address(), routes);
    server.start_listening(
        |addr| tracing::info!(%addr, "servidor escuchando"),
        |e| {
            tracing::error!(port = config.port, error = %e, "no se pudo hacer bind del puerto");
            std::process::exit(1);
        },
    );
}
