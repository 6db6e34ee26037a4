//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y procesa cada una en su propio thread. El loop de
//! accept nunca espera al procesamiento: entrega el socket y vuelve a
//! aceptar. La tabla de rutas es de sólo lectura y se comparte con `Arc`.

use super::connection::handle_connection;
use crate::router::RouteTable;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.1 de un request por conexión
pub struct Server {
    address: String,
    routes: Arc<RouteTable>,
}

impl Server {
    /// `address` en formato `host:port`
    pub fn new(address: impl Into<String>, routes: RouteTable) -> Self {
        Self {
            address: address.into(),
            routes: Arc::new(routes),
        }
    }

    /// Hace bind y atiende conexiones indefinidamente
    ///
    /// `on_ready` recibe la dirección real (útil con puerto 0). Si el bind
    /// falla se llama a `on_bind_error` y la función retorna.
    pub fn start_listening<R, E>(&self, on_ready: R, on_bind_error: E)
    where
        R: FnOnce(SocketAddr),
        E: FnOnce(std::io::Error),
    {
        let bound = TcpListener::bind(&self.address)
            .and_then(|listener| listener.local_addr().map(|addr| (listener, addr)));

        let listener = match bound {
            Ok((listener, local_addr)) => {
                on_ready(local_addr);
                listener
            }
            Err(e) => {
                on_bind_error(e);
                return;
            }
        };

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => self.spawn_connection(stream),
                Err(e) => {
                    // Un accept fallido no detiene el listener
                    tracing::error!(error = %e, "error al aceptar conexión");
                }
            }
        }
    }

    fn spawn_connection(&self, mut stream: TcpStream) {
        let routes = Arc::clone(&self.routes);
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        thread::spawn(move || {
            let span = tracing::info_span!("connection", peer = %peer);
            let _guard = span.enter();
            tracing::debug!("conexión aceptada");

            if let Err(e) = handle_connection(&mut stream, &routes) {
                tracing::error!(error = %e, "no se pudo entregar la respuesta");
            }
            // `stream` se cierra al salir del thread
        });
    }
}
