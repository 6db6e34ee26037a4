//! # HTTP Lite
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: un request por
//! conexión, router con parámetros de path y compresión gzip opcional.
//!
//! ## Arquitectura
//!
//! ```text
//! Listener → Conexión → parse → Router → handler → gzip → serialize → write
//! ```
//!
//! - `http`: Modelo de mensajes (headers, request, response, status, gzip)
//! - `router`: Patrones de rutas y despacho por método
//! - `server`: Listener TCP y ciclo de una conexión
//! - `handlers`: Endpoints de la aplicación
//! - `config`: Argumentos CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_lite::http::{Response, StatusCode};
//! use http_lite::router::Router;
//! use http_lite::server::Server;
//!
//! let mut router = Router::new();
//! router
//!     .get("/", |_| Ok(Response::empty(StatusCode::Ok)))
//!     .expect("patrón válido");
//!
//! let server = Server::new("127.0.0.1:4221", router.freeze());
//! server.start_listening(
//!     |addr| println!("escuchando en {}", addr),
//!     |e| eprintln!("no se pudo hacer bind: {}", e),
//! );
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
