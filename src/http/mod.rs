//! # Módulo HTTP
//!
//! Modelo de mensajes HTTP/1.1 implementado desde cero. Incluye:
//!
//! - Tabla de headers con repeticiones y clave original
//! - Parsing de requests desde un stream con buffer
//! - Construcción y serialización de responses
//! - Códigos de estado y versiones
//! - Compresión gzip negociada por `Accept-Encoding`
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod compression; // gzip del body
pub mod error;       // Errores de parsing
pub mod headers;     // Multimapa de headers
pub mod request;     // Parsing de HTTP requests
pub mod response;    // Construcción de HTTP responses
pub mod status;      // Códigos de estado HTTP
pub mod version;     // Versiones HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use error::ParseError;
pub use headers::{HeaderEntry, HeaderMap};
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
pub use version::Version;
