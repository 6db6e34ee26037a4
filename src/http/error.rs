//! # Errores de parsing
//!
//! Todos estos errores terminan en un `400 Bad Request` cuyo body es el
//! mensaje del error. Ninguno es fatal para el proceso.

use thiserror::Error;

/// Errores que pueden ocurrir al leer un request del stream
#[derive(Debug, Error)]
pub enum ParseError {
    /// El peer cerró la conexión sin enviar nada
    #[error("Empty request")]
    EmptyRequest,

    /// La request line no tiene exactamente 3 tokens
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Método fuera del conjunto soportado
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// Versión fuera del conjunto soportado
    #[error("Unknown HTTP version: {0}")]
    UnknownVersion(String),

    /// Línea de header sin ':'
    #[error("Malformed header line: {0:?}")]
    MalformedHeaderLine(String),

    /// El stream terminó antes de la línea vacía que cierra los headers
    #[error("Truncated headers: stream ended before the blank line")]
    TruncatedHeaders,

    /// Content-Length no es un entero no negativo
    #[error("Invalid Content-Length: {0:?}")]
    InvalidContentLength(String),

    /// El body llegó incompleto
    #[error("Truncated body: expected {expected} bytes, received {received}")]
    TruncatedBody { expected: usize, received: usize },

    /// Falla de lectura en el socket
    #[error("Error reading request: {0}")]
    Io(#[from] std::io::Error),
}
