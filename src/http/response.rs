//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas y convertirlas a bytes para enviar al
//! cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! Los constructores calculan `Content-Length` sólo cuando el body no es
//! vacío; una respuesta sin body nunca lleva ese header.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_lite::http::{Response, StatusCode};
//!
//! let response = Response::plain_text(StatusCode::Ok, "abc");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\nabc"));
//! ```

use super::headers::HeaderMap;
use super::version::Version;
use super::StatusCode;

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Siempre HTTP/1.1
    version: Version,

    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers con posibles repeticiones
    headers: HeaderMap,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta con el status y body indicados
    ///
    /// Si el body no es vacío agrega `Content-Length`.
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::http::{Response, StatusCode};
    ///
    /// let empty = Response::new(StatusCode::NoContent, Vec::new());
    /// assert!(empty.headers().is_empty());
    ///
    /// let full = Response::new(StatusCode::Ok, b"hola".to_vec());
    /// assert_eq!(full.headers().get("content-length"), Some("4"));
    /// ```
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        let mut response = Self {
            version: Version::Http11,
            status,
            headers: HeaderMap::new(),
            body,
        };

        if !response.body.is_empty() {
            let length = response.body.len().to_string();
            response.add_header("Content-Length", &length);
        }

        response
    }

    /// Respuesta sin body
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, Vec::new())
    }

    /// Respuesta de texto plano (`Content-Type: text/plain`)
    pub fn plain_text(status: StatusCode, body: &str) -> Self {
        Self::new(status, body.as_bytes().to_vec()).with_header("Content-Type", "text/plain")
    }

    /// Respuesta 200 con el contenido de un archivo
    /// (`Content-Type: application/octet-stream`)
    pub fn file(contents: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok, contents).with_header("Content-Type", "application/octet-stream")
    }

    /// Versión encadenable de [`Response::add_header`]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header, aunque ya exista uno con el mismo nombre
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.add(name, value);
    }

    /// Reemplaza el primer valor del header, o lo agrega si no existe
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.set(name, value);
    }

    /// Sustituye el body sin tocar los headers
    ///
    /// Quien lo llame es responsable de actualizar `Content-Length`.
    pub(crate) fn replace_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Clave-Original: Valor\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        let status_line = format!("{} {}\r\n", self.version, self.status);
        result.extend_from_slice(status_line.as_bytes());

        for entry in self.headers.iter() {
            let header_line = format!("{}: {}\r\n", entry.original_key, entry.value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
