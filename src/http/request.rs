//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser de una sola pasada sobre un stream con buffer. No hace
//! look-ahead: lee la request line, luego los headers línea por línea hasta
//! la línea vacía, y por último exactamente `Content-Length` bytes de body.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/notes.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! Sin `Content-Length` el body es vacío: no hay chunked encoding ni
//! detección del body por otros medios.

use super::error::ParseError;
use super::headers::HeaderMap;
use super::version::Version;
use std::io::{BufRead, Read};

/// Métodos HTTP soportados (conjunto cerrado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    HEAD,
}

impl Method {
    /// Parsea un método HTTP desde su token
    ///
    /// # Errores
    ///
    /// `ParseError::UnknownMethod` con el token crudo si no es soportado
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "PATCH" => Ok(Method::PATCH),
            "OPTIONS" => Ok(Method::OPTIONS),
            "HEAD" => Ok(Method::HEAD),
            _ => Err(ParseError::UnknownMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::OPTIONS => "OPTIONS",
            Method::HEAD => "HEAD",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representa un request HTTP parseado. Inmutable una vez construido.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Path tal cual llegó en la request line (ej: "/echo/abc")
    path: String,

    /// Versión declarada por el cliente
    version: Version,

    /// Headers con búsqueda insensible a mayúsculas
    headers: HeaderMap,

    /// Exactamente `Content-Length` bytes, o vacío
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request desde un buffer en memoria
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_lite::http::{Method, Request};
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nHost: x\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), Method::GET);
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("host"), Some("x"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let mut reader = buffer;
        Self::read_from(&mut reader)
    }

    /// Lee un request completo desde un stream con buffer
    ///
    /// Consume sólo los bytes que pertenecen al request.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        // 1. Request line
        let line = read_line(reader)?.ok_or(ParseError::EmptyRequest)?;
        let (method, path, version) = Self::parse_request_line(strip_line_ending(&line))?;

        // 2. Headers hasta la línea vacía
        let headers = Self::read_headers(reader)?;

        // 3. Body según Content-Length
        let body = Self::read_body(reader, &headers)?;

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Formato: `METHOD SP PATH SP VERSION`, exactamente tres tokens
    fn parse_request_line(line: &[u8]) -> Result<(Method, String, Version), ParseError> {
        let text = std::str::from_utf8(line).map_err(|_| {
            ParseError::MalformedRequestLine(String::from_utf8_lossy(line).into_owned())
        })?;

        let parts: Vec<&str> = text.split(' ').collect();
        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(ParseError::MalformedRequestLine(text.to_string()));
        }

        let method = Method::parse(parts[0])?;
        let version = Version::parse(parts[2])?;

        Ok((method, parts[1].to_string(), version))
    }

    /// Cada línea se separa en el primer ':'; clave y valor se recortan
    fn read_headers<R: BufRead>(reader: &mut R) -> Result<HeaderMap, ParseError> {
        let mut headers = HeaderMap::new();

        loop {
            let raw = read_line(reader)?.ok_or(ParseError::TruncatedHeaders)?;

            // El stream terminó a mitad de línea
            if !raw.ends_with(b"\n") {
                return Err(ParseError::TruncatedHeaders);
            }

            let line = strip_line_ending(&raw);
            if line.is_empty() {
                break;
            }

            // Se separa a nivel de bytes: un valor que no es UTF-8 sigue siendo válido
            let colon = line.iter().position(|&b| b == b':');
            let (key, value) = match colon {
                Some(pos) => (
                    String::from_utf8_lossy(&line[..pos]),
                    String::from_utf8_lossy(&line[pos + 1..]),
                ),
                None => {
                    let text = String::from_utf8_lossy(line).into_owned();
                    return Err(ParseError::MalformedHeaderLine(text));
                }
            };

            if key.trim().is_empty() {
                let text = String::from_utf8_lossy(line).into_owned();
                return Err(ParseError::MalformedHeaderLine(text));
            }
            headers.add(key.trim(), value.trim());
        }

        Ok(headers)
    }

    /// Lee exactamente `Content-Length` bytes, reintentando lecturas cortas
    fn read_body<R: BufRead>(reader: &mut R, headers: &HeaderMap) -> Result<Vec<u8>, ParseError> {
        let expected = match headers.get("content-length") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength(value.to_string()))?,
            None => return Ok(Vec::new()),
        };

        let mut body = Vec::new();
        Read::take(&mut *reader, expected as u64).read_to_end(&mut body)?;

        if body.len() < expected {
            return Err(ParseError::TruncatedBody {
                expected,
                received: body.len(),
            });
        }

        Ok(body)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> Version {
        self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Primer valor de un header (búsqueda insensible a mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Lee hasta `\n` inclusive. `None` si el stream ya estaba en EOF.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<Vec<u8>>, ParseError> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
