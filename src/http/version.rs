//! # Versiones HTTP
//!
//! Conjunto cerrado de versiones aceptadas en la request line. El servidor
//! siempre responde con `HTTP/1.1`, sin importar la versión del cliente.

use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    Http10,

    #[default]
    Http11,

    Http20,
}

impl Version {
    /// Parsea el token literal de la versión
    ///
    /// # Errores
    ///
    /// `ParseError::UnknownVersion` si el token no está en el conjunto
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        match token {
            "HTTP/1.0" => Ok(Version::Http10),
            "HTTP/1.1" => Ok(Version::Http11),
            "HTTP/2.0" => Ok(Version::Http20),
            _ => Err(ParseError::UnknownVersion(token.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Http20 => "HTTP/2.0",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
