//! # Compresión del body
//!
//! Negociación mínima: si alguno de los headers `Accept-Encoding` del
//! request contiene el token `gzip` (comparación exacta, sin q-values ni
//! comodines) el body se comprime con gzip.
//!
//! Un fallo del codec nunca aborta el request: se registra y la respuesta
//! sale sin comprimir.

use super::{Request, Response};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::io::Write;

/// Token que activa la compresión
const GZIP: &str = "gzip";

/// Comprime el body de `response` si `request` acepta gzip
///
/// No hace nada si el body es vacío o si no hay `Accept-Encoding`.
pub fn compress(mut response: Response, request: &Request) -> Response {
    if response.body().is_empty() || !accepts_gzip(request) {
        return response;
    }

    match gzip(response.body()) {
        Ok(compressed) => {
            let length = compressed.len().to_string();
            response.replace_body(compressed);
            response.set_header("Content-Length", &length);
            response.add_header("Content-Encoding", GZIP);
        }
        Err(e) => {
            tracing::warn!(error = %e, "no se pudo comprimir el body, se envía sin comprimir");
        }
    }

    response
}

/// Unión de los tokens de todos los `Accept-Encoding` del request
fn accepted_encodings(request: &Request) -> HashSet<&str> {
    request
        .headers()
        .get_all("accept-encoding")
        .iter()
        .flat_map(|entry| entry.value.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn accepts_gzip(request: &Request) -> bool {
    accepted_encodings(request).contains(GZIP)
}

/// Comprime `data` en un contenedor gzip
pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
