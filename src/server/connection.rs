//! # Manejo de una conexión
//! src/server/connection.rs
//!
//! Un ciclo request/response por conexión:
//!
//! ```text
//! parse → route → handler → compress → serialize → write
//! ```
//!
//! Es genérico sobre cualquier stream `Read + Write`, así que los tests
//! pueden usar un stream en memoria en lugar de un socket.

use crate::http::compression;
use crate::http::{Request, Response, StatusCode};
use crate::router::RouteTable;
use std::io::{BufReader, Read, Write};
use std::time::Instant;
use thiserror::Error;

/// Fallo al entregar la respuesta. No se reintenta.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Error writing response: {0}")]
    Write(#[source] std::io::Error),
}

/// Procesa exactamente un request de `stream` y escribe su respuesta
///
/// Retorna el status enviado. Un peer que cierra sin mandar nada también
/// recibe un 400. Cerrar la conexión es responsabilidad de quien es dueño
/// del stream.
pub fn handle_connection<S: Read + Write>(
    stream: &mut S,
    routes: &RouteTable,
) -> Result<StatusCode, ConnectionError> {
    let start = Instant::now();

    let parsed = {
        let mut reader = BufReader::new(&mut *stream);
        Request::read_from(&mut reader)
    };

    let response = match &parsed {
        Ok(request) => {
            let response = routes.dispatch(request);
            compression::compress(response, request)
        }
        // Sin request válido no hay con qué negociar la compresión
        Err(e) => {
            tracing::warn!(error = %e, "request inválido");
            Response::plain_text(StatusCode::BadRequest, &e.to_string())
        }
    };

    stream
        .write_all(&response.to_bytes())
        .and_then(|_| stream.flush())
        .map_err(ConnectionError::Write)?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    match &parsed {
        Ok(request) => tracing::info!(
            method = %request.method(),
            path = request.path(),
            status = response.status().as_u16(),
            elapsed_ms,
            "request atendido"
        ),
        Err(_) => tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms,
            "request rechazado"
        ),
    }

    Ok(response.status())
}
