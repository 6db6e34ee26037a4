//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! Sólo se registran si el servidor arrancó con `--directory`:
//! - `GET /files/{name}`: lee el archivo como `application/octet-stream`
//! - `POST /files/{name}`: escribe el body del request en el archivo
//!
//! Los errores de I/O se propagan con `?` y el router los convierte en 500.

use crate::http::{Response, StatusCode};
use crate::router::{HandlerResult, RouteRequest};
use std::fs;
use std::path::Path;

/// Handler para `GET /files/{name}`
///
/// 404 sin body si el archivo no existe o es un directorio.
pub fn read_file_handler(dir: &Path, req: &RouteRequest<'_>) -> HandlerResult {
    let name = match file_name(req) {
        Some(name) => name,
        None => return Ok(invalid_filename()),
    };

    let path = dir.join(name);
    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Ok(Response::empty(StatusCode::NotFound)),
    }

    let contents = fs::read(&path)?;
    tracing::debug!(file = %path.display(), bytes = contents.len(), "archivo leído");

    Ok(Response::file(contents))
}

/// Handler para `POST /files/{name}`
///
/// Crea o sobrescribe el archivo y responde 201 sin body.
pub fn write_file_handler(dir: &Path, req: &RouteRequest<'_>) -> HandlerResult {
    let name = match file_name(req) {
        Some(name) => name,
        None => return Ok(invalid_filename()),
    };

    let path = dir.join(name);
    let body = req.request().body();
    fs::write(&path, body)?;
    tracing::debug!(file = %path.display(), bytes = body.len(), "archivo escrito");

    Ok(Response::empty(StatusCode::Created))
}

/// El parámetro `name`, si es un nombre de archivo seguro
fn file_name<'r>(req: &'r RouteRequest<'_>) -> Option<&'r str> {
    let name = req.param("name")?;

    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return None;
    }

    Some(name)
}

fn invalid_filename() -> Response {
    Response::plain_text(StatusCode::BadRequest, "Invalid filename")
}
