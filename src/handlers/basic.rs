//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `GET /`: respuesta vacía
//! - `GET /echo/{text}`: devuelve el segmento como texto plano
//! - `GET /user-agent`: devuelve el header User-Agent

use crate::http::{Response, StatusCode};
use crate::router::{HandlerResult, RouteRequest};

/// Handler para `GET /`
pub fn root_handler(_req: &RouteRequest<'_>) -> HandlerResult {
    Ok(Response::empty(StatusCode::Ok))
}

/// Handler para `GET /echo/{text}`
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(req: &RouteRequest<'_>) -> HandlerResult {
    let text = req.param("text").unwrap_or_default();
    Ok(Response::plain_text(StatusCode::Ok, text))
}

/// Handler para `GET /user-agent`
///
/// Usa el primer valor si el header viene repetido.
pub fn user_agent_handler(req: &RouteRequest<'_>) -> HandlerResult {
    let response = match req.request().header("user-agent") {
        Some(agent) => Response::plain_text(StatusCode::Ok, agent),
        None => Response::plain_text(StatusCode::BadRequest, "User-Agent header not found"),
    };
    Ok(response)
}
