//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea (método, path) a handlers usando patrones con placeholders.
//!
//! ## Arquitectura
//!
//! ```text
//! Router (builder) ──freeze()──▶ RouteTable (inmutable, Arc)
//!
//! Request → RouteTable::dispatch → Handler → Response
//! ```
//!
//! El despacho es en dos fases: primero se buscan las rutas cuyo patrón
//! coincide con el path (ignorando el método) y luego, entre ésas y en orden
//! de registro, la primera con el método del request. Así un verbo
//! incorrecto sobre un path existente da 405 y no 404.

pub mod pattern;

pub use pattern::{PathPattern, PatternError};

use crate::http::{Method, Request, Response, StatusCode};
use std::collections::HashMap;

/// Parámetros extraídos del path (ej: {"name": "notes.txt"})
pub type PathParams = HashMap<String, String>;

/// Error devuelto por un handler; se convierte en un 500
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<Response, HandlerError>;

/// Tipo de función handler
///
/// Recibe el request parseado junto con sus parámetros de path.
pub type Handler = Box<dyn Fn(&RouteRequest<'_>) -> HandlerResult + Send + Sync>;

/// Lo que ve un handler: el request (sólo lectura) y los parámetros
#[derive(Debug)]
pub struct RouteRequest<'a> {
    request: &'a Request,
    params: PathParams,
}

impl<'a> RouteRequest<'a> {
    pub fn new(request: &'a Request, params: PathParams) -> Self {
        Self { request, params }
    }

    pub fn request(&self) -> &Request {
        self.request
    }

    /// Obtiene un parámetro de path específico
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    pub fn params(&self) -> &PathParams {
        &self.params
    }
}

struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.template())
            .finish_non_exhaustive()
    }
}

/// Builder de rutas. Se usa sólo durante el arranque.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::http::{Method, Response, StatusCode};
    /// use http_lite::router::Router;
    ///
    /// let mut router = Router::new();
    /// router
    ///     .route(Method::GET, "/echo/{text}", |req| {
    ///         let text = req.param("text").unwrap_or_default();
    ///         Ok(Response::plain_text(StatusCode::Ok, text))
    ///     })
    ///     .unwrap();
    ///
    /// let table = router.freeze();
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn route<F>(
        &mut self,
        method: Method,
        template: &str,
        handler: F,
    ) -> Result<&mut Self, PatternError>
    where
        F: Fn(&RouteRequest<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        let pattern = PathPattern::compile(template)?;
        self.routes.push(Route {
            method,
            pattern,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    pub fn get<F>(&mut self, template: &str, handler: F) -> Result<&mut Self, PatternError>
    where
        F: Fn(&RouteRequest<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(Method::GET, template, handler)
    }

    pub fn post<F>(&mut self, template: &str, handler: F) -> Result<&mut Self, PatternError>
    where
        F: Fn(&RouteRequest<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(Method::POST, template, handler)
    }

    /// Congela las rutas en una tabla de sólo lectura
    pub fn freeze(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }
}

/// Tabla inmutable compartida por todas las conexiones
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// - Ningún patrón coincide → 404 sin body
    /// - Coincide el path pero no el método → 405 sin body
    /// - El handler falla → 500 con el mensaje del error en texto plano
    pub fn dispatch(&self, request: &Request) -> Response {
        let path = request.path();

        let matched: Vec<&Route> = self
            .routes
            .iter()
            .filter(|route| route.pattern.is_match(path))
            .collect();

        if matched.is_empty() {
            return Response::empty(StatusCode::NotFound);
        }

        let route = match matched.into_iter().find(|route| route.method == request.method()) {
            Some(route) => route,
            None => return Response::empty(StatusCode::MethodNotAllowed),
        };

        let params = route.pattern.captures(path).unwrap_or_default();
        let route_request = RouteRequest::new(request, params);

        match (route.handler)(&route_request) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    method = %request.method(),
                    path = %path,
                    route = route.pattern.template(),
                    error = %e,
                    "el handler falló"
                );
                Response::plain_text(StatusCode::InternalServerError, &e.to_string())
            }
        }
    }

    /// Número de rutas registradas
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
