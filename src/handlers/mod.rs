//! # Handlers de la Aplicación
//!
//! Endpoints que el binario registra al arrancar.
//!
//! ## Categorías
//!
//! - **basic**: `/`, `/echo/{text}`, `/user-agent`
//! - **files**: `/files/{name}` (GET y POST), sólo con `--directory`
//!
//! Cada handler recibe un [`RouteRequest`](crate::router::RouteRequest) y
//! retorna un `HandlerResult`.

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;

use crate::router::{PatternError, Router};
use std::path::PathBuf;
use std::sync::Arc;

/// Registra todas las rutas de la aplicación en `router`
pub fn register(router: &mut Router, directory: Option<PathBuf>) -> Result<(), PatternError> {
    router.get("/", root_handler)?;
    router.get("/echo/{text}", echo_handler)?;
    router.get("/user-agent", user_agent_handler)?;

    if let Some(dir) = directory {
        let dir = Arc::new(dir);

        let read_dir = Arc::clone(&dir);
        router.get("/files/{name}", move |req| read_file_handler(&read_dir, req))?;

        router.post("/files/{name}", move |req| write_file_handler(&dir, req))?;
    }

    Ok(())
}
