//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_lite --port 4221 --directory /tmp/files
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 FILES_DIR=/tmp/files LOG_LEVEL=debug ./http_lite
//! ```

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Errores de validación de la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error accessing directory {path:?}: {source}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} is not a directory")]
    NotADirectory(PathBuf),
}

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "http_lite")]
#[command(about = "Servidor HTTP/1.1 mínimo con router por patrones y compresión gzip")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio servido por /files/{name}; sin él esas rutas no existen
    #[arg(short, long, env = "FILES_DIR")]
    pub directory: Option<PathBuf>,

    /// Filtro de logs (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_lite::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Si se indicó `--directory`, debe existir y ser un directorio.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.directory {
            let metadata = std::fs::metadata(dir).map_err(|source| ConfigError::DirectoryNotFound {
                path: dir.clone(),
                source,
            })?;

            if !metadata.is_dir() {
                return Err(ConfigError::NotADirectory(dir.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "0.0.0.0".to_string(),
            directory: None,
            log_level: "info".to_string(),
        }
    }
}
