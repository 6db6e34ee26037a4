//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee y parsea un request
//! 4. Despacha al router, comprime y envía la respuesta
//! 5. Cierra la conexión

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{handle_connection, ConnectionError};
pub use tcp::Server;
