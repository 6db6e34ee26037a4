//! # Tabla de Headers
//! src/http/headers.rs
//!
//! Multimapa de headers HTTP: la búsqueda es insensible a mayúsculas
//! (la clave interna va en minúsculas), pero cada entrada conserva la clave
//! tal como llegó por el cable para poder re-serializarla igual.
//!
//! Un mismo header puede repetirse (por ejemplo varias líneas
//! `Accept-Encoding`), así que cada nombre mapea a una lista ordenada.

use std::collections::HashMap;

/// Un header individual con su clave original y su valor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Clave con el casing original (ej: "User-Agent")
    pub original_key: String,

    /// Valor ya recortado de espacios
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            original_key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Mapa nombre-en-minúsculas → entradas en orden de inserción
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: HashMap<String, Vec<HeaderEntry>>,
}

impl HeaderMap {
    /// Crea una tabla vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega una entrada al final de la lista de `key`, aunque ya exista
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::http::HeaderMap;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.add("Accept-Encoding", "gzip");
    /// headers.add("accept-encoding", "br");
    ///
    /// assert_eq!(headers.get_all("ACCEPT-ENCODING").len(), 2);
    /// ```
    pub fn add(&mut self, key: &str, value: &str) {
        self.entries
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(HeaderEntry::new(key, value));
    }

    /// Reemplaza el valor de la primera entrada de `key`; si no hay
    /// ninguna se comporta como [`HeaderMap::add`]
    ///
    /// La clave original de la entrada existente se mantiene.
    pub fn set(&mut self, key: &str, value: &str) {
        match self
            .entries
            .get_mut(&key.to_ascii_lowercase())
            .and_then(|list| list.first_mut())
        {
            Some(entry) => entry.value = value.to_string(),
            None => self.add(key, value),
        }
    }

    /// Primer valor de `key`, si existe
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(|entry| entry.value.as_str())
    }

    /// Todas las entradas de `key` en orden de llegada
    pub fn get_all(&self, key: &str) -> &[HeaderEntry] {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        !self.get_all(key).is_empty()
    }

    /// Itera todas las entradas. El orden entre nombres distintos no está
    /// garantizado; dentro de un mismo nombre se respeta la inserción.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.values().flat_map(|list| list.iter())
    }

    /// Número total de entradas (contando repeticiones)
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
