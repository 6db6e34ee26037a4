//! # Patrones de rutas
//! src/router/pattern.rs
//!
//! Un patrón es un path con segmentos literales y placeholders `{nombre}`:
//!
//! ```text
//! /files/{name}      →  ^/files/(?P<name>[^/]+)$
//! /users/{id}.json   →  ^/users/(?P<id>[^/]+)\.json$
//! ```
//!
//! Cada placeholder captura uno o más caracteres que no sean `/`. El texto
//! literal se escapa, así que `.` o `+` coinciden literalmente.

use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// Errores al compilar un patrón de ruta
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Unclosed '{{' in route pattern {0:?}")]
    UnclosedPlaceholder(String),

    #[error("Unexpected '}}' in route pattern {0:?}")]
    UnexpectedBrace(String),

    #[error("Invalid placeholder name {name:?} in route pattern {pattern:?}")]
    InvalidName { pattern: String, name: String },

    #[error("Placeholder {name:?} appears twice in route pattern {pattern:?}")]
    DuplicateName { pattern: String, name: String },

    #[error("Route pattern {pattern:?} did not compile: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Patrón compilado, anclado al inicio y al final del path
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// Plantilla original (ej: "/files/{name}")
    template: String,

    regex: Regex,

    /// Nombres de los placeholders en orden de aparición
    names: Vec<String>,
}

impl PathPattern {
    /// Compila una plantilla
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::router::PathPattern;
    ///
    /// let pattern = PathPattern::compile("/echo/{text}").unwrap();
    /// assert!(pattern.is_match("/echo/abc"));
    /// assert!(!pattern.is_match("/echo/abc/def"));
    /// assert_eq!(pattern.captures("/echo/abc").unwrap()["text"], "abc");
    /// ```
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let mut source = String::from("^");
        let mut names: Vec<String> = Vec::new();
        let mut rest = template;

        while let Some(brace) = rest.find(['{', '}']) {
            let (literal, tail) = rest.split_at(brace);
            if tail.starts_with('}') {
                return Err(PatternError::UnexpectedBrace(template.to_string()));
            }

            source.push_str(&regex::escape(literal));

            let close = tail
                .find('}')
                .ok_or_else(|| PatternError::UnclosedPlaceholder(template.to_string()))?;
            let name = &tail[1..close];

            if !is_valid_name(name) {
                return Err(PatternError::InvalidName {
                    pattern: template.to_string(),
                    name: name.to_string(),
                });
            }
            if names.iter().any(|existing| existing == name) {
                return Err(PatternError::DuplicateName {
                    pattern: template.to_string(),
                    name: name.to_string(),
                });
            }

            source.push_str(&format!("(?P<{}>[^/]+)", name));
            names.push(name.to_string());
            rest = &tail[close + 1..];
        }

        source.push_str(&regex::escape(rest));
        source.push('$');

        let regex = Regex::new(&source).map_err(|source| PatternError::Regex {
            pattern: template.to_string(),
            source,
        })?;

        Ok(Self {
            template: template.to_string(),
            regex,
            names,
        })
    }

    /// ¿El path completo coincide con el patrón?
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Extrae los parámetros nombrados, o `None` si no coincide
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(path)?;

        Some(
            self.names
                .iter()
                .filter_map(|name| {
                    caps.name(name)
                        .map(|value| (name.clone(), value.as_str().to_string()))
                })
                .collect(),
        )
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn param_names(&self) -> &[String] {
        &self.names
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let pattern = PathPattern::compile("/user-agent").unwrap();

        assert!(pattern.is_match("/user-agent"));
        assert!(!pattern.is_match("/user-agent/"));
        assert!(!pattern.is_match("/user-agentx"));
        assert!(!pattern.is_match("x/user-agent"));
        assert!(pattern.param_names().is_empty());
        assert_eq!(pattern.captures("/user-agent"), Some(HashMap::new()));
    }

    #[test]
    fn test_root_pattern_is_anchored() {
        let pattern = PathPattern::compile("/").unwrap();

        assert!(pattern.is_match("/"));
        assert!(!pattern.is_match("/echo"));
    }

    #[test]
    fn test_placeholder_capture() {
        let pattern = PathPattern::compile("/echo/{text}").unwrap();
        let params = pattern.captures("/echo/abc").unwrap();

        assert_eq!(params.get("text").map(String::as_str), Some("abc"));
        assert_eq!(pattern.param_names(), ["text".to_string()]);
    }

    #[test]
    fn test_placeholder_does_not_cross_slash() {
        let pattern = PathPattern::compile("/echo/{text}").unwrap();

        assert!(!pattern.is_match("/echo/abc/def"));
        assert!(!pattern.is_match("/echo/"));
        assert_eq!(pattern.captures("/echo/abc/def"), None);
    }

    #[test]
    fn test_multiple_placeholders() {
        let pattern = PathPattern::compile("/users/{user_id}/posts/{post}").unwrap();
        let params = pattern.captures("/users/42/posts/hello-world").unwrap();

        assert_eq!(params["user_id"], "42");
        assert_eq!(params["post"], "hello-world");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_literal_text_is_escaped() {
        let pattern = PathPattern::compile("/data/{id}.json").unwrap();

        assert!(pattern.is_match("/data/7.json"));
        assert!(!pattern.is_match("/data/7xjson"));
        assert_eq!(pattern.captures("/data/7.json").unwrap()["id"], "7");
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            PathPattern::compile("/files/{name"),
            Err(PatternError::UnclosedPlaceholder(_))
        ));
        assert!(matches!(
            PathPattern::compile("/files/name}"),
            Err(PatternError::UnexpectedBrace(_))
        ));
        assert!(matches!(
            PathPattern::compile("/files/{}"),
            Err(PatternError::InvalidName { .. })
        ));
        assert!(matches!(
            PathPattern::compile("/files/{1st}"),
            Err(PatternError::InvalidName { .. })
        ));
        assert!(matches!(
            PathPattern::compile("/a/{x}/b/{x}"),
            Err(PatternError::DuplicateName { name, .. }) if name == "x"
        ));
    }

    #[test]
    fn test_template_is_kept() {
        let pattern = PathPattern::compile("/files/{name}").unwrap();
        assert_eq!(pattern.template(), "/files/{name}");
    }
}
