//! # Códigos de Estado HTTP
//!
//! El core sólo emite estos siete códigos:
//!
//! - **2xx**: Éxito (200, 201, 204)
//! - **4xx**: Error del cliente (400, 404, 405)
//! - **5xx**: Error del servidor (500)
//!
//! Un handler puede devolver cualquier otro código con
//! [`StatusCode::from_u16`]; en ese caso la reason phrase es `Unknown Status`.

/// Código de estado de una respuesta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok,

    /// 201 Created - Se creó un recurso (ej: POST /files/{name})
    Created,

    /// 204 No Content - Petición exitosa sin contenido en el body
    NoContent,

    /// 400 Bad Request - Request malformado
    BadRequest,

    /// 404 Not Found - Ningún patrón coincide con el path
    NotFound,

    /// 405 Method Not Allowed - El path existe pero no con ese método
    MethodNotAllowed,

    /// 500 Internal Server Error - El handler devolvió un error
    InternalServerError,

    /// Cualquier otro código suministrado por un handler
    Unknown(u16),
}

impl StatusCode {
    /// Mapea un número al código conocido, o a `Unknown`
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::http::StatusCode;
    /// assert_eq!(StatusCode::from_u16(405), StatusCode::MethodNotAllowed);
    /// assert_eq!(StatusCode::from_u16(418), StatusCode::Unknown(418));
    /// ```
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            201 => StatusCode::Created,
            204 => StatusCode::NoContent,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            405 => StatusCode::MethodNotAllowed,
            500 => StatusCode::InternalServerError,
            other => StatusCode::Unknown(other),
        }
    }

    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
            StatusCode::Unknown(code) => *code,
        }
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use http_lite::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "Method Not Allowed");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::Unknown(_) => "Unknown Status",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
