// ============================================================================
// ERROR - Taxonomía de errores de las llamadas remotas
// ============================================================================

use thiserror::Error;

/// Errores de cualquier operación contra los microservicios.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Falta un dato obligatorio antes de intentar la llamada
    #[error("{0}")]
    Validation(String),

    /// El servicio respondió con un código de negocio no exitoso
    #[error("Error del servidor ({code}): {message}")]
    Remote { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Mensaje para la UI: el del servicio si lo trae, si no el texto por
    /// defecto de la operación ("Login failed", "Registration failed", ...).
    pub fn business_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Remote { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
