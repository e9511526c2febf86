use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Sobre `{code, data|message}` que comparten los microservicios de
/// identidad y rutas. `code` es el código de negocio, no el HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub code: u16,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Devuelve `data` si el código de negocio coincide; si no, error Remote
    /// con el mensaje del servicio.
    pub fn into_data(self, expected: u16) -> Result<T, ApiError> {
        if self.code == expected {
            self.data
                .ok_or_else(|| ApiError::Parse("respuesta sin campo data".to_string()))
        } else {
            Err(ApiError::Remote {
                code: self.code,
                message: self.message.unwrap_or_default(),
            })
        }
    }

    /// Igual que into_data pero ignorando el payload (deletes).
    pub fn expect_code(&self, expected: u16) -> Result<(), ApiError> {
        if self.code == expected {
            Ok(())
        } else {
            Err(ApiError::Remote {
                code: self.code,
                message: self.message.clone().unwrap_or_default(),
            })
        }
    }
}
