// ============================================================================
// IDENTITY SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Microservicio de usuarios: registro, autenticación y revalidación.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{ApiEnvelope, User};
use crate::services::decode_envelope;
use crate::utils::constants::USER_API_URL;

/// Contrato del servicio de identidad que consume el AuthViewModel
#[async_trait(?Send)]
pub trait IdentityApi {
    async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<ApiEnvelope<User>, ApiError>;

    async fn authenticate(
        &self,
        full_name: &str,
        password: &str,
    ) -> Result<ApiEnvelope<User>, ApiError>;

    async fn get_user(&self, user_id: i64) -> Result<ApiEnvelope<User>, ApiError>;
}

/// Cliente real del microservicio de usuarios
#[derive(Clone)]
pub struct IdentityService {
    base_url: String,
}

impl IdentityService {
    pub fn new() -> Self {
        Self {
            base_url: USER_API_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl IdentityApi for IdentityService {
    /// Crear cuenta nueva
    async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<ApiEnvelope<User>, ApiError> {
        let url = format!("{}/users", self.base_url);
        let request = RegisterRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            // El servicio espera null si no hay teléfono
            phone: phone.filter(|p| !p.is_empty()).map(|p| p.to_string()),
        };

        log::info!("📝 Registrando usuario: {}", full_name);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_envelope(response).await
    }

    /// Autenticar contra POST /authenticate
    async fn authenticate(
        &self,
        full_name: &str,
        password: &str,
    ) -> Result<ApiEnvelope<User>, ApiError> {
        let url = format!("{}/authenticate", self.base_url);
        let request = AuthenticateRequest {
            full_name: full_name.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Autenticando usuario: {}", full_name);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_envelope(response).await
    }

    /// Leer el registro del usuario (revalidación de sesión)
    async fn get_user(&self, user_id: i64) -> Result<ApiEnvelope<User>, ApiError> {
        let url = format!("{}/users/{}", self.base_url, user_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_envelope(response).await
    }
}

#[derive(Serialize)]
struct RegisterRequest {
    #[serde(rename = "FullName")]
    full_name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Password")]
    password: String,
    #[serde(rename = "Phone")]
    phone: Option<String>,
}

#[derive(Serialize)]
struct AuthenticateRequest {
    #[serde(rename = "FullName")]
    full_name: String,
    #[serde(rename = "Password")]
    password: String,
}
