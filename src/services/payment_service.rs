// ============================================================================
// PAYMENT SERVICE - Cliente del relay de pagos
// ============================================================================
// El relay es un proceso aparte que envuelve la API de Stripe; aquí solo se
// consume su contrato: sonda de vida y creación de payment intents.
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{PaymentIntentRequest, PaymentIntentResponse};
use crate::utils::constants::PAYMENT_API_URL;

#[derive(Clone)]
pub struct PaymentService {
    base_url: String,
}

impl PaymentService {
    pub fn new() -> Self {
        Self {
            base_url: PAYMENT_API_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Sonda de vida del relay
    pub async fn test_connection(&self) -> Result<String, ApiError> {
        let url = format!("{}/api/test", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Remote {
                code: response.status(),
                message: response.status_text(),
            });
        }

        let body: TestResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(body.message)
    }

    /// Crear un payment intent; devuelve el clientSecret de Stripe
    pub async fn create_payment_intent(&self, amount: i64) -> Result<String, ApiError> {
        let url = format!("{}/api/create-payment-intent", self.base_url);

        log::info!("💳 Creando payment intent por {} céntimos", amount);

        let response = Request::post(&url)
            .json(&PaymentIntentRequest { amount })
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body: PaymentIntentResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(ApiError::Remote {
                code: status,
                message: error,
            });
        }

        body.client_secret
            .ok_or_else(|| ApiError::Parse("respuesta sin clientSecret".to_string()))
    }
}

impl Default for PaymentService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct TestResponse {
    message: String,
}
