use serde::{Deserialize, Serialize};

/// Cuerpo de POST /api/create-payment-intent (importe en céntimos)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentIntentRequest {
    pub amount: i64,
}

/// Respuesta del relay: clientSecret en éxito, error con status 500 si no
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret", default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
