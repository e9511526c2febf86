pub mod identity_service;
pub mod journey_service;
pub mod payment_service;
pub mod routes_service;

pub use identity_service::{IdentityApi, IdentityService};
pub use journey_service::{get_journey_options, plan_journey};
pub use payment_service::PaymentService;
pub use routes_service::{
    EmptyListFallback, FetchFallback, NoFallback, RouteRecord, RoutesService, SaveRouteRequest,
    SavedRouteRecord, SavedRoutesApi, SelectedRoutesPayload,
};

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::ApiEnvelope;

/// Decodificar una respuesta `{code, data|message}`. Una respuesta HTTP no
/// exitosa se convierte en Remote con el mensaje del servicio si lo trae.
pub(crate) async fn decode_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    if response.ok() {
        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    } else {
        let status = response.status();
        let message = match response.json::<ApiEnvelope<serde_json::Value>>().await {
            Ok(envelope) => envelope.message.unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(ApiError::Remote {
            code: status,
            message,
        })
    }
}
