// ============================================================================
// JOURNEY SERVICE - Planificación de trayectos (pass-through)
// ============================================================================
// Las respuestas son opacas para los stores: se entregan tal cual a la vista.
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::error::ApiError;
use crate::utils::constants::{COMPOSITE_API_URL, PLAN_JOURNEY_API_URL};

/// Opciones de trayecto entre dos puntos
pub async fn get_journey_options(start_point: &str, end_point: &str) -> Result<Value, ApiError> {
    let url = format!("{}/journeys", COMPOSITE_API_URL);

    log::info!("🔍 Buscando trayectos: {} → {}", start_point, end_point);

    let response = Request::get(&url)
        .query([
            ("start", start_point.to_string()),
            ("end", end_point.to_string()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Remote {
            code: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Planificar trayecto contra el servicio composite plan_journey
pub async fn plan_journey(
    origin: &str,
    destination: &str,
    passenger_type: &str,
    peak_hour: bool,
) -> Result<Value, ApiError> {
    let url = format!("{}/plan_journey", PLAN_JOURNEY_API_URL);

    log::info!("🗺️ Planificando trayecto: {} → {}", origin, destination);

    let response = Request::get(&url)
        .query([
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
            ("peakHour", peak_hour.to_string()),
            ("passengerType", passenger_type.to_string()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Remote {
            code: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
