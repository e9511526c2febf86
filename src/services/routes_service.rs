// ============================================================================
// ROUTES SERVICE - Rutas guardadas
// ============================================================================
// Tres backends distintos, tal como está desplegado hoy:
// - save   → servicio composite POST /routes/save
// - delete → composite DELETE /routes/{id}, con fallback al servicio atómico
// - fetch  → servicio selectedRoute directo (con timeout fijo)
// ============================================================================

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{ApiEnvelope, JourneyData};
use crate::services::decode_envelope;
use crate::utils::constants::{
    COMPOSITE_API_URL, DEV_FETCH_FALLBACK, SAVED_ROUTES_API_URL, SELECTED_ROUTE_API_URL,
};

/// Timeout fijo del camino de lectura directo. Es la única llamada del
/// cliente con cota superior.
const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Contrato de los servicios de rutas guardadas
#[async_trait(?Send)]
pub trait SavedRoutesApi {
    async fn fetch_routes(
        &self,
        user_id: i64,
    ) -> Result<ApiEnvelope<SelectedRoutesPayload>, ApiError>;

    async fn save_route(
        &self,
        request: &SaveRouteRequest,
    ) -> Result<ApiEnvelope<SavedRouteRecord>, ApiError>;

    async fn delete_route(
        &self,
        route_id: i64,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError>;
}

/// Estrategia de degradación cuando falla el fetch directo.
/// Se elige al construir el servicio, nunca en el sitio de la llamada.
pub trait FetchFallback {
    /// Payload sustituto para un fetch fallido, o None para propagar el error
    fn on_fetch_error(&self, error: &ApiError) -> Option<SelectedRoutesPayload>;
}

/// Producción: nunca degrada
pub struct NoFallback;

impl FetchFallback for NoFallback {
    fn on_fetch_error(&self, _error: &ApiError) -> Option<SelectedRoutesPayload> {
        None
    }
}

/// Desarrollo: responde una lista vacía y deja constancia en el log
pub struct EmptyListFallback;

impl FetchFallback for EmptyListFallback {
    fn on_fetch_error(&self, error: &ApiError) -> Option<SelectedRoutesPayload> {
        log::warn!(
            "⚠️ Fetch de rutas fallido ({}), degradando a lista vacía (DEV_FETCH_FALLBACK)",
            error
        );
        Some(SelectedRoutesPayload {
            routes: Vec::new(),
            count: 0,
        })
    }
}

/// Cliente real de los servicios de rutas guardadas
pub struct RoutesService {
    composite_url: String,
    atomic_url: String,
    selected_route_url: String,
    fallback: Box<dyn FetchFallback>,
}

impl RoutesService {
    /// Constructor por defecto: el fallback de desarrollo solo se activa si
    /// el build define DEV_FETCH_FALLBACK.
    pub fn new() -> Self {
        let fallback: Box<dyn FetchFallback> = if DEV_FETCH_FALLBACK.is_some() {
            Box::new(EmptyListFallback)
        } else {
            Box::new(NoFallback)
        };
        Self::with_fallback(fallback)
    }

    pub fn with_fallback(fallback: Box<dyn FetchFallback>) -> Self {
        Self {
            composite_url: COMPOSITE_API_URL.to_string(),
            atomic_url: SAVED_ROUTES_API_URL.to_string(),
            selected_route_url: SELECTED_ROUTE_API_URL.to_string(),
            fallback,
        }
    }
}

impl Default for RoutesService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SavedRoutesApi for RoutesService {
    /// Rutas guardadas del usuario, directo contra selectedRoute
    async fn fetch_routes(
        &self,
        user_id: i64,
    ) -> Result<ApiEnvelope<SelectedRoutesPayload>, ApiError> {
        let url = format!("{}/selectedroute/user/{}", self.selected_route_url, user_id);

        let request = Request::get(&url)
            .header("Accept", "application/json")
            .send();

        let result = match select(Box::pin(request), Box::pin(TimeoutFuture::new(FETCH_TIMEOUT_MS))).await {
            Either::Left((response, _)) => {
                response.map_err(|e| ApiError::Network(e.to_string()))
            }
            Either::Right(_) => Err(ApiError::Network(format!(
                "Timeout tras {} ms",
                FETCH_TIMEOUT_MS
            ))),
        };

        let envelope = match result {
            Ok(response) => decode_envelope(response).await,
            Err(e) => Err(e),
        };

        match envelope {
            Ok(envelope) => Ok(envelope),
            Err(e) => match self.fallback.on_fetch_error(&e) {
                Some(payload) => Ok(ApiEnvelope {
                    code: 200,
                    data: Some(payload),
                    message: None,
                }),
                None => Err(e),
            },
        }
    }

    /// Guardar ruta via servicio composite
    async fn save_route(
        &self,
        request: &SaveRouteRequest,
    ) -> Result<ApiEnvelope<SavedRouteRecord>, ApiError> {
        let url = format!("{}/routes/save", self.composite_url);

        log::info!("💾 Guardando ruta: {}", request.route_name);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_envelope(response).await
    }

    /// Eliminar ruta: composite primero, servicio atómico si el composite falla
    async fn delete_route(
        &self,
        route_id: i64,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        let url = format!("{}/routes/{}", self.composite_url, route_id);

        let composite = match Request::delete(&url).send().await {
            Ok(response) => decode_envelope(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        };

        match composite {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                log::warn!(
                    "⚠️ Fallo del composite al eliminar ruta {} ({}), probando servicio atómico...",
                    route_id,
                    e
                );
                let fallback_url = format!("{}/saved_routes/{}", self.atomic_url, route_id);
                let response = Request::delete(&fallback_url)
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                decode_envelope(response).await
            }
        }
    }
}

/// Registro tal como lo devuelve el servicio selectedRoute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    #[serde(rename = "RouteID")]
    pub route_id: i64,
    #[serde(rename = "BusStopCode", default)]
    pub bus_stop_code: Option<String>,
    #[serde(rename = "BusID", default)]
    pub bus_id: Option<String>,
}

/// data de GET /selectedroute/user/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRoutesPayload {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub count: usize,
}

/// Cuerpo de POST /routes/save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveRouteRequest {
    pub user_id: i64,
    pub route_name: String,
    pub route_data: JourneyData,
}

/// data de la respuesta de save
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavedRouteRecord {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub route_name: Option<String>,
}
