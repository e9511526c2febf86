// ============================================================================
// JOURNEYS VIEWMODEL - Rutas guardadas
// ============================================================================
// Asimetría deliberada: el camino de lectura degrada a lista vacía y se
// queda el error en el estado; las mutaciones (save/remove) se propagan
// al llamador además de reflejarse en el estado.
// ============================================================================

use std::rc::Rc;

use chrono::Utc;

use crate::error::ApiError;
use crate::models::{JourneyData, SavedJourney};
use crate::services::routes_service::{RouteRecord, SaveRouteRequest};
use crate::services::SavedRoutesApi;
use crate::state::{JourneysState, SessionState};

/// ViewModel de rutas guardadas. La lista pertenece al usuario de la sesión
/// actual; dos acciones concurrentes sobre el mismo store compiten y gana la
/// última en resolver (sin token de secuencia).
pub struct JourneysViewModel {
    routes: Rc<dyn SavedRoutesApi>,
    session: SessionState,
    state: JourneysState,
}

impl JourneysViewModel {
    pub fn new(routes: Rc<dyn SavedRoutesApi>, session: SessionState) -> Self {
        Self {
            routes,
            session,
            state: JourneysState::new(),
        }
    }

    pub fn state(&self) -> &JourneysState {
        &self.state
    }

    fn require_user_id(&self) -> Result<i64, ApiError> {
        self.session
            .get_user()
            .map(|u| u.user_id)
            .ok_or_else(|| {
                ApiError::Validation("User ID not available. Please log in again.".to_string())
            })
    }

    /// Cargar las rutas guardadas del usuario actual. Cualquier fallo deja
    /// la lista vacía y el error en el estado; nunca una lista parcial.
    pub async fn fetch_saved_journeys(&self) {
        self.state.set_loading(true);
        self.state.set_error(None);

        let result = async {
            let user_id = self.require_user_id()?;
            log::info!("📋 Obteniendo rutas guardadas del usuario: {}", user_id);

            let envelope = self.routes.fetch_routes(user_id).await?;
            let payload = envelope.into_data(200)?;

            Ok::<_, ApiError>(
                payload
                    .routes
                    .into_iter()
                    .map(journey_from_record)
                    .collect::<Vec<_>>(),
            )
        }
        .await;

        match result {
            Ok(journeys) => {
                log::info!("✅ Rutas guardadas cargadas: {}", journeys.len());
                self.state.set_saved_journeys(journeys);
            }
            Err(e) => {
                log::error!("❌ Error obteniendo rutas guardadas: {}", e);
                self.state
                    .set_error(Some(e.business_message("Failed to fetch saved journeys")));
                self.state.set_saved_journeys(Vec::new());
            }
        }

        self.state.set_loading(false);
    }

    /// Guardar un trayecto planificado. En éxito añade a la lista la entrada
    /// construida con el eco del servicio; en fallo la lista no se toca y el
    /// error se propaga.
    pub async fn save_journey(&self, journey_data: JourneyData) -> Result<SavedJourney, ApiError> {
        self.state.set_loading(true);
        self.state.set_error(None);

        let result = async {
            let user_id = self.require_user_id()?;

            let route_name = journey_data
                .route_name
                .clone()
                .unwrap_or_else(|| format!("Journey to {}", journey_data.end_point));

            log::info!(
                "💾 Guardando trayecto: {} → {}",
                journey_data.start_point,
                journey_data.end_point
            );

            let request = SaveRouteRequest {
                user_id,
                route_name: route_name.clone(),
                route_data: journey_data.clone(),
            };

            let envelope = self.routes.save_route(&request).await?;
            let record = envelope.into_data(201)?;

            Ok::<_, ApiError>(SavedJourney {
                id: record.id,
                start_point: journey_data.start_point.clone(),
                end_point: journey_data.end_point.clone(),
                transport_mode: journey_data.transport_mode.clone(),
                travel_time: journey_data.travel_time,
                cost: journey_data.cost,
                // Eco del servicio, con fallback a datos de cliente
                saved_at: record.created_at.unwrap_or_else(|| Utc::now().to_rfc3339()),
                route_name: record.route_name.unwrap_or(route_name),
            })
        }
        .await;

        match &result {
            Ok(journey) => {
                log::info!("✅ Trayecto guardado con id {}", journey.id);
                self.state.add_journey(journey.clone());
            }
            Err(e) => {
                log::error!("❌ Error guardando trayecto: {}", e);
                self.state
                    .set_error(Some(e.business_message("Failed to save journey")));
            }
        }

        self.state.set_loading(false);
        result
    }

    /// Eliminar una ruta guardada. En éxito quita la entrada local con ese
    /// id; en fallo la lista no se toca y el error se propaga.
    pub async fn remove_journey(&self, journey_id: i64) -> Result<(), ApiError> {
        self.state.set_loading(true);
        self.state.set_error(None);

        let result = async {
            let envelope = self.routes.delete_route(journey_id).await?;
            envelope.expect_code(200)
        }
        .await;

        match &result {
            Ok(()) => {
                log::info!("🗑️ Ruta {} eliminada", journey_id);
                self.state.remove_journey(journey_id);
            }
            Err(e) => {
                log::error!("❌ Error eliminando ruta {}: {}", journey_id, e);
                self.state
                    .set_error(Some(e.business_message("Failed to remove journey")));
            }
        }

        self.state.set_loading(false);
        result
    }
}

/// Registro del servicio selectedRoute → forma local. El servicio no expone
/// tiempo ni coste, y solo trae identificadores de bus.
fn journey_from_record(record: RouteRecord) -> SavedJourney {
    let start_point = record
        .bus_stop_code
        .unwrap_or_else(|| "Unknown start".to_string());
    let end_point = record
        .bus_id
        .unwrap_or_else(|| "Unknown destination".to_string());

    SavedJourney {
        id: record.route_id,
        route_name: format!("Route from {} via {}", start_point, end_point),
        start_point,
        end_point,
        // Hay BusID de por medio: asumimos bus
        transport_mode: "Bus".to_string(),
        travel_time: 0,
        cost: 0.0,
        saved_at: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiEnvelope, User};
    use crate::services::routes_service::{SavedRouteRecord, SelectedRoutesPayload};
    use crate::utils::storage::{MemorySlot, SessionSlot};
    use async_trait::async_trait;
    use futures::executor::block_on;

    struct StubRoutes {
        fetch: Result<ApiEnvelope<SelectedRoutesPayload>, ApiError>,
        save: Result<ApiEnvelope<SavedRouteRecord>, ApiError>,
        delete: Result<ApiEnvelope<serde_json::Value>, ApiError>,
    }

    impl Default for StubRoutes {
        fn default() -> Self {
            Self {
                fetch: Err(ApiError::Network("sin stub".to_string())),
                save: Err(ApiError::Network("sin stub".to_string())),
                delete: Err(ApiError::Network("sin stub".to_string())),
            }
        }
    }

    #[async_trait(?Send)]
    impl SavedRoutesApi for StubRoutes {
        async fn fetch_routes(
            &self,
            _user_id: i64,
        ) -> Result<ApiEnvelope<SelectedRoutesPayload>, ApiError> {
            self.fetch.clone()
        }

        async fn save_route(
            &self,
            _request: &SaveRouteRequest,
        ) -> Result<ApiEnvelope<SavedRouteRecord>, ApiError> {
            self.save.clone()
        }

        async fn delete_route(
            &self,
            _route_id: i64,
        ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
            self.delete.clone()
        }
    }

    fn session_with_user(id: Option<i64>) -> SessionState {
        let slot: Rc<dyn SessionSlot> = Rc::new(MemorySlot::new());
        let session = SessionState::new(slot);
        if let Some(id) = id {
            session.set_user(Some(User {
                user_id: id,
                full_name: "alice".to_string(),
                email: String::new(),
                phone: None,
            }));
        }
        session
    }

    fn build(stub: StubRoutes, user_id: Option<i64>) -> JourneysViewModel {
        JourneysViewModel::new(Rc::new(stub), session_with_user(user_id))
    }

    fn record(id: i64, stop: &str, bus: &str) -> RouteRecord {
        RouteRecord {
            route_id: id,
            bus_stop_code: Some(stop.to_string()),
            bus_id: Some(bus.to_string()),
        }
    }

    fn journey(id: i64) -> SavedJourney {
        SavedJourney {
            id,
            start_point: "A".to_string(),
            end_point: "B".to_string(),
            transport_mode: "Bus".to_string(),
            travel_time: 10,
            cost: 1.5,
            saved_at: "2024-01-01T00:00:00Z".to_string(),
            route_name: format!("route-{}", id),
        }
    }

    fn journey_data() -> JourneyData {
        JourneyData {
            start_point: "Orchard".to_string(),
            end_point: "Changi".to_string(),
            transport_mode: "MRT".to_string(),
            travel_time: 45,
            cost: 2.3,
            route_name: None,
        }
    }

    #[test]
    fn fetch_without_user_fails_fast_to_empty() {
        let vm = build(StubRoutes::default(), None);
        vm.state().set_saved_journeys(vec![journey(1)]);

        block_on(vm.fetch_saved_journeys());

        assert!(vm.state().get_saved_journeys().is_empty());
        assert_eq!(
            vm.state().get_error().as_deref(),
            Some("User ID not available. Please log in again.")
        );
        assert!(!vm.state().get_loading());
    }

    #[test]
    fn fetch_success_transforms_records() {
        let vm = build(
            StubRoutes {
                fetch: Ok(ApiEnvelope {
                    code: 200,
                    data: Some(SelectedRoutesPayload {
                        routes: vec![record(7, "01012", "SBS123")],
                        count: 1,
                    }),
                    message: None,
                }),
                ..Default::default()
            },
            Some(1),
        );

        block_on(vm.fetch_saved_journeys());

        let journeys = vm.state().get_saved_journeys();
        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].id, 7);
        assert_eq!(journeys[0].start_point, "01012");
        assert_eq!(journeys[0].end_point, "SBS123");
        assert_eq!(journeys[0].transport_mode, "Bus");
        assert_eq!(journeys[0].route_name, "Route from 01012 via SBS123");
        assert!(vm.state().get_error().is_none());
    }

    #[test]
    fn fetch_failure_resets_to_empty_never_partial() {
        let vm = build(
            StubRoutes {
                fetch: Err(ApiError::Network("fetch aborted".to_string())),
                ..Default::default()
            },
            Some(1),
        );
        vm.state().set_saved_journeys(vec![journey(1), journey(2)]);

        block_on(vm.fetch_saved_journeys());

        assert!(vm.state().get_saved_journeys().is_empty());
        assert!(vm.state().get_error().is_some());
        assert!(!vm.state().get_loading());
    }

    #[test]
    fn fetch_business_failure_also_degrades() {
        let vm = build(
            StubRoutes {
                fetch: Ok(ApiEnvelope {
                    code: 500,
                    data: None,
                    message: Some("backend down".to_string()),
                }),
                ..Default::default()
            },
            Some(1),
        );
        vm.state().set_saved_journeys(vec![journey(3)]);

        block_on(vm.fetch_saved_journeys());

        assert!(vm.state().get_saved_journeys().is_empty());
        assert_eq!(vm.state().get_error().as_deref(), Some("backend down"));
    }

    #[test]
    fn fetch_overwrites_previous_users_list() {
        let vm = build(
            StubRoutes {
                fetch: Ok(ApiEnvelope {
                    code: 200,
                    data: Some(SelectedRoutesPayload {
                        routes: vec![record(20, "X", "Y")],
                        count: 1,
                    }),
                    message: None,
                }),
                ..Default::default()
            },
            Some(2),
        );
        vm.state().set_saved_journeys(vec![journey(1), journey(2)]);

        block_on(vm.fetch_saved_journeys());

        let ids: Vec<i64> = vm.state().get_saved_journeys().iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![20]);
    }

    #[test]
    fn save_success_appends_with_remote_echo() {
        let vm = build(
            StubRoutes {
                save: Ok(ApiEnvelope {
                    code: 201,
                    data: Some(SavedRouteRecord {
                        id: 9,
                        created_at: Some("2024-06-01T10:00:00Z".to_string()),
                        route_name: Some("My commute".to_string()),
                    }),
                    message: None,
                }),
                ..Default::default()
            },
            Some(1),
        );

        let saved = block_on(vm.save_journey(journey_data())).unwrap();

        assert_eq!(saved.id, 9);
        assert_eq!(saved.start_point, "Orchard");
        assert_eq!(saved.transport_mode, "MRT");
        assert_eq!(saved.saved_at, "2024-06-01T10:00:00Z");
        assert_eq!(saved.route_name, "My commute");
        assert_eq!(vm.state().get_saved_journeys().len(), 1);
    }

    #[test]
    fn save_falls_back_to_client_fields_when_echo_is_partial() {
        let vm = build(
            StubRoutes {
                save: Ok(ApiEnvelope {
                    code: 201,
                    data: Some(SavedRouteRecord {
                        id: 10,
                        created_at: None,
                        route_name: None,
                    }),
                    message: None,
                }),
                ..Default::default()
            },
            Some(1),
        );

        let saved = block_on(vm.save_journey(journey_data())).unwrap();

        assert_eq!(saved.route_name, "Journey to Changi");
        assert!(!saved.saved_at.is_empty());
    }

    #[test]
    fn save_failure_leaves_list_untouched_and_reraises() {
        let vm = build(
            StubRoutes {
                save: Err(ApiError::Network("fetch aborted".to_string())),
                ..Default::default()
            },
            Some(1),
        );
        let before = vec![journey(1), journey(2)];
        vm.state().set_saved_journeys(before.clone());

        let err = block_on(vm.save_journey(journey_data())).unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(vm.state().get_saved_journeys(), before);
        assert_eq!(
            vm.state().get_error().as_deref(),
            Some("Failed to save journey")
        );
    }

    #[test]
    fn save_without_user_fails_fast() {
        let vm = build(StubRoutes::default(), None);

        let err = block_on(vm.save_journey(journey_data())).unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(vm.state().get_saved_journeys().is_empty());
    }

    #[test]
    fn remove_success_removes_only_matching_entry() {
        let vm = build(
            StubRoutes {
                delete: Ok(ApiEnvelope {
                    code: 200,
                    data: None,
                    message: None,
                }),
                ..Default::default()
            },
            Some(1),
        );
        vm.state()
            .set_saved_journeys(vec![journey(41), journey(42), journey(43)]);

        block_on(vm.remove_journey(42)).unwrap();

        let ids: Vec<i64> = vm.state().get_saved_journeys().iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![41, 43]);
    }

    #[test]
    fn remove_failure_reraises_and_keeps_list() {
        let vm = build(
            StubRoutes {
                delete: Ok(ApiEnvelope {
                    code: 500,
                    data: None,
                    message: Some("delete failed".to_string()),
                }),
                ..Default::default()
            },
            Some(1),
        );
        vm.state().set_saved_journeys(vec![journey(42)]);

        let err = block_on(vm.remove_journey(42)).unwrap_err();

        assert!(matches!(err, ApiError::Remote { code: 500, .. }));
        assert_eq!(vm.state().get_saved_journeys().len(), 1);
        assert_eq!(vm.state().get_error().as_deref(), Some("delete failed"));
    }

    #[test]
    fn transform_defaults_missing_record_fields() {
        let journey = journey_from_record(RouteRecord {
            route_id: 1,
            bus_stop_code: None,
            bus_id: None,
        });

        assert_eq!(journey.start_point, "Unknown start");
        assert_eq!(journey.end_point, "Unknown destination");
        assert_eq!(
            journey.route_name,
            "Route from Unknown start via Unknown destination"
        );
    }
}
