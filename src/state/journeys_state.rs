// ============================================================================
// JOURNEYS STATE - Rutas guardadas del usuario actual
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SavedJourney;

/// Lista de rutas guardadas, espejo de la última respuesta exitosa del
/// servicio remoto para el usuario actual. Cambiar de usuario refetchea,
/// nunca se mezclan listas.
#[derive(Clone, Default)]
pub struct JourneysState {
    saved_journeys: Rc<RefCell<Vec<SavedJourney>>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
}

impl JourneysState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplazar la lista entera (fetch)
    pub fn set_saved_journeys(&self, journeys: Vec<SavedJourney>) {
        *self.saved_journeys.borrow_mut() = journeys;
    }

    /// Añadir una ruta recién guardada (el id lo asignó el servicio remoto)
    pub fn add_journey(&self, journey: SavedJourney) {
        self.saved_journeys.borrow_mut().push(journey);
    }

    /// Quitar la entrada local con ese id
    pub fn remove_journey(&self, journey_id: i64) {
        self.saved_journeys.borrow_mut().retain(|j| j.id != journey_id);
    }

    /// Obtener la lista completa
    pub fn get_saved_journeys(&self) -> Vec<SavedJourney> {
        self.saved_journeys.borrow().clone()
    }

    /// Establecer loading
    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    /// Obtener loading
    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Establecer error
    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    /// Obtener error
    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}
