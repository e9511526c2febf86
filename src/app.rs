// ============================================================================
// APP - Contexto de aplicación (reemplaza el store global)
// ============================================================================

use std::rc::Rc;

use crate::router::{resolve_navigation, NavigationDecision, Route};
use crate::services::{IdentityApi, IdentityService, PaymentService, RoutesService, SavedRoutesApi};
use crate::utils::storage::{LocalStorageSlot, SessionSlot};
use crate::viewmodels::{AuthViewModel, JourneysViewModel};

/// Contexto de la aplicación: construye y cablea stores y servicios, y se
/// pasa explícitamente a quien lo necesita.
pub struct AppContext {
    pub auth: AuthViewModel,
    pub journeys: JourneysViewModel,
    pub payment: PaymentService,
}

impl AppContext {
    /// Contexto con los colaboradores reales
    pub fn new() -> Self {
        let slot: Rc<dyn SessionSlot> = Rc::new(LocalStorageSlot);
        let identity: Rc<dyn IdentityApi> = Rc::new(IdentityService::new());
        let routes: Rc<dyn SavedRoutesApi> = Rc::new(RoutesService::new());
        Self::with_parts(identity, routes, slot)
    }

    /// Contexto con colaboradores inyectados (tests, shells alternativos)
    pub fn with_parts(
        identity: Rc<dyn IdentityApi>,
        routes: Rc<dyn SavedRoutesApi>,
        slot: Rc<dyn SessionSlot>,
    ) -> Self {
        let auth = AuthViewModel::new(identity, slot);
        let journeys = JourneysViewModel::new(routes, auth.state().clone());
        Self {
            auth,
            journeys,
            payment: PaymentService::new(),
        }
    }

    /// Aplicar el guard a una navegación y devolver el path efectivo
    pub fn resolve_path(&self, requested_path: &str) -> String {
        let target = Route::from_path(requested_path).unwrap_or(Route::Home);

        match resolve_navigation(target, requested_path, self.auth.state().is_authenticated()) {
            NavigationDecision::Proceed => requested_path.to_string(),
            NavigationDecision::RedirectToLogin { redirect } => {
                log::info!("🔒 Ruta protegida sin sesión, redirigiendo a login");
                let encoded = js_sys::encode_uri_component(&redirect);
                format!("{}?redirect={}", Route::Login.path(), String::from(encoded))
            }
            NavigationDecision::RedirectToPlanner => {
                log::info!("ℹ️ Sesión ya iniciada, redirigiendo al planificador");
                Route::JourneyPlanner.path().to_string()
            }
        }
    }

    /// Navegar aplicando el guard sobre window.location
    pub fn go_to(&self, requested_path: &str) {
        let path = self.resolve_path(requested_path);
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().set_href(&path) {
                log::error!("❌ Error navegando a {}: {:?}", path, e);
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
