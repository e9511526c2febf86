// ============================================================================
// JOURNEY PLANNER APP - NÚCLEO DE CLIENTE (RUST PURO)
// ============================================================================
// Capas:
// - Services: SOLO comunicación API (identidad, rutas, planificación, pagos)
// - State: State Management con Rc<RefCell>
// - ViewModels: lógica de los stores (sesión y rutas guardadas)
// - Router: tabla de rutas + guard puro
// Las vistas viven fuera de este crate y consumen el AppContext.
// ============================================================================

mod app;
mod error;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;

pub use app::AppContext;
pub use error::ApiError;
pub use models::{ApiEnvelope, JourneyData, SavedJourney, User};
pub use router::{resolve_navigation, NavigationDecision, Route};
pub use services::{
    get_journey_options, plan_journey, EmptyListFallback, FetchFallback, IdentityApi,
    IdentityService, NoFallback, PaymentService, RoutesService, SavedRoutesApi,
};
pub use state::{JourneysState, SessionState};
pub use utils::storage::{LocalStorageSlot, MemorySlot, SessionSlot};
pub use viewmodels::{AuthViewModel, JourneysViewModel};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

// Instancia única del contexto; el shell JS la alcanza via with_app
thread_local! {
    static APP: RefCell<Option<Rc<AppContext>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Journey Planner App - núcleo de cliente");

    let ctx = Rc::new(AppContext::new());
    APP.with(|cell| {
        *cell.borrow_mut() = Some(ctx.clone());
    });

    // Restaurar la sesión persistida antes de cualquier otra cosa
    wasm_bindgen_futures::spawn_local(async move {
        ctx.auth.init_auth().await;
        if ctx.auth.state().is_authenticated() {
            log::info!("✅ Sesión restaurada, precargando rutas guardadas...");
            ctx.journeys.fetch_saved_journeys().await;
        }
    });

    Ok(())
}

/// Acceso al contexto para el shell
pub fn with_app<R>(f: impl FnOnce(&AppContext) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow().as_ref().map(|ctx| f(ctx)))
}
