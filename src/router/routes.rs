// ============================================================================
// ROUTES - Tabla de rutas de la SPA
// ============================================================================

/// Rutas de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    JourneyPlanner,
    SavedJourneys,
    Profile,
    PaymentSuccess,
    TestPayment,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::JourneyPlanner => "/journey-planner",
            Route::SavedJourneys => "/saved-journeys",
            Route::Profile => "/profile",
            Route::PaymentSuccess => "/payment-success",
            Route::TestPayment => "/test-payment",
        }
    }

    /// Resolver ruta a partir del path, ignorando la query string
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split('?').next().unwrap_or(path);
        match path {
            "" | "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/journey-planner" => Some(Route::JourneyPlanner),
            "/saved-journeys" => Some(Route::SavedJourneys),
            "/profile" => Some(Route::Profile),
            "/payment-success" => Some(Route::PaymentSuccess),
            "/test-payment" => Some(Route::TestPayment),
            _ => None,
        }
    }

    /// Solo accesible con sesión iniciada
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::JourneyPlanner
                | Route::SavedJourneys
                | Route::Profile
                | Route::PaymentSuccess
                | Route::TestPayment
        )
    }

    /// Solo accesible sin sesión (login/registro)
    pub fn requires_guest(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_ignores_query_string() {
        assert_eq!(
            Route::from_path("/journey-planner?origin=Orchard"),
            Some(Route::JourneyPlanner)
        );
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn auth_and_guest_meta_are_disjoint() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::JourneyPlanner,
            Route::SavedJourneys,
            Route::Profile,
            Route::PaymentSuccess,
            Route::TestPayment,
        ] {
            assert!(!(route.requires_auth() && route.requires_guest()));
        }
    }
}
