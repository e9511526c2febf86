// ============================================================================
// GUARD - Guard de navegación
// ============================================================================

use crate::router::routes::Route;

/// Decisión del guard para una navegación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Continuar a la ruta pedida
    Proceed,
    /// Sin sesión en una ruta protegida: a login, recordando el destino
    RedirectToLogin { redirect: String },
    /// Con sesión en una ruta de invitado: a la vista por defecto
    RedirectToPlanner,
}

/// Se ejecuta síncronamente antes de cada navegación. Función pura: solo
/// inspecciona el flag de sesión ya resuelto en memoria, nunca toca la red.
pub fn resolve_navigation(
    target: Route,
    requested_path: &str,
    is_authenticated: bool,
) -> NavigationDecision {
    if target.requires_auth() && !is_authenticated {
        return NavigationDecision::RedirectToLogin {
            redirect: requested_path.to_string(),
        };
    }

    if target.requires_guest() && is_authenticated {
        return NavigationDecision::RedirectToPlanner;
    }

    NavigationDecision::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_route_without_session_redirects_to_login_with_path() {
        let decision = resolve_navigation(Route::SavedJourneys, "/saved-journeys", false);
        assert_eq!(
            decision,
            NavigationDecision::RedirectToLogin {
                redirect: "/saved-journeys".to_string()
            }
        );
    }

    #[test]
    fn redirect_keeps_full_path_with_query() {
        let decision =
            resolve_navigation(Route::JourneyPlanner, "/journey-planner?origin=Orchard", false);
        assert_eq!(
            decision,
            NavigationDecision::RedirectToLogin {
                redirect: "/journey-planner?origin=Orchard".to_string()
            }
        );
    }

    #[test]
    fn guest_route_with_session_redirects_to_planner() {
        assert_eq!(
            resolve_navigation(Route::Login, "/login", true),
            NavigationDecision::RedirectToPlanner
        );
        assert_eq!(
            resolve_navigation(Route::Register, "/register", true),
            NavigationDecision::RedirectToPlanner
        );
    }

    #[test]
    fn everything_else_proceeds() {
        assert_eq!(
            resolve_navigation(Route::Home, "/", false),
            NavigationDecision::Proceed
        );
        assert_eq!(
            resolve_navigation(Route::Home, "/", true),
            NavigationDecision::Proceed
        );
        assert_eq!(
            resolve_navigation(Route::Login, "/login", false),
            NavigationDecision::Proceed
        );
        assert_eq!(
            resolve_navigation(Route::JourneyPlanner, "/journey-planner", true),
            NavigationDecision::Proceed
        );
    }
}
