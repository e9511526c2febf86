/// URLs base de los microservicios.
/// Configuradas en tiempo de compilación (ver build.rs):
/// - Desarrollo: localhost con los puertos por defecto
/// - Producción: via .env / variables de entorno
pub const USER_API_URL: &str = match option_env!("USER_API_URL") {
    Some(url) => url,
    None => "http://localhost:5201",
};

/// Servicio composite de trayectos y rutas guardadas
pub const COMPOSITE_API_URL: &str = match option_env!("COMPOSITE_API_URL") {
    Some(url) => url,
    None => "http://localhost:5004",
};

/// Servicio atómico de rutas guardadas (fallback de delete)
pub const SAVED_ROUTES_API_URL: &str = match option_env!("SAVED_ROUTES_API_URL") {
    Some(url) => url,
    None => "http://localhost:5006",
};

/// Servicio composite plan_journey
pub const PLAN_JOURNEY_API_URL: &str = match option_env!("PLAN_JOURNEY_API_URL") {
    Some(url) => url,
    None => "http://localhost:5031",
};

/// Servicio selectedRoute (lectura y borrado directos)
pub const SELECTED_ROUTE_API_URL: &str = match option_env!("SELECTED_ROUTE_API_URL") {
    Some(url) => url,
    None => "http://localhost:5301",
};

/// Relay de pagos (proceso aparte)
pub const PAYMENT_API_URL: &str = match option_env!("PAYMENT_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Si está definida en compilación, el fetch de rutas guardadas degrada a
/// lista vacía cuando el servicio no responde. Nunca definir en producción.
pub const DEV_FETCH_FALLBACK: Option<&str> = option_env!("DEV_FETCH_FALLBACK");

/// Clave del slot de sesión persistido
pub const STORAGE_KEY_USER: &str = "user";
