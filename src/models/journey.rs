use serde::{Deserialize, Serialize};

/// Trayecto guardado, con la forma que consume la UI.
/// El id lo asigna el servicio remoto; nunca se genera en cliente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJourney {
    pub id: i64,
    pub start_point: String,
    pub end_point: String,
    pub transport_mode: String,
    /// Minutos
    pub travel_time: u32,
    pub cost: f64,
    /// RFC 3339
    pub saved_at: String,
    pub route_name: String,
}

/// Resultado del planificador elegido por el usuario; entrada de saveJourney.
/// Viaja entero dentro del envelope route_data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyData {
    pub start_point: String,
    pub end_point: String,
    pub transport_mode: String,
    pub travel_time: u32,
    pub cost: f64,
    #[serde(default)]
    pub route_name: Option<String>,
}
