use serde::{Deserialize, Serialize};

/// Registro de identidad que devuelve el servicio de usuarios.
/// El wire usa PascalCase; solo UserId es obligatorio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserId")]
    pub user_id: i64,
    #[serde(rename = "FullName", default)]
    pub full_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
}
