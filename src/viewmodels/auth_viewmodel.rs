// ============================================================================
// AUTH VIEWMODEL - Sesión y autenticación
// ============================================================================
// Lógica de negocio sobre el servicio de identidad. El estado observable
// vive en SessionState; aquí solo se orquesta.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::User;
use crate::services::IdentityApi;
use crate::state::SessionState;
use crate::utils::constants::STORAGE_KEY_USER;
use crate::utils::storage::SessionSlot;

/// ViewModel de autenticación
pub struct AuthViewModel {
    identity: Rc<dyn IdentityApi>,
    slot: Rc<dyn SessionSlot>,
    state: SessionState,
}

impl AuthViewModel {
    pub fn new(identity: Rc<dyn IdentityApi>, slot: Rc<dyn SessionSlot>) -> Self {
        let state = SessionState::new(slot.clone());
        Self {
            identity,
            slot,
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Crear cuenta nueva. No toca la sesión actual.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<User, ApiError> {
        self.state.set_loading(true);
        self.state.clear_error();

        let result = async {
            let envelope = self
                .identity
                .register(full_name, email, password, phone)
                .await?;
            envelope.into_data(201)
        }
        .await;

        match &result {
            Ok(user) => log::info!("✅ Registro exitoso: {}", user.full_name),
            Err(e) => {
                log::error!("❌ Error en registro: {}", e);
                self.state
                    .set_error(Some(e.business_message("Registration failed")));
            }
        }

        self.state.set_loading(false);
        result
    }

    /// Login contra el servicio de identidad. En éxito fija el usuario
    /// (write-through al slot persistido); en fallo la sesión no se toca.
    pub async fn login(&self, full_name: &str, password: &str) -> Result<User, ApiError> {
        self.state.set_loading(true);
        self.state.clear_error();

        let result = async {
            let envelope = self.identity.authenticate(full_name, password).await?;
            envelope.into_data(200)
        }
        .await;

        match &result {
            Ok(user) => {
                log::info!("✅ Login exitoso: {}", user.full_name);
                self.state.set_user(Some(user.clone()));
            }
            Err(e) => {
                log::error!("❌ Login fallido: {}", e);
                self.state.set_error(Some(e.business_message("Login failed")));
            }
        }

        self.state.set_loading(false);
        result
    }

    /// Logout: limpia usuario y slot persistido. Sin llamada remota.
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.state.set_user(None);
        // Asegurar que el slot queda limpio
        self.slot.delete(STORAGE_KEY_USER);
    }

    /// Restaurar la sesión persistida al arrancar. Un valor corrupto se
    /// descarta en silencio (queda en el log, no se propaga).
    pub async fn init_auth(&self) {
        let raw = match self.slot.read(STORAGE_KEY_USER) {
            Some(raw) => raw,
            None => return,
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                log::info!("💾 Sesión encontrada en storage, restaurando: {}", user.full_name);
                self.state.set_user(Some(user));
                // Verificar contra el servicio que el usuario sigue existiendo
                self.check_auth_state().await;
            }
            Err(e) => {
                log::error!("❌ Error parseando sesión persistida: {}", e);
                self.slot.delete(STORAGE_KEY_USER);
            }
        }
    }

    /// Revalidar la sesión contra el servicio de identidad. Cualquier
    /// respuesta no exitosa (incluido fallo de red) invalida la sesión;
    /// nunca se reintenta.
    pub async fn check_auth_state(&self) {
        let user = match self.state.get_user() {
            Some(user) => user,
            None => return,
        };

        match self.identity.get_user(user.user_id).await {
            Ok(envelope) if envelope.code == 200 => {}
            Ok(envelope) => {
                log::warn!(
                    "⚠️ Revalidación rechazada (code {}), cerrando sesión",
                    envelope.code
                );
                self.state.set_user(None);
            }
            Err(e) => {
                log::warn!("⚠️ Revalidación fallida ({}), cerrando sesión", e);
                self.state.set_user(None);
            }
        }
    }
}
