// ============================================================================
// SESSION STATE - Estado de la sesión autenticada
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;
use crate::utils::constants::STORAGE_KEY_USER;
use crate::utils::storage::{save_to_slot, SessionSlot};

/// Estado de sesión. `user` presente si y solo si el último login/restore
/// exitoso no ha sido invalidado por logout o revalidación fallida.
#[derive(Clone)]
pub struct SessionState {
    slot: Rc<dyn SessionSlot>,
    user: Rc<RefCell<Option<User>>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
}

impl SessionState {
    pub fn new(slot: Rc<dyn SessionSlot>) -> Self {
        Self {
            slot,
            user: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    /// Establecer usuario. Única escritura al slot persistido: se guarda al
    /// fijar un usuario y se borra al limpiarlo.
    pub fn set_user(&self, user: Option<User>) {
        match &user {
            Some(u) => {
                if let Err(e) = save_to_slot(self.slot.as_ref(), STORAGE_KEY_USER, u) {
                    log::error!("❌ Error guardando sesión en storage: {}", e);
                }
            }
            None => self.slot.delete(STORAGE_KEY_USER),
        }
        *self.user.borrow_mut() = user;
    }

    /// Obtener usuario
    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// true si hay sesión activa
    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
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

    /// Limpiar error
    pub fn clear_error(&self) {
        *self.error.borrow_mut() = None;
    }
}
