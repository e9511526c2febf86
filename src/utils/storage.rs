// ============================================================================
// STORAGE - Slot de sesión persistido
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use web_sys::{window, Storage};

/// Slot de sesión: lectura/escritura/borrado síncronos de un valor serializado
/// bajo una clave. Un único slot compartido por todo el proceso: el logout en
/// un contexto invalida la sesión en todos los que comparten el storage.
pub trait SessionSlot {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
    fn delete(&self, key: &str);
}

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Slot real sobre localStorage
pub struct LocalStorageSlot;

impl SessionSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> Option<String> {
        let storage = get_local_storage()?;
        storage.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Slot en memoria, para tests y entornos sin localStorage
#[derive(Default)]
pub struct MemorySlot {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for MemorySlot {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Serializar y guardar un valor en el slot
pub fn save_to_slot<T: Serialize>(slot: &dyn SessionSlot, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Error serializando datos: {}", e))?;
    slot.write(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_roundtrip() {
        let slot = MemorySlot::new();
        assert!(slot.read("user").is_none());

        slot.write("user", "{\"UserId\":1}").unwrap();
        assert_eq!(slot.read("user").as_deref(), Some("{\"UserId\":1}"));

        slot.delete("user");
        assert!(slot.read("user").is_none());
    }

    #[test]
    fn save_to_slot_writes_json() {
        let slot = MemorySlot::new();
        save_to_slot(&slot, "k", &vec![1, 2, 3]).unwrap();
        assert_eq!(slot.read("k").as_deref(), Some("[1,2,3]"));
    }
}
