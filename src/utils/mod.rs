// Utils compartidos

pub mod constants;
pub mod storage;

pub use constants::*;
pub use storage::{save_to_slot, LocalStorageSlot, MemorySlot, SessionSlot};
