// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod journeys_state;
pub mod session_state;

pub use journeys_state::JourneysState;
pub use session_state::SessionState;
