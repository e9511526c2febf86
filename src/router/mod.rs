pub mod guard;
pub mod routes;

pub use guard::{resolve_navigation, NavigationDecision};
pub use routes::Route;
