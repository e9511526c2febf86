pub mod auth_viewmodel;
pub mod journeys_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use journeys_viewmodel::JourneysViewModel;
