pub mod api;
pub mod journey;
pub mod payment;
pub mod user;

pub use api::ApiEnvelope;
pub use journey::{JourneyData, SavedJourney};
pub use payment::{PaymentIntentRequest, PaymentIntentResponse};
pub use user::User;
