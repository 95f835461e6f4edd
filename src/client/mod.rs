pub mod error;
pub mod models;
pub mod omnidim;

pub use error::ApiError;
pub use models::{AgentPage, AgentSummary, CreatedAgent};
pub use omnidim::{OmnidimClient, DEFAULT_BASE_URL};
