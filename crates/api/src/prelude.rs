//! Prelude module for convenient imports.

pub use crate::error::ApiError;
pub use crate::models::{
    BoundsResponse, CadenceInfo, HealthResponse, ParameterOverrides, SimulationRequest,
    SimulationResponse,
};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig};
pub use crate::state::AppState;
