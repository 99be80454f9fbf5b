pub mod parameter_bounds;
pub mod price_path;
pub mod simulation_parameters;

pub use parameter_bounds::{ParameterBounds, ValueRange};
pub use price_path::PricePath;
pub use simulation_parameters::SimulationParameters;
