pub mod constants;
pub mod display_system;
pub mod errors;
pub mod gravity_system;
pub mod scenario;
pub mod telemetry_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;
pub use gravity_system::body::{Attractor, Body, PointMass};
pub use gravity_system::config::PhysicsConfig;
pub use gravity_system::orbits::{orbital_radius, orbital_velocity};
pub use gravity_system::simulation::{Simulation, UpdateScheme};
pub use gravity_system::trail::Trail;
pub use scenario::solar_system::{PlanetSpec, SolarSystemFactory, PLANETS};

// Re-export commonly used items from display_system
pub use display_system::color::Color;
pub use display_system::projection::{display_radius, to_display_coordinate, DisplayConfig};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::units::{convert_duration, time_rate_label, TimeUnit};
pub use utils::vector2d::Vector2D;
