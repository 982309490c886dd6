use crate::constants::{GRAVITATIONAL_CONSTANT, TIME_STEP};
use crate::errors::SimulationError;

/// Constants shared by every body in a simulation. Display settings live in
/// `DisplayConfig` and never reach the force or integration code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    gravitational_constant: f64,
    time_step: f64,
}

impl PhysicsConfig {
    pub fn new(gravitational_constant: f64, time_step: f64) -> Result<Self, SimulationError> {
        if !(gravitational_constant.is_finite() && gravitational_constant > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Gravitational constant must be positive, got {}",
                gravitational_constant
            )));
        }
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Time step must be positive, got {}",
                time_step
            )));
        }

        Ok(PhysicsConfig {
            gravitational_constant,
            time_step,
        })
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            time_step: TIME_STEP,
        }
    }
}
