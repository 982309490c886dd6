use crate::errors::SimulationError;

use super::body::{Body, PointMass};
use super::config::PhysicsConfig;

/// How bodies see each other within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateScheme {
    /// Bodies are advanced in collection order and each one sees the
    /// positions earlier bodies already reached during this tick.
    #[default]
    GaussSeidel,
    /// Every body is advanced against the positions from before the tick.
    /// Trajectories differ slightly from `GaussSeidel`.
    Jacobi,
}

pub struct Simulation {
    bodies: Vec<Body>,
    physics: PhysicsConfig,
    scheme: UpdateScheme,
    elapsed_time: f64,
    ticks: u64,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>, physics: PhysicsConfig) -> Result<Self, SimulationError> {
        let central_count = bodies.iter().filter(|body| body.is_central()).count();
        if central_count > 1 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "At most one central body is allowed, got {}",
                central_count
            )));
        }

        for (index, body) in bodies.iter().enumerate() {
            for other in &bodies[index + 1..] {
                if body.name() == other.name() {
                    return Err(SimulationError::InvalidConfiguration(format!(
                        "Duplicate body name {}",
                        body.name()
                    )));
                }
                if body.position() == other.position() {
                    return Err(SimulationError::DegenerateGeometry(format!(
                        "{} and {} start at the same point",
                        body.name(),
                        other.name()
                    )));
                }
            }
        }

        log::info!(
            "Simulation created with {} bodies, G = {:e}, dt = {} s",
            bodies.len(),
            physics.gravitational_constant(),
            physics.time_step()
        );

        Ok(Simulation {
            bodies,
            physics,
            scheme: UpdateScheme::default(),
            elapsed_time: 0.0,
            ticks: 0,
        })
    }

    pub fn with_scheme(mut self, scheme: UpdateScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Advances every body by one time step.
    ///
    /// On error the tick is abandoned part way: bodies before the failing one
    /// have already moved and the clock is not advanced.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let result = match self.scheme {
            UpdateScheme::GaussSeidel => self.step_gauss_seidel(),
            UpdateScheme::Jacobi => self.step_jacobi(),
        };

        if let Err(err) = result {
            log::warn!("Tick {} failed: {}", self.ticks + 1, err);
            return Err(err);
        }

        self.ticks += 1;
        self.elapsed_time += self.physics.time_step();
        log::debug!(
            "Tick {} complete, simulated time {} s",
            self.ticks,
            self.elapsed_time
        );
        Ok(())
    }

    pub fn run(&mut self, ticks: u64) -> Result<(), SimulationError> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(())
    }

    fn step_gauss_seidel(&mut self) -> Result<(), SimulationError> {
        for index in 0..self.bodies.len() {
            let (before, rest) = self.bodies.split_at_mut(index);
            let Some((body, after)) = rest.split_first_mut() else {
                break;
            };
            body.advance(before.iter().chain(after.iter()), &self.physics)?;
        }
        Ok(())
    }

    fn step_jacobi(&mut self) -> Result<(), SimulationError> {
        let snapshot: Vec<PointMass> = self.bodies.iter().map(Body::point_mass).collect();

        for (index, body) in self.bodies.iter_mut().enumerate() {
            let others = snapshot
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, point)| point);
            body.advance(others, &self.physics)?;
        }
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name() == name)
    }

    pub fn central_body(&self) -> Option<&Body> {
        self.bodies.iter().find(|body| body.is_central())
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn scheme(&self) -> UpdateScheme {
        self.scheme
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
