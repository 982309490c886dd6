use crate::display_system::color::Color;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

use super::config::PhysicsConfig;
use super::trail::Trail;

/// Anything that pulls on a body: a live `Body`, or a frozen `PointMass` copy of one.
pub trait Attractor {
    fn name(&self) -> &str;
    fn position(&self) -> Vector2D;
    fn mass(&self) -> f64;
    fn is_central(&self) -> bool;
}

/// Position and mass of a body at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMass {
    pub name: String,
    pub position: Vector2D,
    pub mass: f64,
    pub is_central: bool,
}

impl Attractor for PointMass {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vector2D {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn is_central(&self) -> bool {
        self.is_central
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    position: Vector2D,
    velocity: Vector2D,
    mass: f64,
    radius: f64,
    color: Color,
    is_central: bool,
    distance_to_central: f64,
    trail: Trail,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        position: Vector2D,
        radius: f64,
        color: Color,
        mass: f64,
    ) -> Result<Self, SimulationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SimulationError::InvalidConfiguration(
                "Body name must not be empty".to_string(),
            ));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Mass of {} must be positive, got {}",
                name, mass
            )));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Radius of {} must be non-negative, got {}",
                name, radius
            )));
        }
        if !position.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Position of {} must be finite",
                name
            )));
        }

        Ok(Body {
            name,
            position,
            velocity: Vector2D::ZERO,
            mass,
            radius,
            color,
            is_central: false,
            distance_to_central: 0.0,
            trail: Trail::new(),
        })
    }

    pub fn with_velocity(mut self, velocity: Vector2D) -> Result<Self, SimulationError> {
        if !velocity.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Velocity of {} must be finite",
                self.name
            )));
        }
        self.velocity = velocity;
        Ok(self)
    }

    /// Marks this body as the reference for every other body's distance readout.
    pub fn as_central(mut self) -> Self {
        self.is_central = true;
        self
    }

    pub fn with_trail_limit(mut self, limit: usize) -> Result<Self, SimulationError> {
        self.trail = Trail::with_capacity_limit(limit)?;
        Ok(self)
    }

    /// Gravitational pull of `other` on this body, in newtons.
    ///
    /// When `other` is the central body this also refreshes the cached
    /// distance used for display. Fails if the two bodies share a position.
    pub fn attraction<A>(
        &mut self,
        other: &A,
        gravitational_constant: f64,
    ) -> Result<Vector2D, SimulationError>
    where
        A: Attractor + ?Sized,
    {
        let displacement = other.position() - self.position;
        let distance = displacement.magnitude();

        if other.is_central() {
            self.distance_to_central = distance;
        }

        if distance == 0.0 {
            return Err(SimulationError::DegenerateGeometry(format!(
                "{} and {} occupy the same point",
                self.name,
                other.name()
            )));
        }

        let force = gravitational_constant * self.mass * other.mass() / distance.powi(2);
        let theta = displacement.angle();
        Ok(Vector2D::new(theta.cos() * force, theta.sin() * force))
    }

    /// Moves the body forward one time step under the pull of `others`.
    ///
    /// `others` must not contain this body. Forces are summed in iteration
    /// order, then velocity is updated before position (semi-implicit Euler).
    pub fn advance<'a, A, I>(
        &mut self,
        others: I,
        config: &PhysicsConfig,
    ) -> Result<(), SimulationError>
    where
        A: Attractor + 'a,
        I: IntoIterator<Item = &'a A>,
    {
        let mut total_force = Vector2D::ZERO;
        for other in others {
            total_force += self.attraction(other, config.gravitational_constant())?;
        }

        let dt = config.time_step();
        self.velocity += total_force / self.mass * dt;
        self.position += self.velocity * dt;
        self.trail.push(self.position);

        Ok(())
    }

    pub fn point_mass(&self) -> PointMass {
        PointMass {
            name: self.name.clone(),
            position: self.position,
            mass: self.mass,
            is_central: self.is_central,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_central(&self) -> bool {
        self.is_central
    }

    /// Last distance measured to the central body, or 0 before the first tick.
    pub fn distance_to_central(&self) -> f64 {
        self.distance_to_central
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

impl Attractor for Body {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vector2D {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn is_central(&self) -> bool {
        self.is_central
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ASTRONOMICAL_UNIT, GRAVITATIONAL_CONSTANT};
    use crate::display_system::color::{BLUE, WHITE, YELLOW};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn create_sun() -> Body {
        Body::new("Sun", Vector2D::ZERO, 695_660.0, YELLOW, 1.9885e30)
            .unwrap()
            .as_central()
    }

    fn create_earth() -> Body {
        Body::new(
            "Earth",
            Vector2D::new(ASTRONOMICAL_UNIT, 0.0),
            6_378.0,
            BLUE,
            5.9736e24,
        )
        .unwrap()
    }

    #[test]
    fn test_body_rejects_invalid_parameters() {
        assert!(Body::new("Rock", Vector2D::ZERO, 1.0, WHITE, 0.0).is_err());
        assert!(Body::new("Rock", Vector2D::ZERO, 1.0, WHITE, -5.0).is_err());
        assert!(Body::new("Rock", Vector2D::ZERO, 1.0, WHITE, f64::NAN).is_err());
        assert!(Body::new("Rock", Vector2D::ZERO, -1.0, WHITE, 5.0).is_err());
        assert!(Body::new("", Vector2D::ZERO, 1.0, WHITE, 5.0).is_err());
        assert!(Body::new("Rock", Vector2D::new(f64::INFINITY, 0.0), 1.0, WHITE, 5.0).is_err());
    }

    #[test]
    fn test_velocity_must_be_finite() {
        let rock = || Body::new("Rock", Vector2D::ZERO, 1.0, WHITE, 5.0).unwrap();

        assert!(matches!(
            rock().with_velocity(Vector2D::new(f64::NAN, 0.0)),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        assert!(rock()
            .with_velocity(Vector2D::new(0.0, f64::NEG_INFINITY))
            .is_err());

        let moving = rock().with_velocity(Vector2D::new(3.0, -4.0)).unwrap();
        assert_eq!(moving.velocity(), Vector2D::new(3.0, -4.0));
    }

    #[test]
    fn test_sun_earth_attraction_magnitude() {
        let mut earth = create_earth();
        let sun = create_sun();

        let force = earth.attraction(&sun, GRAVITATIONAL_CONSTANT).unwrap();
        let expected =
            GRAVITATIONAL_CONSTANT * 1.9885e30 * 5.9736e24 / ASTRONOMICAL_UNIT.powi(2);

        assert_relative_eq!(force.magnitude(), expected, max_relative = 1e-12);
        // Pulled towards the sun, along -x
        assert!(force.x < 0.0);
        assert_relative_eq!(force.y, 0.0, epsilon = expected * 1e-12);
    }

    #[test]
    fn test_attraction_updates_distance_to_central_only() {
        let mut earth = create_earth();
        let mut sun = create_sun();
        let moon = Body::new(
            "Moon",
            Vector2D::new(ASTRONOMICAL_UNIT + 384_400_000.0, 0.0),
            1_737.0,
            WHITE,
            7.342e22,
        )
        .unwrap();

        earth.attraction(&moon, GRAVITATIONAL_CONSTANT).unwrap();
        assert_eq!(earth.distance_to_central(), 0.0);

        earth.attraction(&sun, GRAVITATIONAL_CONSTANT).unwrap();
        assert_eq!(earth.distance_to_central(), ASTRONOMICAL_UNIT);

        sun.attraction(&earth, GRAVITATIONAL_CONSTANT).unwrap();
        assert_eq!(sun.distance_to_central(), 0.0);
        assert_eq!(earth.position(), Vector2D::new(ASTRONOMICAL_UNIT, 0.0));
        assert_eq!(earth.velocity(), Vector2D::ZERO);
    }

    #[test]
    fn test_attraction_is_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let mut a = Body::new(
                "A",
                Vector2D::new(rng.gen_range(-1e12..1e12), rng.gen_range(-1e12..1e12)),
                1.0,
                WHITE,
                rng.gen_range(1e20..1e30),
            )
            .unwrap();
            let mut b = Body::new(
                "B",
                Vector2D::new(rng.gen_range(-1e12..1e12), rng.gen_range(-1e12..1e12)),
                1.0,
                WHITE,
                rng.gen_range(1e20..1e30),
            )
            .unwrap();

            let on_a = a.attraction(&b, GRAVITATIONAL_CONSTANT).unwrap();
            let on_b = b.attraction(&a, GRAVITATIONAL_CONSTANT).unwrap();

            assert_relative_eq!(on_a.magnitude(), on_b.magnitude(), max_relative = 1e-12);
            let sum = on_a + on_b;
            assert!(
                sum.magnitude() <= on_a.magnitude() * 1e-12,
                "Forces should cancel, residual {} for magnitude {}",
                sum.magnitude(),
                on_a.magnitude()
            );
        }
    }

    #[test]
    fn test_coincident_bodies_are_degenerate() {
        let mut a = Body::new("A", Vector2D::new(5.0, 5.0), 1.0, WHITE, 1.0).unwrap();
        let b = Body::new("B", Vector2D::new(5.0, 5.0), 1.0, WHITE, 1.0).unwrap();

        assert!(matches!(
            a.attraction(&b, GRAVITATIONAL_CONSTANT),
            Err(SimulationError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_advance_updates_velocity_before_position() {
        let config = PhysicsConfig::new(1.0, 2.0).unwrap();
        let mut a = Body::new("A", Vector2D::ZERO, 1.0, WHITE, 1.0)
            .unwrap()
            .with_velocity(Vector2D::new(0.0, 1.0))
            .unwrap();
        let b = Body::new("B", Vector2D::new(2.0, 0.0), 1.0, WHITE, 4.0).unwrap();

        a.advance([&b], &config).unwrap();

        // F = 1 * 1 * 4 / 2^2 = 1 along +x, so v = (0, 1) + (1 / 1) * 2 = (2, 1)
        assert_relative_eq!(a.velocity().x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(a.velocity().y, 1.0, epsilon = 1e-12);
        // x uses the new velocity: (0, 0) + (2, 1) * 2
        assert_relative_eq!(a.position().x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(a.position().y, 2.0, epsilon = 1e-12);
        assert_eq!(a.trail().len(), 1);
        assert_eq!(a.trail().last(), Some(&a.position()));
    }

    #[test]
    fn test_advance_without_others_drifts() {
        let config = PhysicsConfig::new(1.0, 0.5).unwrap();
        let mut lonely = Body::new("Lonely", Vector2D::ZERO, 1.0, WHITE, 1.0)
            .unwrap()
            .with_velocity(Vector2D::new(4.0, -2.0))
            .unwrap();

        lonely
            .advance(std::iter::empty::<&PointMass>(), &config)
            .unwrap();

        assert_eq!(lonely.velocity(), Vector2D::new(4.0, -2.0));
        assert_eq!(lonely.position(), Vector2D::new(2.0, -1.0));
    }

    #[test]
    fn test_point_mass_mirrors_body() {
        let sun = create_sun();
        let snapshot = sun.point_mass();
        assert_eq!(snapshot.name(), "Sun");
        assert_eq!(snapshot.position(), sun.position());
        assert_eq!(snapshot.mass(), sun.mass());
        assert!(snapshot.is_central());
    }
}
