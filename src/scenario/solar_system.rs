use crate::constants::{ASTRONOMICAL_UNIT, SUN_MASS, SUN_RADIUS};
use crate::display_system::color::{
    Color, BLUE, BROWN, DARK_BLUE, DARK_GREY, LIGHT_BLUE, LIGHT_BROWN, RED, WHITE, YELLOW,
};
use crate::errors::SimulationError;
use crate::gravity_system::body::Body;
use crate::gravity_system::config::PhysicsConfig;
use crate::gravity_system::orbits::orbital_velocity;
use crate::gravity_system::simulation::Simulation;
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub semi_major_axis: f64, // AU
    pub radius: f64,          // km
    pub color: Color,
    pub mass: f64, // kg
}

pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        name: "Mercury",
        semi_major_axis: 0.3877060531148948,
        radius: 2_440.0,
        color: DARK_GREY,
        mass: 3.29 * 1e23,
    },
    PlanetSpec {
        name: "Venus",
        semi_major_axis: 0.7184393701832681,
        radius: 6_052.0,
        color: WHITE,
        mass: 4.868 * 1e24,
    },
    PlanetSpec {
        name: "Earth",
        semi_major_axis: 1.0,
        radius: 6_378.0,
        color: BLUE,
        mass: 5.9736 * 1e24,
    },
    PlanetSpec {
        name: "Mars",
        semi_major_axis: 1.524,
        radius: 3_390.0,
        color: RED,
        mass: 6.4169 * 1e23,
    },
    PlanetSpec {
        name: "Jupiter",
        semi_major_axis: 5.204266587511253,
        radius: 69_911.0,
        color: BROWN,
        mass: 1.9 * 1e27,
    },
    PlanetSpec {
        name: "Saturn",
        semi_major_axis: 9.582017199702284,
        radius: 58_232.0,
        color: LIGHT_BROWN,
        mass: 5.68 * 1e26,
    },
    PlanetSpec {
        name: "Uranus",
        semi_major_axis: 19.191263797665282,
        radius: 25_362.0,
        color: LIGHT_BLUE,
        mass: 8.68 * 1e25,
    },
    PlanetSpec {
        name: "Neptune",
        semi_major_axis: 30.103661503993145,
        radius: 24_764.0,
        color: DARK_BLUE,
        mass: 1.02 * 1e26,
    },
];

pub struct SolarSystemFactory;

impl SolarSystemFactory {
    pub fn create_sun() -> Result<Body, SimulationError> {
        Ok(Body::new("Sun", Vector2D::ZERO, SUN_RADIUS, YELLOW, SUN_MASS)?.as_central())
    }

    /// Places the planet on the +x axis moving along +y at circular-orbit speed.
    pub fn create_planet(
        spec: &PlanetSpec,
        central_mass: f64,
        physics: &PhysicsConfig,
    ) -> Result<Body, SimulationError> {
        let distance = spec.semi_major_axis * ASTRONOMICAL_UNIT;
        let speed = orbital_velocity(
            physics.gravitational_constant(),
            central_mass,
            distance,
            distance,
        );

        Body::new(
            spec.name,
            Vector2D::new(distance, 0.0),
            spec.radius,
            spec.color,
            spec.mass,
        )?
        .with_velocity(Vector2D::new(0.0, speed))
    }

    pub fn create_solar_system(physics: PhysicsConfig) -> Result<Simulation, SimulationError> {
        let names: Vec<&str> = PLANETS.iter().map(|planet| planet.name).collect();
        Self::create_sun_with(&names, physics)
    }

    /// The Sun plus the named planets, in the order given.
    pub fn create_sun_with(
        planet_names: &[&str],
        physics: PhysicsConfig,
    ) -> Result<Simulation, SimulationError> {
        let sun = Self::create_sun()?;
        let sun_mass = sun.mass();
        let mut bodies = vec![sun];

        for name in planet_names {
            let spec = PLANETS
                .iter()
                .find(|planet| planet.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    SimulationError::InvalidConfiguration(format!("Unknown planet {}", name))
                })?;
            bodies.push(Self::create_planet(spec, sun_mass, &physics)?);
        }

        log::info!(
            "Built solar system: {}",
            bodies
                .iter()
                .map(Body::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Simulation::new(bodies, physics)
    }
}
