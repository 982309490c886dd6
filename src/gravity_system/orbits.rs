/// Mean orbital radius from the farthest and closest distances to the central body.
pub fn orbital_radius(aphelion: f64, perihelion: f64) -> f64 {
    0.5 * (aphelion + perihelion)
}

/// Speed for a circular orbit at the mean radius of the given ellipse.
pub fn orbital_velocity(
    gravitational_constant: f64,
    central_mass: f64,
    aphelion: f64,
    perihelion: f64,
) -> f64 {
    (gravitational_constant * central_mass / orbital_radius(aphelion, perihelion)).sqrt()
}
