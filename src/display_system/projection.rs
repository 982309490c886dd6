use crate::constants::{
    ASTRONOMICAL_UNIT, DEFAULT_ZOOM, VIEWPORT_HEIGHT, VIEWPORT_WIDTH, ZOOM_FACTOR,
};
use crate::errors::SimulationError;
use crate::gravity_system::body::Body;
use crate::gravity_system::trail::Trail;
use crate::utils::vector2d::Vector2D;

/// Maps a physical position to screen space.
pub fn to_display_coordinate(position: Vector2D, scale: f64, viewport_center: Vector2D) -> Vector2D {
    position * scale + viewport_center
}

pub fn display_radius(radius: f64, reference_unit: f64, scale: f64) -> f64 {
    radius / reference_unit * scale
}

/// Presentation state: zoom level and where the origin sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    zoom: f64,
    reference_unit: f64,
    viewport_center: Vector2D,
}

impl DisplayConfig {
    pub fn new(viewport_center: Vector2D) -> Self {
        DisplayConfig {
            zoom: DEFAULT_ZOOM,
            reference_unit: ASTRONOMICAL_UNIT,
            viewport_center,
        }
    }

    pub fn with_zoom(mut self, zoom: f64) -> Result<Self, SimulationError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Zoom must be positive, got {}",
                zoom
            )));
        }
        self.zoom = zoom;
        Ok(self)
    }

    pub fn with_reference_unit(mut self, reference_unit: f64) -> Result<Self, SimulationError> {
        if !(reference_unit.is_finite() && reference_unit > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Reference unit must be positive, got {}",
                reference_unit
            )));
        }
        self.reference_unit = reference_unit;
        Ok(self)
    }

    pub fn zoom_in(&mut self) {
        self.zoom *= ZOOM_FACTOR;
    }

    pub fn zoom_out(&mut self) {
        self.zoom /= ZOOM_FACTOR;
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Screen units per physical metre.
    pub fn scale(&self) -> f64 {
        self.zoom / self.reference_unit
    }

    pub fn viewport_center(&self) -> Vector2D {
        self.viewport_center
    }

    pub fn project(&self, position: Vector2D) -> Vector2D {
        to_display_coordinate(position, self.scale(), self.viewport_center)
    }

    pub fn body_position(&self, body: &Body) -> Vector2D {
        self.project(body.position())
    }

    pub fn body_radius(&self, body: &Body) -> f64 {
        display_radius(body.radius(), self.reference_unit, self.scale())
    }

    /// The trail as a screen-space polyline. Needs more than two points.
    pub fn project_trail(&self, trail: &Trail) -> Option<Vec<Vector2D>> {
        if trail.len() <= 2 {
            return None;
        }
        Some(trail.iter().map(|point| self.project(*point)).collect())
    }

    /// Distance readout drawn on every body except the central one.
    pub fn distance_label(&self, body: &Body) -> Option<String> {
        if body.is_central() {
            return None;
        }
        Some(format!("{:.1}km", body.distance_to_central() / 1000.0))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig::new(Vector2D::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0))
    }
}
