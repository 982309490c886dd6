use std::collections::VecDeque;

use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

/// Chronological history of a body's positions, one entry per tick.
///
/// Unbounded by default. With a limit set, the oldest entry is dropped once
/// the trail is full, so it always holds the most recent part of the orbit.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vector2D>,
    limit: Option<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Trail::default()
    }

    pub fn with_capacity_limit(limit: usize) -> Result<Self, SimulationError> {
        if limit == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "Trail limit must be at least one point".to_string(),
            ));
        }
        Ok(Trail {
            points: VecDeque::with_capacity(limit),
            limit: Some(limit),
        })
    }

    pub fn push(&mut self, point: Vector2D) {
        if let Some(limit) = self.limit {
            if self.points.len() == limit {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    /// Oldest first. Each call starts again from the beginning.
    pub fn iter(&self) -> impl Iterator<Item = &Vector2D> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&Vector2D> {
        self.points.back()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Vector2D;
    type IntoIter = std::collections::vec_deque::Iter<'a, Vector2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
