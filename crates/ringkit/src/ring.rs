use crate::geometry::Point;
use thiserror::Error;

/// Snapshot of one concentric circle handed out by a [`RingProvider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub index: usize,
    pub origin: Point,
    pub radius: f64,
}

impl Ring {
    pub fn new(index: usize, origin: Point, radius: f64) -> Self {
        Self {
            index,
            origin,
            radius,
        }
    }
}

/// Source of ring geometry. Implementations own drawing and ripple effects; layout only
/// ever reads count, origin and radius.
pub trait RingProvider {
    fn ring_count(&self) -> usize;

    /// Ring at `index`, for `index < ring_count()`.
    fn ring(&self, index: usize) -> Ring;

    /// All rings in ascending index order.
    fn rings(&self) -> Vec<Ring> {
        (0..self.ring_count()).map(|i| self.ring(i)).collect()
    }
}

impl<P: RingProvider + ?Sized> RingProvider for Box<P> {
    fn ring_count(&self) -> usize {
        (**self).ring_count()
    }

    fn ring(&self, index: usize) -> Ring {
        (**self).ring(index)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RingError {
    #[error("Inner radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("Ring spacing must be non-negative and finite, got {0}")]
    InvalidSpacing(f64),
}

/// Evenly spaced rings around a shared center. Ring `i` has radius
/// `inner_radius + i * spacing`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentricRings {
    center: Point,
    inner_radius: f64,
    spacing: f64,
    count: usize,
}

impl ConcentricRings {
    pub fn new(
        center: Point,
        count: usize,
        inner_radius: f64,
        spacing: f64,
    ) -> Result<Self, RingError> {
        if !(inner_radius.is_finite() && inner_radius > 0.0) {
            return Err(RingError::InvalidRadius(inner_radius));
        }
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(RingError::InvalidSpacing(spacing));
        }

        Ok(Self {
            center,
            inner_radius,
            spacing,
            count,
        })
    }
}

impl RingProvider for ConcentricRings {
    fn ring_count(&self) -> usize {
        self.count
    }

    fn ring(&self, index: usize) -> Ring {
        Ring::new(
            index,
            self.center,
            self.inner_radius + index as f64 * self.spacing,
        )
    }
}
