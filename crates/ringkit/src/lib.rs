pub mod geometry;
pub mod macros;
pub mod ring;

pub use geometry::{Bounds, Point, Size};
pub use ring::{ConcentricRings, Ring, RingError, RingProvider};
