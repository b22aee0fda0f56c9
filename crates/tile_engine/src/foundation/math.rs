//! Math utilities and types
//!
//! Provides the 2D vector type used for positions and displacements, in
//! screen space: X grows to the right and Y grows downward.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Integer 2D point, e.g. a pixel or a mouse coordinate
pub type Point2 = Vector2<i32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;
}

/// Math utility functions
pub mod utils {
    use super::{Point2, Vec2};

    /// Round to a fixed number of decimal places
    ///
    /// Midpoints round to the even neighbour so repeated per-tick rounding
    /// does not drift in one direction.
    pub fn round_to(value: f32, decimals: i32) -> f32 {
        let scale = 10f64.powi(decimals);
        ((f64::from(value) * scale).round_ties_even() / scale) as f32
    }

    /// Convert an integer point into a float vector
    pub fn point_to_vec(point: Point2) -> Vec2 {
        Vec2::new(point.x as f32, point.y as f32)
    }
}
