//! The fixed triangle and its shader pair.

use glam::Vec2;

pub const TRIANGLE: [Vec2; 3] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.0, 0.5),
    Vec2::new(0.5, -0.5),
];

/// Passes `position` (location 0) straight through.
pub const VERTEX_SHADER_SOURCE: &str = include_str!("../shaders/triangle.vert");

/// Writes opaque red to output location 0.
pub const FRAGMENT_SHADER_SOURCE: &str = include_str!("../shaders/triangle.frag");
