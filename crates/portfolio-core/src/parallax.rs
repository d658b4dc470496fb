//! Parallax for the hero's floating shapes.

use crate::config::ParallaxConfig;

/// Scroll speed multiplier for the shape at `index` (document order).
pub fn shape_speed(index: usize, config: &ParallaxConfig) -> f64 {
    config.base_speed + config.speed_step * index as f64
}

/// Vertical translation of the shape at `index`, in pixels.
pub fn shape_offset(index: usize, scroll_y: f64, config: &ParallaxConfig) -> f64 {
    scroll_y * shape_speed(index, config)
}

/// Inline `transform` for the shape at `index`.
pub fn shape_transform(index: usize, scroll_y: f64, config: &ParallaxConfig) -> String {
    format!("translateY({}px)", shape_offset(index, scroll_y, config))
}
