//! Pan/zoom camera and projection of the render surface into world space.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};
use crate::geom::{Point, Rect};

/// Camera state reported by the renderer.
///
/// `pan_x` / `pan_y` are the screen-pixel offset of the world origin.
/// `zoom` is a scale factor (1.0 = one world unit per pixel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// A camera at the given pan with zoom clamped to the supported range.
    #[must_use]
    pub fn with_zoom(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self { pan_x, pan_y, zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM) }
    }

    /// Convert a screen-space point (pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.pan_x) / self.zoom, y: (screen.y - self.pan_y) / self.zoom }
    }

    /// Convert a world-space point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point { x: world.x * self.zoom + self.pan_x, y: world.y * self.zoom + self.pan_y }
    }
}

/// The active render surface: its pixel size and the camera drawing into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSurface {
    pub width_px: f64,
    pub height_px: f64,
    pub camera: Camera,
}

impl RenderSurface {
    #[must_use]
    pub fn new(width_px: f64, height_px: f64, camera: Camera) -> Self {
        Self { width_px, height_px, camera }
    }

    /// World-space rectangle covered by the whole surface.
    ///
    /// A zoom that is not a positive finite scale projects nothing, like a
    /// missing surface.
    #[must_use]
    pub fn world_viewport(&self) -> Rect {
        if self.camera.zoom <= 0.0 || !self.camera.zoom.is_finite() {
            return Rect::EMPTY;
        }
        let top_left = self.camera.screen_to_world(Point::ORIGIN);
        let bottom_right = self.camera.screen_to_world(Point::new(self.width_px, self.height_px));
        Rect::from_corners(top_left, bottom_right)
    }
}

/// Viewport for the current frame. No surface means nothing is on screen.
#[must_use]
pub fn viewport(surface: Option<&RenderSurface>) -> Rect {
    surface.map_or(Rect::EMPTY, RenderSurface::world_viewport)
}
