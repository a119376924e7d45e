use cgmath::{Vector2, vec2};

/// Mapping between pixel coordinates of a drawing surface and the world plane
/// the simulation runs in.
///
/// The world view is a rectangle given by its `center` and `size`. A negative
/// `size.y` flips the vertical axis, so world y grows upward while pixel y
/// grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPlane {
    center: Vector2<f64>,
    size: Vector2<f64>,
    target: Vector2<f64>,
}

impl CartesianPlane {
    /// World plane for a `width`×`height` surface, origin at its visual
    /// center and one world unit per pixel.
    pub fn for_surface(width: f64, height: f64) -> Self {
        Self {
            center: vec2(0.0, 0.0),
            size: vec2(width, -height),
            target: vec2(width, height),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        *self = Self {
            center: self.center,
            ..Self::for_surface(width, height)
        };
    }

    pub fn surface_size(&self) -> Vector2<f64> {
        self.target
    }

    /// Pixel at the visual center of the surface.
    pub fn surface_center(&self) -> Vector2<f64> {
        self.target * 0.5
    }

    pub fn map_pixel_to_coords(&self, pixel: Vector2<f64>) -> Vector2<f64> {
        vec2(
            self.center.x + (pixel.x / self.target.x - 0.5) * self.size.x,
            self.center.y + (pixel.y / self.target.y - 0.5) * self.size.y,
        )
    }

    pub fn map_coords_to_pixel(&self, coords: Vector2<f64>) -> Vector2<f64> {
        vec2(
            ((coords.x - self.center.x) / self.size.x + 0.5) * self.target.x,
            ((coords.y - self.center.y) / self.size.y + 0.5) * self.target.y,
        )
    }
}
