use crate::render::RenderSurface;

use super::ViewportManager;

impl<S: RenderSurface> ViewportManager<S> {
    /// Maps a data-space point to pixel space.
    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        self.transform.to_pixel(x, y)
    }

    /// Maps a pixel-space point back to data space; exact inverse of `to_pixel`.
    #[must_use]
    pub fn to_data(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        self.transform.to_data(pixel_x, pixel_y)
    }

    /// Whether a pixel lies inside the plotting rectangle, edges included.
    #[must_use]
    pub fn contains_pixel(&self, pixel_x: f64, pixel_y: f64) -> bool {
        let rect = self.rect();
        (rect.left..=rect.right()).contains(&pixel_x) && (rect.top()..=rect.bottom).contains(&pixel_y)
    }
}
