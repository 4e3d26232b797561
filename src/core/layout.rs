use crate::core::types::ViewportRect;

/// Centers of `count` equal slots across `[start, start + span]`.
///
/// Slot `i` is centered at `start + span * (i + 0.5) / count`.
#[must_use]
pub fn category_centers(start: f64, span: f64, count: usize) -> Vec<f64> {
    let slot = span / count as f64;
    (0..count)
        .map(|i| start + (i as f64 + 0.5) * slot)
        .collect()
}

/// Pixel X centers for vertical bars, left to right.
#[must_use]
pub fn vertical_bar_slots(rect: ViewportRect, count: usize) -> Vec<f64> {
    category_centers(rect.left, rect.width, count)
}

/// Pixel Y centers for horizontal bars, top to bottom.
#[must_use]
pub fn horizontal_bar_slots(rect: ViewportRect, count: usize) -> Vec<f64> {
    category_centers(rect.top(), rect.height, count)
}

/// Stroke width of a horizontal bar; the 1.5 divisor leaves a gap between bars.
#[must_use]
pub fn horizontal_bar_thickness(rect: ViewportRect, count: usize) -> f64 {
    rect.height / (count.max(1) as f64 * 1.5)
}

#[must_use]
pub fn vertical_bar_thickness(rect: ViewportRect, count: usize) -> f64 {
    rect.width / (count as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::{category_centers, horizontal_bar_slots, vertical_bar_slots};
    use crate::core::ViewportRect;

    #[test]
    fn centers_split_span_evenly() {
        assert_eq!(category_centers(0.0, 300.0, 3), vec![50.0, 150.0, 250.0]);
        assert!(category_centers(0.0, 300.0, 0).is_empty());
    }

    #[test]
    fn bar_slots_start_at_rect_edges() {
        let rect = ViewportRect::new(100.0, 300.0, 200.0, 100.0);
        assert_eq!(vertical_bar_slots(rect, 2), vec![150.0, 250.0]);
        assert_eq!(horizontal_bar_slots(rect, 2), vec![225.0, 275.0]);
    }
}
