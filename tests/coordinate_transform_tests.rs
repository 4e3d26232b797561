use approx::assert_abs_diff_eq;
use plotkit::ChartError;
use plotkit::api::{PlotOptions, RangeUpdate, ViewportConfig, ViewportManager};
use plotkit::core::{DataRange, ViewportRect};
use plotkit::render::Scene;

fn birth_rate_viewport() -> ViewportManager<Scene> {
    let config = ViewportConfig::new(ViewportRect::new(100.0, 300.0, 200.0, 200.0))
        .with_x_range(2005.0, 2020.0)
        .with_y_range(0.0, 150.0);
    ViewportManager::new(Scene::new(), config).expect("viewport init")
}

#[test]
fn range_corners_land_on_rect_corners() {
    let manager = birth_rate_viewport();
    assert_eq!(manager.to_pixel(2005.0, 0.0), (100.0, 300.0));
    assert_eq!(manager.to_pixel(2020.0, 150.0), (300.0, 100.0));
}

#[test]
fn pixel_y_grows_downward_as_data_y_grows_upward() {
    let manager = birth_rate_viewport();
    let (_, low) = manager.to_pixel(2010.0, 10.0);
    let (_, high) = manager.to_pixel(2010.0, 140.0);
    assert!(high < low);
}

#[test]
fn to_data_inverts_to_pixel() {
    let manager = birth_rate_viewport();
    let (px, py) = manager.to_pixel(2012.5, 61.3);
    let (x, y) = manager.to_data(px, py);
    assert_abs_diff_eq!(x, 2012.5, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 61.3, epsilon = 1e-9);
}

#[test]
fn partial_range_update_keeps_omitted_bounds() {
    let mut manager = birth_rate_viewport();
    manager
        .set_ranges(RangeUpdate::new().y_max(300.0))
        .expect("range update");
    assert_eq!(manager.x_range(), DataRange::new(2005.0, 2020.0));
    assert_eq!(manager.y_range(), DataRange::new(0.0, 300.0));
    assert_eq!(manager.to_pixel(2005.0, 150.0), (100.0, 200.0));
}

#[test]
fn degenerate_range_update_is_rejected_without_change() {
    let mut manager = birth_rate_viewport();
    let err = manager.set_ranges(RangeUpdate::new().x_min(2020.0));
    assert!(err.is_err());
    let err = manager.set_ranges(RangeUpdate::new().y(5.0, 1.0));
    assert!(err.is_err());
    assert_eq!(manager.x_range(), DataRange::new(2005.0, 2020.0));
    assert_eq!(manager.y_range(), DataRange::new(0.0, 150.0));
}

#[test]
fn invalid_geometry_is_rejected_at_construction() {
    let config = ViewportConfig::new(ViewportRect::new(0.0, 100.0, 0.0, 100.0));
    assert!(ViewportManager::new(Scene::new(), config).is_err());
}

#[test]
fn contains_pixel_covers_rect_edges() {
    let manager = birth_rate_viewport();
    assert!(manager.contains_pixel(100.0, 100.0));
    assert!(manager.contains_pixel(300.0, 300.0));
    assert!(!manager.contains_pixel(99.0, 200.0));
    assert!(!manager.contains_pixel(200.0, 301.0));
}

#[test]
fn overflowing_span_is_rejected_without_change() {
    let mut manager = birth_rate_viewport();
    let result = manager.set_ranges(RangeUpdate::new().x(-1e308, 1e308));
    assert!(matches!(result, Err(ChartError::DegenerateRange { .. })));
    assert_eq!(manager.x_range(), DataRange::new(2005.0, 2020.0));
    assert_eq!(manager.y_range(), DataRange::new(0.0, 150.0));
    assert_eq!(manager.to_pixel(2005.0, 0.0), (100.0, 300.0));

    let plot = manager.plot_points(vec![-1e308, 1e308], vec![1.0, 2.0], PlotOptions::new());
    assert!(plot.is_err());
    assert_eq!(manager.plot_count(), 0);
}
