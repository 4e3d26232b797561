use plotkit::ChartError;
use plotkit::api::{AxisLabels, PlotOptions, ViewportConfig, ViewportManager, ViewportSnapshot};
use plotkit::core::{DataRange, PlotKind, ViewportRect};
use plotkit::render::Scene;

#[test]
fn config_json_round_trip_preserves_setup() {
    let config = ViewportConfig::new(ViewportRect::new(60.0, 420.0, 360.0, 240.0))
        .with_x_range(2005.0, 2020.0)
        .with_y_range(-10.0, 40.0)
        .with_labels(AxisLabels::new("Temperature", "Year", "Celsius"));

    let json = config.to_json_pretty().expect("serialize");
    let restored = ViewportConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn config_rejects_invalid_geometry_and_garbage() {
    let zero_width = r#"{"rect":{"left":0.0,"bottom":100.0,"width":0.0,"height":100.0}}"#;
    assert!(matches!(
        ViewportConfig::from_json_str(zero_width),
        Err(ChartError::InvalidViewport { .. })
    ));
    assert!(matches!(
        ViewportConfig::from_json_str("{ not json"),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn manager_rejects_invalid_config() {
    let config = ViewportConfig::default().with_x_range(5.0, 1.0);
    let result = ViewportManager::new(Scene::new(), config);
    assert!(matches!(result, Err(ChartError::DegenerateRange { .. })));
}

#[test]
fn snapshot_reports_plots_ranges_and_ticks() {
    let config = ViewportConfig::default().with_labels(AxisLabels::new("Sales", "", ""));
    let mut manager = ViewportManager::new(Scene::new(), config).expect("init");
    let kept = manager
        .plot_lines(vec![1.0, 2.0, 4.0], vec![10.0, 30.0, 20.0], PlotOptions::new())
        .expect("line plot");
    let removed = manager
        .plot_points(
            vec![1.5, 3.0],
            vec![12.0, 25.0],
            PlotOptions::new().with_resize_to_fit(false),
        )
        .expect("scatter plot");
    manager.remove_plot(removed).expect("remove");

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.x_range, DataRange::new(1.0, 4.0));
    assert_eq!(snapshot.y_range, DataRange::new(10.0, 30.0));
    assert_eq!(snapshot.labels.title, "Sales");
    assert_eq!(snapshot.plots.len(), 1);

    let plot = &snapshot.plots[0];
    assert_eq!(plot.id, kept);
    assert_eq!(plot.kind, PlotKind::Line);
    assert_eq!((plot.points, plot.shapes), (3, 3));
    assert!(plot.visible);
    assert_eq!(snapshot.ticks.x.len(), 11);
    assert_eq!(snapshot.ticks.x[0].label, "1.0");
    assert_eq!(snapshot.ticks.y[0].label, "30.0");
}

#[test]
fn snapshot_json_round_trip() {
    let mut manager = ViewportManager::new(Scene::new(), ViewportConfig::default()).expect("init");
    manager
        .plot_vertical_bars(vec![2.0, 4.0], Some(vec![120.0, 240.0]), PlotOptions::new())
        .expect("bar plot");

    let snapshot = manager.snapshot();
    let json = snapshot.to_json_pretty().expect("serialize");
    assert!(json.contains("\"vertical_bar\""));

    let restored = ViewportSnapshot::from_json_str(&json).expect("parse");
    assert_eq!(restored.plots, snapshot.plots);
    assert_eq!(restored.x_range, snapshot.x_range);
    assert_eq!(restored.ticks.y.len(), snapshot.ticks.y.len());
}
