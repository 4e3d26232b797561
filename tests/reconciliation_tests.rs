use approx::assert_relative_eq;
use plotkit::ChartError;
use plotkit::api::{PlotOptions, ViewportConfig, ViewportManager};
use plotkit::core::{DataRange, PlotKind, ReconcileStats, ViewportRect};
use plotkit::render::{Scene, Shape, ShapeId};

fn viewport() -> ViewportManager<Scene> {
    let config = ViewportConfig::new(ViewportRect::new(100.0, 300.0, 200.0, 200.0))
        .with_x_range(0.0, 10.0)
        .with_y_range(0.0, 100.0);
    ViewportManager::new(Scene::new(), config).expect("viewport init")
}

fn keep_ranges() -> PlotOptions {
    PlotOptions::new().with_resize_to_fit(false)
}

fn shape_ids(manager: &ViewportManager<Scene>, id: plotkit::core::PlotId) -> Vec<ShapeId> {
    manager
        .plot(id)
        .expect("owned plot")
        .shapes()
        .iter()
        .map(|plotted| plotted.id)
        .collect()
}

fn bar_centers(manager: &ViewportManager<Scene>, id: plotkit::core::PlotId) -> Vec<f64> {
    manager
        .plot(id)
        .expect("owned plot")
        .shapes()
        .iter()
        .map(|plotted| match &plotted.shape {
            Shape::Segment(bar) => bar.x1,
            other => panic!("bars are segments, got {other:?}"),
        })
        .collect()
}

#[test]
fn same_data_update_changes_no_geometry() {
    let mut manager = viewport();
    let id = manager
        .plot_lines(vec![1.0, 4.0, 9.0], vec![10.0, 40.0, 90.0], keep_ranges())
        .expect("line plot");
    let before = manager.plot(id).expect("owned plot").clone();
    let scene_before = manager.surface().clone();

    let stats = manager
        .update_plot_data(id, Some(vec![1.0, 4.0, 9.0]), Some(vec![10.0, 40.0, 90.0]), false)
        .expect("update");
    assert_eq!(
        stats,
        ReconcileStats {
            updated: 3,
            added: 0,
            removed: 0
        }
    );
    assert_eq!(manager.plot(id).expect("owned plot"), &before);
    assert_eq!(manager.surface(), &scene_before);
}

#[test]
fn shrinking_keeps_leading_shapes_and_drops_the_rest() {
    let mut manager = viewport();
    let id = manager
        .plot_points(vec![1.0, 2.0, 3.0, 4.0], vec![10.0, 20.0, 30.0, 40.0], keep_ranges())
        .expect("scatter plot");
    let initial = shape_ids(&manager, id);
    let total_before = manager.surface().shape_count();

    let stats = manager
        .update_plot_data(id, Some(vec![5.0, 6.0]), Some(vec![50.0, 60.0]), false)
        .expect("shrink");
    assert_eq!(stats.updated, 2);
    assert_eq!(stats.removed, 2);
    assert_eq!(shape_ids(&manager, id), initial[..2]);
    assert_eq!(manager.surface().shape_count(), total_before - 2);
    for stale in &initial[2..] {
        assert!(manager.surface().shape(*stale).is_none());
    }

    let Shape::Marker(marker) = &manager.plot(id).expect("owned plot").shapes()[0].shape else {
        panic!("scatter shapes are markers");
    };
    assert_eq!((marker.center_x, marker.center_y), (200.0, 200.0));
}

#[test]
fn growing_appends_shapes_after_existing_ones() {
    let mut manager = viewport();
    let id = manager
        .plot_points(vec![1.0, 2.0], vec![10.0, 20.0], keep_ranges())
        .expect("scatter plot");
    let initial = shape_ids(&manager, id);

    let stats = manager
        .update_plot_data(
            id,
            Some(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            Some(vec![10.0, 20.0, 30.0, 40.0, 50.0]),
            false,
        )
        .expect("grow");
    assert_eq!(
        stats,
        ReconcileStats {
            updated: 2,
            added: 3,
            removed: 0
        }
    );

    let grown = shape_ids(&manager, id);
    assert_eq!(grown.len(), 5);
    assert_eq!(grown[..2], initial);
    let group = manager.plot(id).expect("owned plot").group();
    assert_eq!(manager.surface().group_len(group), 5);
}

#[test]
fn line_update_relinks_segments_to_new_neighbours() {
    let mut manager = viewport();
    let id = manager
        .plot_lines(vec![0.0, 5.0], vec![0.0, 50.0], keep_ranges())
        .expect("line plot");
    manager
        .update_plot_data(id, Some(vec![10.0, 0.0, 5.0]), Some(vec![100.0, 0.0, 50.0]), false)
        .expect("update");

    let segments: Vec<(f64, f64, f64, f64)> = manager
        .plot(id)
        .expect("owned plot")
        .shapes()
        .iter()
        .map(|plotted| match &plotted.shape {
            Shape::Segment(line) => (line.x1, line.y1, line.x2, line.y2),
            other => panic!("line shapes are segments, got {other:?}"),
        })
        .collect();
    assert_eq!(
        segments,
        vec![
            (300.0, 100.0, 300.0, 100.0),
            (300.0, 100.0, 100.0, 300.0),
            (100.0, 300.0, 200.0, 200.0),
        ]
    );
}

#[test]
fn vertical_bar_slots_follow_category_count() {
    let mut manager = viewport();
    let id = manager
        .plot_vertical_bars(vec![10.0, 20.0, 30.0], None, keep_ranges())
        .expect("bar plot");
    let three = bar_centers(&manager, id);
    assert_eq!(three.len(), 3);
    assert_relative_eq!(three[0], 100.0 + 200.0 / 6.0, epsilon = 1e-9);
    assert_relative_eq!(three[1], 200.0, epsilon = 1e-9);
    assert_relative_eq!(three[2], 300.0 - 200.0 / 6.0, epsilon = 1e-9);

    manager
        .update_plot_data(id, None, Some(vec![10.0, 20.0]), false)
        .expect("shrink bars");
    assert_eq!(bar_centers(&manager, id), vec![150.0, 250.0]);

    let Shape::Segment(bar) = &manager.plot(id).expect("owned plot").shapes()[0].shape else {
        panic!("bars are segments");
    };
    assert_relative_eq!(bar.stroke_width, 200.0 / 3.0, epsilon = 1e-9);
    assert_eq!((bar.y1, bar.y2), (300.0, 280.0));
}

#[test]
fn horizontal_bars_grow_from_the_left_edge() {
    let mut manager = viewport();
    let id = manager
        .plot_horizontal_bars(vec![5.0, 10.0], None, keep_ranges())
        .expect("bar plot");
    let bars: Vec<(f64, f64, f64)> = manager
        .plot(id)
        .expect("owned plot")
        .shapes()
        .iter()
        .map(|plotted| match &plotted.shape {
            Shape::Segment(bar) => (bar.x1, bar.x2, bar.y1),
            other => panic!("bars are segments, got {other:?}"),
        })
        .collect();
    assert_eq!(bars, vec![(100.0, 200.0, 150.0), (100.0, 300.0, 250.0)]);
}

#[test]
fn missing_axis_keeps_current_data_for_points() {
    let mut manager = viewport();
    let id = manager
        .plot_points(vec![1.0, 2.0], vec![10.0, 20.0], keep_ranges())
        .expect("scatter plot");
    manager
        .update_plot_data(id, None, Some(vec![30.0, 40.0]), false)
        .expect("y only");
    let plot = manager.plot(id).expect("owned plot");
    assert_eq!(plot.x_data(), &[1.0, 2.0]);
    assert_eq!(plot.y_data(), &[30.0, 40.0]);
    assert_eq!(plot.y_range(), DataRange::new(30.0, 40.0));
}

#[test]
fn rejected_updates_leave_plot_untouched() {
    let mut manager = viewport();
    let id = manager
        .plot_points(vec![1.0, 2.0], vec![10.0, 20.0], keep_ranges())
        .expect("scatter plot");
    let before = manager.plot(id).expect("owned plot").clone();

    let mismatch = manager.update_plot_data(id, Some(vec![1.0, 2.0, 3.0]), None, true);
    assert!(matches!(mismatch, Err(ChartError::LengthMismatch { .. })));
    let empty = manager.update_plot_data(id, Some(Vec::new()), Some(Vec::new()), true);
    assert!(matches!(empty, Err(ChartError::EmptyData)));
    let nan = manager.update_plot_data(id, Some(vec![1.0, f64::NAN]), None, false);
    assert!(matches!(nan, Err(ChartError::InvalidData(_))));

    assert_eq!(manager.plot(id).expect("owned plot"), &before);
    assert_eq!(manager.x_range(), DataRange::new(0.0, 10.0));
}

#[test]
fn resize_on_update_redraws_every_plot() {
    let mut manager = viewport();
    let still = manager
        .plot_points(vec![5.0], vec![50.0], keep_ranges())
        .expect("static plot");
    let moving = manager
        .plot_points(vec![0.0, 10.0], vec![0.0, 100.0], keep_ranges())
        .expect("moving plot");
    let still_ids = shape_ids(&manager, still);

    manager
        .update_plot_data(moving, Some(vec![0.0, 20.0]), Some(vec![0.0, 200.0]), true)
        .expect("update with resize");
    assert_eq!(manager.x_range(), DataRange::new(0.0, 20.0));
    assert_eq!(manager.y_range(), DataRange::new(0.0, 200.0));

    let still_plot = manager.plot(still).expect("static plot");
    let Shape::Marker(marker) = &still_plot.shapes()[0].shape else {
        panic!("scatter shapes are markers");
    };
    assert_eq!((marker.center_x, marker.center_y), (150.0, 250.0));
    assert_eq!(shape_ids(&manager, still), still_ids);
    assert_eq!(
        manager.surface().shape(still_ids[0]),
        Some(&still_plot.shapes()[0].shape)
    );
}

#[test]
fn range_change_reprojects_without_new_shapes() {
    let mut manager = viewport();
    let id = manager
        .plot_lines(vec![0.0, 10.0], vec![0.0, 100.0], keep_ranges())
        .expect("line plot");
    let ids = shape_ids(&manager, id);

    manager
        .set_ranges(plotkit::RangeUpdate::new().x(0.0, 20.0))
        .expect("range update");
    assert_eq!(shape_ids(&manager, id), ids);
    let Shape::Segment(line) = &manager.plot(id).expect("owned plot").shapes()[1].shape else {
        panic!("line shapes are segments");
    };
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (100.0, 300.0, 200.0, 100.0));
    assert_eq!(manager.plot(id).expect("owned plot").kind(), PlotKind::Line);
}
