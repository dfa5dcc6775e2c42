use prettyframe_sparkline::{MultiSparkline, Sparkline, SparklineError};

#[test]
fn test_render_marks_extremes() {
    let svg = Sparkline::new([1.0, 5.0, 3.0, 5.0, 0.0]).unwrap().render().unwrap();
    assert_eq!(svg.matches("class=\"max\"").count(), 2);
    assert_eq!(svg.matches("class=\"min\"").count(), 1);
    assert!(svg.contains("fill=\"#8ca252\""));
    assert!(svg.contains("fill=\"#ff0000\""));
    assert!(svg.contains("stroke=\"black\""));
    assert!(!svg.contains("class=\"end\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_end_marker_without_extremes() {
    let svg = Sparkline::new([1.0, 2.0])
        .unwrap()
        .show_max(false)
        .show_min(false)
        .line_color("navy")
        .render()
        .unwrap();
    assert!(svg.contains("class=\"end\""));
    assert!(svg.contains("fill=\"navy\""));
    assert!(!svg.contains("class=\"max\""));
}

#[test]
fn test_polyline_points() {
    let svg = Sparkline::new([0.0, 10.0]).unwrap().render().unwrap();
    assert!(svg.contains("points=\"2.5,17.5 145.0,2.5\""));
}

#[test]
fn test_custom_size() {
    let svg = Sparkline::new([1.0, 2.0])
        .unwrap()
        .width(60)
        .height(12)
        .render()
        .unwrap();
    assert!(svg.starts_with("<svg width=\"60\" height=\"12\""));
}

#[test]
fn test_colors_are_escaped() {
    let svg = Sparkline::new([1.0, 2.0])
        .unwrap()
        .line_color("\"><script>")
        .render()
        .unwrap();
    assert!(!svg.contains("<script>"));
}

// ===== Combination Tests =====

#[test]
fn test_add_two_sparklines() {
    let a = Sparkline::new([1.0, 2.0, 3.0]).unwrap();
    let b = Sparkline::new([3.0, 2.0, 1.0]).unwrap().line_color("red");
    let multi = (a + b).unwrap();

    let svg = multi.render().unwrap();
    assert_eq!(svg.matches("<svg").count(), 1);
    assert_eq!(svg.matches("<polyline").count(), 2);
    assert!(svg.contains("stroke=\"red\""));
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_add_mismatched_sizes() {
    let a = Sparkline::new([1.0]).unwrap();
    let b = Sparkline::new([1.0]).unwrap().width(10);
    match a + b {
        Err(SparklineError::SizeMismatch { left, right }) => {
            assert_eq!(left, (150, 20));
            assert_eq!(right, (10, 20));
        }
        other => panic!("expected SizeMismatch, got {other:?}"),
    }
}

#[test]
fn test_multi_plus_sparkline_and_multi() {
    let line = || Sparkline::new([1.0, 2.0]).unwrap();
    let pair = (line() + line()).unwrap();
    let three = (pair.clone() + line()).unwrap();
    let five = (three + pair).unwrap();
    assert_eq!(five.len(), 5);

    let mixed = (line() + MultiSparkline::from(line())).unwrap();
    assert_eq!(mixed.len(), 2);
}

#[test]
fn test_empty_multi_renders_zero_canvas() {
    let svg = MultiSparkline::new().render().unwrap();
    assert!(svg.starts_with("<svg width=\"0\" height=\"0\""));
}
