// File: crates/bargraph-core/tests/layout.rs
// Purpose: Proportional width arithmetic, cursor clamping and panel validation.

use bargraph_core::palette::{DARK_GRAY, LIGHT_GRAY, RED};
use bargraph_core::{segment_spans, BarGraphError, Panel, Segment};

fn image_size_panel() -> Panel {
    let mut p = Panel::new("Image Size");
    p.add_segment(Segment::new(6349.0, DARK_GRAY, "6 349KiB", "kernel(bz)"));
    p.add_segment(Segment::new(25240.0, LIGHT_GRAY, "25 240KiB", "rootfs"));
    p.set_width(598);
    p
}

#[test]
fn running_total_starts_at_zero_and_sums_values() {
    let mut p = Panel::new("t");
    assert_eq!(p.total(), 0.0);
    p.add_segment(Segment::new(3.0, RED, "", ""));
    p.add_segment(Segment::new(4.5, RED, "", ""));
    assert_eq!(p.total(), 7.5);
    assert_eq!(p.segments().len(), 2);
}

#[test]
fn image_size_scenario_widths() {
    let layout = image_size_panel().layout().expect("layout");
    let first = layout.segments[0].bar;
    let second = layout.segments[1].bar;

    assert_eq!(first.left, 10);
    assert_eq!(first.width(), 118);
    assert_eq!(second.left, 128);
    assert_eq!(second.width(), 469);
    assert_eq!(layout.end_cursor(), Some(597));
    assert!(layout.end_cursor().unwrap() <= 598);
}

#[test]
fn band_geometry_for_default_height() {
    let layout = image_size_panel().layout().expect("layout");
    assert_eq!(layout.height, 80);
    assert_eq!(layout.title_baseline, 24);

    let s = layout.segments[0];
    assert_eq!((s.bar.top, s.bar.height()), (30, 35));
    assert_eq!((s.value_box.top, s.value_box.height()), (50, 15));
    assert_eq!((s.label_box.top, s.label_box.height()), (65, 15));
    assert_eq!(s.label_box.right, 128);
    assert_eq!(s.value_box.right, 127);
}

#[test]
fn drawn_widths_never_exceed_available_space() {
    let sets: [&[f64]; 5] = [
        &[1.0, 1.0, 1.0],
        &[6349.0, 23840.0, 1400.0],
        &[6349.0, 13840.0, 10000.0, 1400.0],
        &[0.1, 0.2, 0.3, 0.4, 1e6],
        &[7.0; 13],
    ];
    for values in sets {
        for width in [11, 50, 98, 598, 1021] {
            let total: f64 = values.iter().sum();
            let spans = segment_spans(values, total, width, 10);
            let drawn: i32 = spans.iter().map(|s| s.width).sum();
            assert!(drawn <= width - 10, "{values:?} @ {width}: drawn {drawn}");
            assert!(spans.iter().all(|s| s.cursor <= width));
            assert!(spans.windows(2).all(|w| w[0].cursor == w[1].start));
        }
    }
}

#[test]
fn cursor_clamps_exactly_to_right_edge() {
    // total smaller than the sum pushes the second segment past the edge
    let spans = segment_spans(&[10.0, 10.0], 10.0, 100, 10);
    assert_eq!(spans[0].width, 90);
    assert_eq!(spans[0].cursor, 100);
    assert_eq!(spans[1].start, 100);
    assert_eq!(spans[1].width, 0);
    assert_eq!(spans[1].cursor, 100);

    let spans = segment_spans(&[5.0, 8.0], 10.0, 60, 10);
    assert_eq!(spans[0].cursor, 35);
    assert_eq!(spans[1].width, 25);
    assert_eq!(spans[1].cursor, 60);
}

#[test]
fn zero_value_segment_has_zero_width() {
    let mut p = Panel::new("z");
    p.add_segment(Segment::new(0.0, RED, "", ""));
    p.add_segment(Segment::new(10.0, DARK_GRAY, "10", "all"));
    p.set_width(110);
    let layout = p.layout().expect("layout");
    assert_eq!(layout.segments[0].bar.width(), 0);
    assert_eq!(layout.segments[1].bar.width(), 100);
    assert_eq!(layout.bar_width(), 100);
}

#[test]
fn single_zero_segment_is_a_configuration_error() {
    let mut p = Panel::new("zero");
    p.add_segment(Segment::new(0.0, RED, "0", "nothing"));
    match p.layout() {
        Err(BarGraphError::InvalidTotal { title, total }) => {
            assert_eq!(title, "zero");
            assert_eq!(total, 0.0);
        }
        other => panic!("expected InvalidTotal, got {other:?}"),
    }
}

#[test]
fn empty_panel_is_a_configuration_error() {
    let p = Panel::new("empty");
    assert!(matches!(p.layout(), Err(BarGraphError::EmptyPanel { .. })));
}

#[test]
fn negative_and_non_finite_values_are_rejected() {
    let p = Panel::new("neg")
        .with_segment(Segment::new(5.0, RED, "", ""))
        .with_segment(Segment::new(-1.0, RED, "", ""));
    assert!(matches!(p.validate(), Err(BarGraphError::InvalidSegmentValue { index: 1, .. })));

    let p = Panel::new("nan").with_segment(Segment::new(f64::NAN, RED, "", ""));
    assert!(matches!(p.validate(), Err(BarGraphError::InvalidSegmentValue { index: 0, .. })));
}

#[test]
fn width_must_exceed_indent() {
    let mut p = Panel::new("narrow").with_segment(Segment::new(1.0, RED, "", ""));
    p.set_width(10);
    assert!(matches!(p.validate(), Err(BarGraphError::InvalidDimensions { .. })));
    p.set_indent(0);
    assert!(p.validate().is_ok());
}
