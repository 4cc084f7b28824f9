// File: crates/chart-core/tests/properties.rs
// Purpose: Mapping/resolve properties over a spread of series shapes and plot sizes.

use chart_core::{point_for, resolve, PlotRect, SampleSeries};

fn fixtures() -> Vec<SampleSeries> {
    vec![
        SampleSeries::load(vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0]).unwrap(),
        SampleSeries::load(vec![0.0, 1.0]).unwrap(),
        SampleSeries::load(vec![-40.0, 12.5, -3.0, 80.0, 0.0]).unwrap(),
        SampleSeries::load((0..97).map(|i| (i as f64 * 0.3).sin() * 50.0).collect::<Vec<_>>()).unwrap(),
        SampleSeries::load_with_bounds(vec![3.0, 7.0, 5.0], Some(0.0), None).unwrap(),
    ]
}

fn rects() -> Vec<PlotRect> {
    vec![PlotRect::new(360.0, 140.0), PlotRect::new(1.0, 1.0), PlotRect::new(1023.7, 311.3)]
}

#[test]
fn endpoints_map_to_rect_edges() {
    for s in fixtures() {
        for rect in rects() {
            assert_eq!(point_for(&s, 0, rect, false).x, 0.0);
            let last = point_for(&s, s.count() - 1, rect, false).x;
            assert!((last - rect.width).abs() < 1e-9, "last x {last} vs width {}", rect.width);
        }
    }
}

#[test]
fn resolving_a_mapped_x_recovers_the_index() {
    for s in fixtures() {
        for rect in rects() {
            for i in 0..s.count() {
                let x = point_for(&s, i, rect, false).x;
                let r = resolve(&s, rect, x).expect("sample x must resolve");
                assert_eq!(r.index, i);
                assert_eq!(r.value, s.values()[i]);
                assert_eq!(r.point, point_for(&s, i, rect, false));
            }
        }
    }
}

#[test]
fn pointer_beyond_half_a_step_is_out_of_range() {
    for s in fixtures() {
        for rect in rects() {
            let step = rect.width / (s.count() - 1) as f64;
            let eps = step * 1e-3;
            assert!(resolve(&s, rect, -step / 2.0 - eps).is_none());
            assert!(resolve(&s, rect, rect.width + step / 2.0 + eps).is_none());
            assert_eq!(resolve(&s, rect, -step / 2.0 + eps).map(|r| r.index), Some(0));
            assert_eq!(resolve(&s, rect, rect.width + step / 2.0 - eps).map(|r| r.index), Some(s.count() - 1));
        }
    }
}

#[test]
fn points_stay_inside_the_rect() {
    for s in fixtures() {
        for rect in rects() {
            for flip in [false, true] {
                for i in 0..s.count() {
                    let p = point_for(&s, i, rect, flip);
                    assert!(p.y >= -1e-9 && p.y <= rect.height + 1e-9, "y {} outside 0..{}", p.y, rect.height);
                }
            }
        }
    }
}

#[test]
fn degenerate_series_maps_to_a_flat_line() {
    let s = SampleSeries::load(vec![5.0, 5.0, 5.0, 5.0]).unwrap();
    let rect = PlotRect::new(360.0, 140.0);
    let ys: Vec<f64> = (0..4).map(|i| point_for(&s, i, rect, false).y).collect();
    assert!(ys.iter().all(|y| y.is_finite() && *y == ys[0]));
}

#[test]
fn medium_card_scenario() {
    let s = SampleSeries::load(vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0]).unwrap();
    let rect = PlotRect::new(360.0, 140.0);
    let r = resolve(&s, rect, 180.0).unwrap();
    assert_eq!(r.index, 4);
    assert_eq!(r.value, 12.0);
    assert_eq!(r.point.x, 180.0);
}

#[test]
fn resolve_is_idempotent() {
    let s = SampleSeries::load(vec![8.0, 23.0, 54.0, 32.0, 12.0]).unwrap();
    let rect = PlotRect::new(360.0, 140.0);
    for x in [-50.0, 0.0, 44.9, 45.0, 200.0, 359.0, 500.0] {
        assert_eq!(resolve(&s, rect, x), resolve(&s, rect, x));
    }
}
