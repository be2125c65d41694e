// Host-side tests for zoom target geometry.

use jst_kidding_web::core::{aspect_ratio, centered_target, Rect, Viewport, ZoomConfig};

fn assert_rect(actual: Rect, expected: Rect) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(
        close(actual.x, expected.x)
            && close(actual.y, expected.y)
            && close(actual.width, expected.width)
            && close(actual.height, expected.height),
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn wide_image_in_laptop_viewport() {
    let config = ZoomConfig::default();
    let viewport = Viewport::new(1000.0, 800.0);
    let max = config.max_size(viewport);
    assert!((max.x - 940.0).abs() < 1e-9);
    assert!((max.y - 720.0).abs() < 1e-9);

    let target = centered_target(viewport, aspect_ratio(400, 200), &config);
    assert_rect(target, Rect::new(30.0, 165.0, 940.0, 470.0));
}

#[test]
fn tall_image_is_bounded_by_height() {
    let target = centered_target(Viewport::new(1000.0, 800.0), 0.5, &ZoomConfig::default());
    assert_rect(target, Rect::new(320.0, 40.0, 360.0, 720.0));
}

#[test]
fn pixel_caps_apply_on_large_screens() {
    let target = centered_target(Viewport::new(3000.0, 2000.0), 1.0, &ZoomConfig::default());
    assert_rect(target, Rect::new(1050.0, 550.0, 900.0, 900.0));

    let wide = centered_target(Viewport::new(3000.0, 2000.0), 4.0, &ZoomConfig::default());
    assert_rect(wide, Rect::new(950.0, 862.5, 1100.0, 275.0));
}

#[test]
fn invalid_aspect_falls_back_to_square() {
    let config = ZoomConfig::default();
    let viewport = Viewport::new(1000.0, 800.0);
    let square = centered_target(viewport, 1.0, &config);
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        assert_rect(centered_target(viewport, bad, &config), square);
    }
}

#[test]
fn aspect_ratio_from_natural_size() {
    assert_eq!(aspect_ratio(400, 200), 2.0);
    assert_eq!(aspect_ratio(0, 200), 1.0);
    assert_eq!(aspect_ratio(200, 0), 1.0);
    assert_eq!(Rect::new(0.0, 0.0, 0.0, 10.0).aspect(), None);
    assert_eq!(Rect::new(0.0, 0.0, 30.0, 10.0).aspect(), Some(3.0));
}

#[test]
fn custom_ceilings_are_honoured() {
    let config = ZoomConfig {
        max_width_px: 500.0,
        max_height_px: 500.0,
        ..ZoomConfig::default()
    };
    let target = centered_target(Viewport::new(1000.0, 800.0), 2.0, &config);
    assert_rect(target, Rect::new(250.0, 275.0, 500.0, 250.0));
}

#[test]
fn transition_css_covers_box_properties() {
    let css = ZoomConfig::default().transition.css();
    assert_eq!(
        css,
        "left 280ms cubic-bezier(0.2,0.8,0.2,1), \
         top 280ms cubic-bezier(0.2,0.8,0.2,1), \
         width 280ms cubic-bezier(0.2,0.8,0.2,1), \
         height 280ms cubic-bezier(0.2,0.8,0.2,1)"
    );
}
