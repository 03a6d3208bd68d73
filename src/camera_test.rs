#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn with_zoom_clamps() {
    assert_eq!(Camera::with_zoom(0.0, 0.0, 0.0).zoom, MIN_ZOOM);
    assert_eq!(Camera::with_zoom(0.0, 0.0, 100.0).zoom, MAX_ZOOM);
    assert_eq!(Camera::with_zoom(0.0, 0.0, 2.5).zoom, 2.5);
}

// --- screen_to_world / world_to_screen ---

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(20.0, 10.0));
    assert!(point_approx_eq(world, Point::ORIGIN));
}

#[test]
fn screen_to_world_origin() {
    let cam = Camera { pan_x: 50.0, pan_y: 30.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::ORIGIN);
    assert!(point_approx_eq(world, Point::new(-25.0, -15.0)));
}

#[test]
fn world_screen_roundtrip() {
    let cam = Camera { pan_x: -13.0, pan_y: 7.5, zoom: 0.75 };
    let p = Point::new(123.0, -45.0);
    assert!(point_approx_eq(cam.screen_to_world(cam.world_to_screen(p)), p));
}

// --- viewport ---

#[test]
fn viewport_without_surface_is_empty() {
    assert_eq!(viewport(None), Rect::EMPTY);
}

#[test]
fn viewport_identity_camera_matches_pixels() {
    let surface = RenderSurface::new(800.0, 600.0, Camera::default());
    assert_eq!(viewport(Some(&surface)), Rect::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn viewport_zoomed_in_covers_less_world() {
    let surface = RenderSurface::new(800.0, 600.0, Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 });
    assert_eq!(viewport(Some(&surface)), Rect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn viewport_panned_shifts_origin() {
    let surface = RenderSurface::new(200.0, 100.0, Camera { pan_x: 100.0, pan_y: 50.0, zoom: 0.5 });
    let vp = viewport(Some(&surface));
    assert!(approx_eq(vp.x, -200.0));
    assert!(approx_eq(vp.y, -100.0));
    assert!(approx_eq(vp.width, 400.0));
    assert!(approx_eq(vp.height, 200.0));
}

#[test]
fn viewport_zero_sized_surface_is_degenerate() {
    let surface = RenderSurface::new(0.0, 0.0, Camera { pan_x: 10.0, pan_y: 10.0, zoom: 1.0 });
    let vp = viewport(Some(&surface));
    assert!(vp.is_empty());
    assert_eq!(vp.x, -10.0);
}

#[test]
fn viewport_with_unusable_zoom_is_empty() {
    for zoom in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let surface = RenderSurface::new(800.0, 600.0, Camera { pan_x: 5.0, pan_y: 5.0, zoom });
        assert_eq!(viewport(Some(&surface)), Rect::EMPTY, "zoom {zoom}");
    }
}
