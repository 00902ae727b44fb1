use spotlight_model::{Rgba, SpotGeometry};
use spotlight_render::{
    acquire_surface, MaskRenderer, MaskStyle, PixelHost, PixelSurface, RepaintOutcome,
};

fn renderer() -> MaskRenderer {
    MaskRenderer::new(MaskStyle {
        background: Rgba::new(0, 0, 0, 0.9),
        light_start: 0.0,
        light_end: 0.2,
    })
}

#[test]
fn cutout_is_clear_at_center_and_masked_outside() {
    let mut surface = PixelSurface::new(100, 100);
    let mut renderer = renderer();
    // Centered on a pixel center so (50, 50) samples distance zero.
    let spot = SpotGeometry::new(50.5, 50.5, 20.0, 10.0);
    renderer.repaint(&mut surface, &spot);

    let center = surface.alpha_at(50, 50).unwrap();
    assert!(center.abs() < 1e-9, "center should be fully lit, got {center}");

    // At the lit radius the gradient alpha is 1 - light_end = 0.8.
    let edge = surface.alpha_at(70, 50).unwrap();
    assert!((edge - 0.9 * 0.2).abs() < 1e-9, "edge alpha was {edge}");

    // Past radius + blur the mask is untouched.
    assert!((surface.alpha_at(90, 50).unwrap() - 0.9).abs() < 1e-9);
    assert!((surface.alpha_at(0, 0).unwrap() - 0.9).abs() < 1e-9);
}

#[test]
fn soft_edge_fades_monotonically() {
    let mut surface = PixelSurface::new(120, 20);
    let mut renderer = renderer();
    renderer.repaint(&mut surface, &SpotGeometry::new(10.5, 10.5, 30.0, 40.0));

    let alphas: Vec<f64> = (10..90).map(|x| surface.alpha_at(x, 10).unwrap()).collect();
    for pair in alphas.windows(2) {
        assert!(pair[1] + 1e-12 >= pair[0], "mask alpha should not decrease outward");
    }
}

#[test]
fn light_start_leaves_some_mask_at_center() {
    let mut surface = PixelSurface::new(40, 40);
    let mut renderer = MaskRenderer::new(MaskStyle {
        background: Rgba::new(0, 0, 0, 1.0),
        light_start: 0.25,
        light_end: 0.25,
    });
    renderer.repaint(&mut surface, &SpotGeometry::new(20.5, 20.5, 10.0, 0.0));

    // Gradient alpha 0.75 erases three quarters of an opaque mask.
    assert!((surface.alpha_at(20, 20).unwrap() - 0.25).abs() < 1e-9);
}

#[test]
fn zero_extent_spot_leaves_surface_fully_masked() {
    let mut surface = PixelSurface::new(30, 30);
    let mut renderer = renderer();
    let outcome = renderer.repaint(&mut surface, &SpotGeometry::new(15.0, 15.0, 0.0, 0.0));

    assert_eq!(outcome, RepaintOutcome::Masked);
    assert!(surface.is_uniform_alpha(0.9));
}

#[test]
fn repaint_replaces_previous_cutout() {
    let mut host = PixelHost::new(100, 40);
    let mut surface = acquire_surface(&mut host, "spotlight_canvas", 100).unwrap();
    let mut renderer = renderer();

    renderer.repaint(&mut surface, &SpotGeometry::new(20.5, 20.5, 10.0, 0.0));
    renderer.repaint(&mut surface, &SpotGeometry::new(80.5, 20.5, 10.0, 0.0));

    let view = acquire_surface(&mut host, "spotlight_canvas", 100).unwrap();
    let raster = view.borrow();
    assert!((raster.alpha_at(20, 20).unwrap() - 0.9).abs() < 1e-9);
    assert!(raster.alpha_at(80, 20).unwrap() < 1e-9);
    assert_eq!(renderer.repaint_count(), 2);
}

#[test]
fn hide_restores_full_mask() {
    let mut surface = PixelSurface::new(30, 30);
    let mut renderer = renderer();
    renderer.repaint(&mut surface, &SpotGeometry::new(15.0, 15.0, 10.0, 2.0));
    renderer.hide(&mut surface);

    assert!(surface.is_uniform_alpha(0.9));
}
