use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(3, 4).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 3.0, 4.0));
}

#[test]
fn canvas_contains_rect_checks_every_edge() {
    let c = Canvas::new(100, 50).unwrap();
    assert!(c.contains_rect(Rect::new(0.0, 0.0, 100.0, 50.0)));
    assert!(!c.contains_rect(Rect::new(-1.0, 0.0, 10.0, 10.0)));
    assert!(!c.contains_rect(Rect::new(0.0, 0.0, 10.0, 50.5)));
}

#[test]
fn rgba8_to_premul_scales_color_by_alpha() {
    assert_eq!(Rgba8::rgb(10, 20, 30).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 128, 0, 128).to_premul(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::TRANSPARENT.to_premul(), [0, 0, 0, 0]);
}

#[test]
fn rgba8_opacity_and_alpha_helpers() {
    assert_eq!(Rgba8::WHITE.with_opacity(0.5).a, 128);
    assert_eq!(Rgba8::WHITE.with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::BLACK.with_alpha(7), Rgba8::rgba(0, 0, 0, 7));
}

#[test]
fn raster_layer_constructors_validate_length() {
    let l = RasterLayer::filled(2, 3, Rgba8::rgb(1, 2, 3)).unwrap();
    assert_eq!(l.data.len(), 2 * 3 * 4);
    assert!(l.is_opaque());
    assert_eq!(l.pixel(1, 2), Some([1, 2, 3, 255]));
    assert_eq!(l.pixel(2, 0), None);

    assert!(RasterLayer::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(!RasterLayer::transparent(1, 1).unwrap().is_opaque());
}

#[test]
fn straight_roundtrip_is_stable_for_opaque_and_clear() {
    let data = vec![10, 20, 30, 255, 99, 99, 99, 0];
    let l = RasterLayer::from_straight(2, 1, data).unwrap();
    assert_eq!(l.data, vec![10, 20, 30, 255, 0, 0, 0, 0]);
    assert_eq!(l.to_straight(), vec![10, 20, 30, 255, 0, 0, 0, 0]);
}
