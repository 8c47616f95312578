use super::*;
use crate::foundation::core::Rgba8;

fn base() -> RasterLayer {
    RasterLayer::filled(4, 4, Rgba8::rgb(0, 0, 255)).unwrap()
}

#[test]
fn over_entries_apply_in_order() {
    let red = RasterLayer::filled(2, 2, Rgba8::rgb(255, 0, 0)).unwrap();
    let green = RasterLayer::filled(1, 1, Rgba8::rgb(0, 255, 0)).unwrap();
    let out = compose(
        base(),
        &[LayerEntry::over(&red, 1, 1), LayerEntry::over(&green, 1, 1)],
    )
    .unwrap();
    assert_eq!(out.pixel(1, 1), Some([0, 255, 0, 255]));
    assert_eq!(out.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 255, 255]));
}

#[test]
fn out_of_bounds_layers_are_clipped() {
    let red = RasterLayer::filled(3, 3, Rgba8::rgb(255, 0, 0)).unwrap();
    let out = compose(
        base(),
        &[
            LayerEntry::over(&red, -2, -2),
            LayerEntry::over(&red, 3, 3),
            LayerEntry::over(&red, 100, 0),
        ],
    )
    .unwrap();
    assert_eq!(out.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(1, 1), Some([0, 0, 255, 255]));
    assert_eq!(out.pixel(3, 3), Some([255, 0, 0, 255]));
}

#[test]
fn entry_opacity_scales_the_layer() {
    let white = RasterLayer::filled(4, 4, Rgba8::WHITE).unwrap();
    let black = RasterLayer::filled(4, 4, Rgba8::BLACK).unwrap();
    let out = compose(black, &[LayerEntry::over(&white, 0, 0).with_opacity(0.5)]).unwrap();
    assert_eq!(out.pixel(2, 2), Some([128, 128, 128, 255]));
}

#[test]
fn mask_clears_outside_and_keeps_inside() {
    let mut mask = RasterLayer::transparent(2, 2).unwrap();
    mask.data[3] = 255; // (0, 0) of the mask
    let out = compose(base(), &[LayerEntry::mask(&mask, 1, 1)]).unwrap();
    assert_eq!(out.pixel(1, 1), Some([0, 0, 255, 255]));
    assert_eq!(out.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(out.pixel(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn empty_entry_list_is_identity() {
    assert_eq!(compose(base(), &[]).unwrap(), base());
    assert_eq!(BlendMode::default(), BlendMode::Over);
}
