use super::*;
use crate::foundation::core::Rgba8;
use crate::scene::style::{
    BackgroundSpec, GradientParams, GradientShape, MacWindowParams, TemplateKind, TemplateSpec,
};

fn png(width: u32, height: u32) -> Vec<u8> {
    let layer = RasterLayer::filled(width, height, Rgba8::rgb(30, 120, 200)).unwrap();
    encode_png(&layer).unwrap()
}

fn style(colors: &[&str]) -> StyleConfig {
    StyleConfig::new(
        BackgroundSpec::Gradient(GradientParams {
            colors: colors.iter().map(|c| (*c).to_owned()).collect(),
            angle: 135.0,
            shape: GradientShape::Linear,
        }),
        TemplateSpec::MacWindow(MacWindowParams::default()),
    )
    .with_padding(20)
}

#[test]
fn process_screenshot_returns_png_of_the_planned_size() {
    let result = process_screenshot(&png(64, 48), &style(&["#667eea", "#764ba2"])).unwrap();
    assert_eq!((result.width, result.height), (64 + 48 + 40, 48 + 52 + 48 + 40));

    let decoded = decode_image(&result.buffer).unwrap();
    assert_eq!((decoded.width, decoded.height), (result.width, result.height));
    assert!(decoded.is_opaque());
}

#[test]
fn output_is_deterministic() {
    let input = png(32, 32);
    let s = style(&["#ff0000", "#00ff00", "#0000ff"]);
    let a = process_screenshot(&input, &s).unwrap();
    let b = process_screenshot(&input, &s).unwrap();
    assert_eq!(a.buffer, b.buffer);
}

#[test]
fn undecodable_bytes_are_a_user_error() {
    let err = process_screenshot(b"not an image", &style(&["#000", "#fff"])).unwrap_err();
    assert!(matches!(err, SnapError::Decode(_)));
    assert!(err.is_user_error());
}

#[test]
fn template_failures_are_tagged_with_the_template() {
    let err = process_screenshot(&png(8, 8), &style(&["#000"])).unwrap_err();
    match &err {
        SnapError::Render { template, source } => {
            assert_eq!(*template, TemplateKind::MacWindow);
            assert!(matches!(**source, SnapError::Config(_)));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.is_user_error());
    assert!(err.user_message().starts_with("Invalid style settings"));
}

#[test]
fn render_raster_skips_encoding() {
    let screenshot = RasterLayer::filled(10, 10, Rgba8::WHITE).unwrap();
    let out = render_raster(&screenshot, &style(&["#111", "#eee"])).unwrap();
    assert_eq!((out.width, out.height), (10 + 48 + 40, 10 + 100 + 40));
}
