use super::*;
use crate::scene::style::SolidParams;

fn blue() -> BackgroundSpec {
    BackgroundSpec::Solid(SolidParams {
        color: "#0000FF".to_owned(),
    })
}

fn render(params: MacWindowParams) -> RasterLayer {
    let screenshot = RasterLayer::filled(40, 30, Rgba8::rgb(255, 0, 0)).unwrap();
    let common = CommonConfig {
        padding: 10,
        ..CommonConfig::default()
    };
    MacWindowRenderer::new(params)
        .render(&screenshot, &blue(), &common)
        .unwrap()
}

#[test]
fn canvas_wraps_the_native_size_screenshot() {
    let out = render(MacWindowParams::default());
    assert_eq!((out.width, out.height), (108, 150));
    assert!(out.is_opaque());
    assert_eq!(out.pixel(34 + 20, 86 + 15), Some([255, 0, 0, 255]));
}

#[test]
fn body_and_title_bar_use_table_colors() {
    let out = render(MacWindowParams::default());
    let body = out.pixel(50, 130).unwrap();
    assert_eq!(body, [0xF6, 0xF6, 0xF6, 255]);

    let bar = out.pixel(60, 40).unwrap();
    assert_eq!(bar[0], bar[1]);
    assert_eq!(bar[1], bar[2]);
    assert!((0xD5..=0xEB).contains(&bar[0]), "{bar:?}");
}

#[test]
fn window_corners_are_rounded_away() {
    let out = render(MacWindowParams::default());
    let corner = out.pixel(10, 10).unwrap();
    assert!(corner[0] < 60 && corner[2] > 150, "{corner:?}");
}

#[test]
fn traffic_lights_follow_the_toggle() {
    let shown = render(MacWindowParams::default());
    let close = shown.pixel(30, 36).unwrap();
    assert!(close[0] > 240 && close[1] < 130, "{close:?}");

    let hidden = render(MacWindowParams {
        window_buttons: Some(false),
    });
    let bar = hidden.pixel(30, 36).unwrap();
    assert_eq!(bar[0], bar[1]);
    assert_eq!(bar[1], bar[2]);
}

#[test]
fn screenshot_corners_are_rounded() {
    let out = render(MacWindowParams::default());
    // Backing and screenshot share the radius, so the window body shows through.
    let corner = out.pixel(34, 86).unwrap();
    assert!(corner[1] > 100, "{corner:?}");
}

#[test]
fn plan_matches_geometry_planner() {
    let r = MacWindowRenderer::default();
    assert_eq!(r.kind(), TemplateKind::MacWindow);
    let plan = r.plan(60, 800, 600).unwrap();
    assert_eq!(plan.kind(), TemplateKind::MacWindow);
    assert_eq!(plan.canvas().width, 968);
}

#[test]
fn transparent_screenshot_pixels_show_the_white_backing() {
    let screenshot = RasterLayer::transparent(40, 30).unwrap();
    let common = CommonConfig {
        padding: 10,
        ..CommonConfig::default()
    };
    let out = MacWindowRenderer::default()
        .render(&screenshot, &blue(), &common)
        .unwrap();
    assert_eq!(out.pixel(34 + 20, 86 + 15), Some([255, 255, 255, 255]));
}
