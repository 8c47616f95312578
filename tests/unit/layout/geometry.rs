use super::*;
use crate::scene::style::{MacWindowParams, PhoneParams};

fn assert_inside(plan: &GeometryPlan) {
    let canvas = plan.canvas();
    for r in plan.rects() {
        assert!(canvas.contains_rect(r), "{r:?} outside {canvas:?}");
    }
}

#[test]
fn phone_canvas_ignores_input_size() {
    let spec = TemplateSpec::Iphone(PhoneParams::default());
    for (w, h, p) in [(1080, 1920, 80), (100, 100, 0), (3840, 2160, 60)] {
        let plan = plan_geometry(&spec, p, w, h).unwrap();
        assert_eq!(
            (plan.canvas().width, plan.canvas().height),
            (650 + 32 + 2 * p, 1404 + 32 + 2 * p)
        );
        assert_inside(&plan);
    }
}

#[test]
fn phone_island_and_camera_sit_inside_the_screen() {
    let spec = TemplateSpec::Iphone(PhoneParams::default());
    let GeometryPlan::Phone(p) = plan_geometry(&spec, 80, 1080, 1920).unwrap() else {
        panic!("expected phone plan");
    };
    assert_eq!(p.frame, Rect::new(80.0, 80.0, 762.0, 1516.0));
    assert_eq!(p.screen, Rect::new(96.0, 96.0, 746.0, 1500.0));
    assert_eq!(p.island.width(), 120.0);
    assert_eq!(p.island.y0, p.screen.y0 + 12.0);
    assert_eq!(p.island.center().x, p.screen.center().x);
    assert!(p.camera.x > p.island.center().x && p.camera.x < p.island.x1);
    assert_eq!(p.camera.y, p.island.center().y);
}

#[test]
fn mac_window_wraps_the_input() {
    let spec = TemplateSpec::MacWindow(MacWindowParams::default());
    let GeometryPlan::MacWindow(p) = plan_geometry(&spec, 60, 800, 600).unwrap() else {
        panic!("expected mac plan");
    };
    assert_eq!((p.canvas.width, p.canvas.height), (800 + 48 + 120, 600 + 52 + 48 + 120));
    assert_eq!(p.screen, Rect::new(84.0, 136.0, 884.0, 736.0));
    assert_eq!(p.title_bar.height(), 52.0);
    assert_eq!(p.buttons[0], Point::new(80.0, 86.0));
    assert_eq!(p.buttons[2].x - p.buttons[1].x, 23.0);
    assert_inside(&GeometryPlan::MacWindow(p));
}

#[test]
fn layered_main_is_contain_fitted_and_centered() {
    let spec = TemplateSpec::Layered(LayeredParams::default());
    let GeometryPlan::Layered(p) = plan_geometry(&spec, 60, 1080, 1920).unwrap() else {
        panic!("expected layered plan");
    };
    assert_eq!((p.canvas.width, p.canvas.height), (1080, 1080));
    assert_eq!((p.main.width(), p.main.height()), (486.0, 864.0));
    assert_eq!(p.main.center(), Point::new(540.0, 540.0));
    assert_eq!(p.back.len(), 3);

    // Farthest first: smallest, faintest, highest.
    let tops: Vec<f64> = p.back.iter().map(|c| c.rect.y0).collect();
    assert!(tops[0] < tops[1] && tops[1] < tops[2]);
    assert!(p.back[0].opacity < p.back[2].opacity);
    assert!(p.back[0].rect.height() < p.back[2].rect.height());
    assert_inside(&GeometryPlan::Layered(p));
}

#[test]
fn layered_offset_is_clamped_to_keep_cards_on_canvas() {
    let spec = TemplateSpec::Layered(LayeredParams {
        offset_step: Some(500),
        ..LayeredParams::default()
    });
    let plan = plan_geometry(&spec, 0, 1080, 1920).unwrap();
    let GeometryPlan::Layered(p) = &plan else {
        panic!("expected layered plan");
    };
    assert!(p.offset_step < 500.0);
    assert!(p.back[0].rect.y0 >= 0.0);
    assert_inside(&plan);
}

#[test]
fn output_size_overrides_layered_canvas() {
    let spec = TemplateSpec::Layered(LayeredParams {
        output_width: Some(1920),
        output_height: Some(1080),
        offset_step: None,
    });
    let plan = plan_geometry(&spec, 0, 500, 500).unwrap();
    assert_eq!((plan.canvas().width, plan.canvas().height), (1920, 1080));
    assert_eq!(plan.kind(), TemplateKind::Layered);
    assert_inside(&plan);
}

#[test]
fn invalid_sizes_are_config_errors() {
    let spec = TemplateSpec::MacWindow(MacWindowParams::default());
    assert!(matches!(
        plan_geometry(&spec, 60, 0, 100),
        Err(SnapError::Config(_))
    ));
    assert!(plan_geometry(&spec, 40_000, 100, 100).is_err());

    let layered = TemplateSpec::Layered(LayeredParams {
        output_width: Some(0),
        ..LayeredParams::default()
    });
    assert!(plan_geometry(&layered, 0, 100, 100).is_err());
}

#[test]
fn plan_serializes_with_kind_tag() {
    let spec = TemplateSpec::Iphone(PhoneParams::default());
    let plan = plan_geometry(&spec, 80, 1080, 1920).unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["kind"], "phone");
    assert_eq!(json["canvas"]["width"], 842);
    assert_eq!(json["canvas"]["height"], 1596);
}

#[test]
fn oversized_layered_output_is_rejected() {
    let spec = TemplateSpec::Layered(LayeredParams {
        output_width: Some(65_535),
        output_height: Some(65_535),
        offset_step: None,
    });
    let err = plan_geometry(&spec, 0, 500, 500).unwrap_err();
    assert!(matches!(err, SnapError::Config(_)));

    let spec = TemplateSpec::Layered(LayeredParams {
        output_width: Some(LAYERED.max_output_side),
        output_height: Some(1080),
        offset_step: None,
    });
    assert!(plan_geometry(&spec, 0, 500, 500).is_ok());
}
