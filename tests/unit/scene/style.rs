use super::*;

#[test]
fn minimal_json_fills_in_defaults() {
    let cfg = StyleConfig::from_json_str(
        r##"{
            "background": { "kind": "gradient", "colors": ["#54A9EB", "#006FC8"] },
            "template": { "kind": "iphone" }
        }"##,
    )
    .unwrap();

    match &cfg.background {
        BackgroundSpec::Gradient(g) => {
            assert_eq!(g.angle, 135.0);
            assert_eq!(g.shape, GradientShape::Linear);
        }
        other => panic!("unexpected background {other:?}"),
    }
    assert_eq!(
        cfg.template,
        TemplateSpec::Iphone(PhoneParams {
            device_color: DeviceColor::Titanium
        })
    );
    assert_eq!(cfg.common, CommonConfig::default());
    assert_eq!(cfg.common.padding, 60);
    assert_eq!(cfg.common.shadow.color, "rgba(0, 0, 0, 0.3)");
}

#[test]
fn camel_case_params_parse() {
    let cfg = StyleConfig::from_json_str(
        r##"{
            "background": { "kind": "blur", "blurAmount": 40 },
            "template": { "kind": "layered", "outputWidth": 1920, "outputHeight": 1080, "offsetStep": 10 },
            "common": { "padding": 80, "cornerRadius": 24, "shadow": { "offsetY": 4 } }
        }"##,
    )
    .unwrap();

    assert_eq!(
        cfg.background,
        BackgroundSpec::Blur(BlurParams {
            blur_amount: 40.0,
            ..BlurParams::default()
        })
    );
    assert_eq!(
        cfg.template,
        TemplateSpec::Layered(LayeredParams {
            output_width: Some(1920),
            output_height: Some(1080),
            offset_step: Some(10),
        })
    );
    assert_eq!(cfg.common.padding, 80);
    assert_eq!(cfg.common.corner_radius, 24.0);
    assert_eq!(cfg.common.shadow.offset_y, 4.0);
    assert_eq!(cfg.common.shadow.blur, 30.0);
}

#[test]
fn unknown_template_kind_is_a_config_error() {
    let err = StyleConfig::from_json_str(
        r##"{ "background": { "kind": "solid", "color": "#fff" }, "template": { "kind": "watch" } }"##,
    )
    .unwrap_err();
    assert!(matches!(err, SnapError::Config(_)));
    assert!(TemplateKind::from_slug("watch").is_err());
}

#[test]
fn template_slugs_roundtrip() {
    for kind in [TemplateKind::MacWindow, TemplateKind::Iphone, TemplateKind::Layered] {
        assert_eq!(TemplateKind::from_slug(kind.slug()).unwrap(), kind);
        assert_eq!(TemplateSpec::default_for(kind).kind(), kind);
        assert_eq!(kind.to_string(), kind.slug());
    }
}

#[test]
fn serialized_config_parses_back() {
    let cfg = StyleConfig::new(
        BackgroundSpec::Solid(SolidParams {
            color: "#112233".to_owned(),
        }),
        TemplateSpec::MacWindow(MacWindowParams {
            window_buttons: Some(false),
        }),
    )
    .with_padding(12);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"kind\":\"mac-window\""));
    assert!(json.contains("\"windowButtons\":false"));
    assert_eq!(StyleConfig::from_json_str(&json).unwrap(), cfg);
}
