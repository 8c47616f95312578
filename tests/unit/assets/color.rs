use super::*;

#[test]
fn short_and_long_hex_are_identical() {
    assert_eq!(parse_hex_color("#F00").unwrap(), parse_hex_color("#FF0000").unwrap());
    assert_eq!(parse_hex_color("#F00").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(parse_hex_color("54a9eb").unwrap(), Rgba8::rgb(0x54, 0xA9, 0xEB));
}

#[test]
fn malformed_hex_is_a_config_error() {
    for bad in ["#zzz", "#12345", "", "#", "red", "#12G456"] {
        let err = parse_hex_color(bad).unwrap_err();
        assert!(matches!(err, SnapError::Config(_)), "{bad}: {err:?}");
    }
}

#[test]
fn parse_color_accepts_css_functions() {
    assert_eq!(
        parse_color("rgba(0, 0, 0, 0.5)").unwrap(),
        Rgba8::rgba(0, 0, 0, 128)
    );
    assert_eq!(parse_color("rgb(10,20,30)").unwrap(), Rgba8::rgb(10, 20, 30));
    assert_eq!(parse_color("#00000080").unwrap(), Rgba8::rgba(0, 0, 0, 0x80));
    assert_eq!(parse_color("#abc").unwrap(), Rgba8::rgb(0xAA, 0xBB, 0xCC));
}

#[test]
fn parse_color_rejects_out_of_range_components() {
    assert!(parse_color("rgb(256, 0, 0)").is_err());
    assert!(parse_color("rgba(0, 0, 0, 1.5)").is_err());
    assert!(parse_color("rgb(0, 0)").is_err());
    assert!(parse_color("rgb(0, 0, 0").is_err());
}
