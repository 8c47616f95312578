use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_onto_opaque_stays_opaque() {
    let dst = [10, 10, 10, 255];
    assert_eq!(over(dst, [50, 50, 50, 100], 0.3)[3], 255);
}

#[test]
fn dest_in_keeps_dst_under_opaque_mask_and_clears_outside() {
    let dst = [10, 20, 30, 255];
    assert_eq!(dest_in(dst, 255, 1.0), dst);
    assert_eq!(dest_in(dst, 0, 1.0), [0, 0, 0, 0]);
    assert_eq!(dest_in(dst, 255, 0.0), [0, 0, 0, 0]);
}

#[test]
fn dest_out_removes_covered_alpha() {
    let dst = [255, 255, 255, 255];
    assert_eq!(dest_out(dst, 255), [0, 0, 0, 0]);
    assert_eq!(dest_out(dst, 0), dst);
    assert_eq!(dest_out(dst, 128)[3], 127);
}
