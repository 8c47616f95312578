use crate::foundation::math::{mul_div255_u8, unit_to_u8};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over for premultiplied pixels, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(unit_to_u8(opacity));
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Porter-Duff destination-in: keep `dst` where the mask is opaque.
///
/// The mask alpha is scaled by `opacity` first, so a half-transparent mask entry only
/// halves the destination.
pub fn dest_in(dst: PremulRgba8, mask_alpha: u8, opacity: f32) -> PremulRgba8 {
    let op = u16::from(unit_to_u8(opacity));
    scale(dst, u16::from(mul_div255_u8(u16::from(mask_alpha), op)))
}

/// Porter-Duff destination-out: remove `dst` where `coverage` is set.
pub fn dest_out(dst: PremulRgba8, coverage: u8) -> PremulRgba8 {
    scale(dst, 255 - u16::from(coverage))
}

fn scale(px: PremulRgba8, w: u16) -> PremulRgba8 {
    px.map(|c| mul_div255_u8(u16::from(c), w))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
