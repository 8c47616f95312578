/// Row-major 4x5 color matrix applied to straight-alpha `[r, g, b, a, 1]`.
pub(crate) type ColorMatrix = [f32; 20];

/// Matrix scaling RGB by `brightness` and saturation by `saturation` around Rec.709 luma.
pub(crate) fn modulate_matrix(brightness: f32, saturation: f32) -> ColorMatrix {
    const LR: f32 = 0.2126;
    const LG: f32 = 0.7152;
    const LB: f32 = 0.0722;

    let s = saturation;
    let k = brightness;
    let sr = (1.0 - s) * LR;
    let sg = (1.0 - s) * LG;
    let sb = (1.0 - s) * LB;

    [
        k * (sr + s),
        k * sg,
        k * sb,
        0.0,
        0.0,
        k * sr,
        k * (sg + s),
        k * sb,
        0.0,
        0.0,
        k * sr,
        k * sg,
        k * (sb + s),
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
        0.0,
    ]
}

/// Apply `m` to a premultiplied RGBA8 buffer in place.
pub(crate) fn color_matrix_rgba8_premul_in_place(buf: &mut [u8], m: &ColorMatrix) {
    for d in buf.chunks_exact_mut(4) {
        let pr = d[0] as f32 / 255.0;
        let pg = d[1] as f32 / 255.0;
        let pb = d[2] as f32 / 255.0;
        let pa = d[3] as f32 / 255.0;

        // premul -> straight
        let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
        let r = pr * inv_a;
        let g = pg * inv_a;
        let b = pb * inv_a;
        let a = pa;

        let out_r = (m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4]).clamp(0.0, 1.0);
        let out_g = (m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9]).clamp(0.0, 1.0);
        let out_b = (m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14]).clamp(0.0, 1.0);
        let out_a = (m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19]).clamp(0.0, 1.0);

        d[0] = (out_r * out_a * 255.0).round().clamp(0.0, 255.0) as u8;
        d[1] = (out_g * out_a * 255.0).round().clamp(0.0, 255.0) as u8;
        d[2] = (out_b * out_a * 255.0).round().clamp(0.0, 255.0) as u8;
        d[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
