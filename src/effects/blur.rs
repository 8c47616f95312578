use rayon::prelude::*;

use crate::foundation::core::byte_len;
use crate::foundation::error::{SnapError, SnapResult};

/// Largest kernel radius evaluated with the exact separable Gaussian. Beyond this the blur
/// switches to three successive box passes, which approximate the same Gaussian in O(1) per pixel.
pub(crate) const EXACT_KERNEL_MAX_RADIUS: u32 = 24;

/// Gaussian blur of a premultiplied RGBA8 buffer with standard deviation `sigma` (pixels).
///
/// Edges are clamped. The result only depends on the inputs, never on the rayon thread count.
pub(crate) fn gaussian_blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> SnapResult<Vec<u8>> {
    let expected_len = byte_len(width, height)?;
    if src.len() != expected_len {
        return Err(SnapError::config(
            "gaussian_blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SnapError::config("blur sigma must be finite and >= 0"));
    }
    if sigma == 0.0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let radius = kernel_radius(sigma);
    if radius <= EXACT_KERNEL_MAX_RADIUS {
        let kernel = gaussian_kernel_q16(radius, sigma)?;
        let mut tmp = vec![0u8; expected_len];
        let mut out = vec![0u8; expected_len];
        horizontal_pass(src, &mut tmp, width, &kernel);
        vertical_pass(&tmp, &mut out, width, height, &kernel);
        return Ok(out);
    }

    let radii = box_radii_for_sigma(f64::from(sigma));
    let mut a = src.to_vec();
    let mut b = vec![0u8; expected_len];
    for &r in &radii {
        box_blur_rows(&a, &mut b, width, r);
        std::mem::swap(&mut a, &mut b);
    }
    transpose_rgba8(&a, &mut b, width, height);
    std::mem::swap(&mut a, &mut b);
    for &r in &radii {
        box_blur_rows(&a, &mut b, height, r);
        std::mem::swap(&mut a, &mut b);
    }
    transpose_rgba8(&a, &mut b, height, width);
    Ok(b)
}

/// Blur radius covering three standard deviations.
pub(crate) fn kernel_radius(sigma: f32) -> u32 {
    (3.0 * sigma).ceil().max(1.0) as u32
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> SnapResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(SnapError::config("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(SnapError::config("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let row_len = (width as usize) * 4;
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(out_row, in_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                    let idx = (sx as usize) * 4;
                    for c in 0..4 {
                        acc[c] += (kw as u64) * (in_row[idx + c] as u64);
                    }
                }
                let out_idx = (x as usize) * 4;
                for c in 0..4 {
                    out_row[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as usize;
    let h = height as i32;
    dst.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, out_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sy = (y as i32 + ki as i32 - radius).clamp(0, h - 1);
                    let idx = ((sy as usize) * w + x) * 4;
                    for c in 0..4 {
                        acc[c] += (kw as u64) * (src[idx + c] as u64);
                    }
                }
                for c in 0..4 {
                    out_row[x * 4 + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

/// Box radii of three passes whose composition approximates a Gaussian of `sigma`.
pub(crate) fn box_radii_for_sigma(sigma: f64) -> [u32; 3] {
    let n = 3.0f64;
    let w_ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut wl = w_ideal.floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wu = wl + 2;
    let wlf = wl as f64;
    let m_ideal =
        (12.0 * sigma * sigma - n * wlf * wlf - 4.0 * n * wlf - 3.0 * n) / (-4.0 * wlf - 4.0);
    let m = m_ideal.round() as i64;

    let mut out = [0u32; 3];
    for (i, r) in out.iter_mut().enumerate() {
        let size = if (i as i64) < m { wl } else { wu };
        *r = ((size - 1) / 2) as u32;
    }
    out
}

fn box_blur_rows(src: &[u8], dst: &mut [u8], width: u32, radius: u32) {
    let w = width as i64;
    let r = i64::from(radius);
    let d = (2 * r + 1) as u64;
    let row_len = (width as usize) * 4;
    let at = |x: i64| -> usize { (x.clamp(0, w - 1) as usize) * 4 };

    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(out_row, in_row)| {
            let mut sum = [0u64; 4];
            for k in -r..=r {
                let idx = at(k);
                for c in 0..4 {
                    sum[c] += u64::from(in_row[idx + c]);
                }
            }
            for x in 0..w {
                let out_idx = (x as usize) * 4;
                for c in 0..4 {
                    out_row[out_idx + c] = ((sum[c] + d / 2) / d).min(255) as u8;
                }
                let add = at(x + r + 1);
                let sub = at(x - r);
                for c in 0..4 {
                    sum[c] = sum[c] + u64::from(in_row[add + c]) - u64::from(in_row[sub + c]);
                }
            }
        });
}

/// Transpose a `width x height` RGBA8 buffer into `height x width`.
fn transpose_rgba8(src: &[u8], dst: &mut [u8], width: u32, height: u32) {
    let w = width as usize;
    let h = height as usize;
    dst.par_chunks_mut(h * 4).enumerate().for_each(|(x, out_row)| {
        for y in 0..h {
            let s = (y * w + x) * 4;
            out_row[y * 4..y * 4 + 4].copy_from_slice(&src[s..s + 4]);
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
