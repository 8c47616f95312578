use super::*;

#[test]
fn blur_sigma_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = gaussian_blur_rgba8_premul(&src, 1, 2, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_rejects_bad_inputs() {
    assert!(gaussian_blur_rgba8_premul(&[0u8; 7], 1, 2, 1.0).is_err());
    assert!(gaussian_blur_rgba8_premul(&[0u8; 8], 1, 2, -1.0).is_err());
    assert!(gaussian_blur_rgba8_premul(&[0u8; 8], 1, 2, f32::NAN).is_err());
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    assert_eq!(gaussian_blur_rgba8_premul(&src, w, h, 2.0).unwrap(), src);
    // Large sigma takes the box path; clamped edges keep a flat image flat.
    assert_eq!(gaussian_blur_rgba8_premul(&src, w, h, 40.0).unwrap(), src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = gaussian_blur_rgba8_premul(&src, w, h, 1.0).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);
    assert!(out[center + 3] < 255);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 8);
}

#[test]
fn box_path_is_symmetric_for_a_centered_dot() {
    let (w, h) = (101u32, 101u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    for y in 45..56u32 {
        for x in 45..56u32 {
            let i = ((y * w + x) * 4) as usize;
            src[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);
        }
    }
    let out = gaussian_blur_rgba8_premul(&src, w, h, 10.0).unwrap();
    let a = |x: u32, y: u32| out[((y * w + x) * 4 + 3) as usize];
    assert_eq!(a(40, 50), a(60, 50));
    assert_eq!(a(50, 40), a(50, 60));
    assert!(a(50, 50) > a(30, 50));
}

#[test]
fn box_radii_grow_with_sigma() {
    let small = box_radii_for_sigma(10.0);
    let large = box_radii_for_sigma(70.0);
    assert!(small.iter().sum::<u32>() < large.iter().sum::<u32>());
    assert!(small.iter().all(|&r| r >= 1));
}

#[test]
fn kernel_radius_covers_three_sigma() {
    assert_eq!(kernel_radius(0.1), 1);
    assert_eq!(kernel_radius(2.0), 6);
    assert_eq!(kernel_radius(8.0), EXACT_KERNEL_MAX_RADIUS);
}
