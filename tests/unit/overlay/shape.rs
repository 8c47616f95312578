use super::*;

fn at(cov: &[u8], w: u32, x: u32, y: u32) -> u8 {
    cov[(y * w + x) as usize]
}

#[test]
fn rect_coverage_is_solid_inside_and_empty_outside() {
    let cov = coverage(10, 10, &Shape::Rect(Rect::new(2.0, 2.0, 8.0, 8.0))).unwrap();
    assert_eq!(cov.len(), 100);
    assert_eq!(at(&cov, 10, 5, 5), 255);
    assert_eq!(at(&cov, 10, 2, 2), 255);
    assert_eq!(at(&cov, 10, 0, 0), 0);
    assert_eq!(at(&cov, 10, 9, 9), 0);
}

#[test]
fn rounded_rect_clears_its_corners() {
    let cov = coverage(40, 40, &Shape::rounded(Rect::new(0.0, 0.0, 40.0, 40.0), 12.0)).unwrap();
    assert_eq!(at(&cov, 40, 0, 0), 0);
    assert_eq!(at(&cov, 40, 39, 39), 0);
    assert_eq!(at(&cov, 40, 20, 0), 255);
    assert_eq!(at(&cov, 40, 20, 20), 255);
}

#[test]
fn top_radii_leave_bottom_corners_square() {
    let shape = Shape::RoundedRect {
        rect: Rect::new(0.0, 0.0, 40.0, 20.0),
        radii: CornerRadii::top(10.0),
    };
    let cov = coverage(40, 20, &shape).unwrap();
    assert_eq!(at(&cov, 40, 0, 0), 0);
    assert_eq!(at(&cov, 40, 0, 19), 255);
    assert_eq!(at(&cov, 40, 39, 19), 255);
}

#[test]
fn circle_and_pill_bounds() {
    let c = Shape::circle(10.0, 12.0, 5.0);
    assert_eq!(c.bounds(), Rect::new(5.0, 7.0, 15.0, 17.0));
    let cov = coverage(20, 20, &c).unwrap();
    assert_eq!(at(&cov, 20, 10, 12), 255);
    assert_eq!(at(&cov, 20, 5, 7), 0);

    let pill = Shape::Pill(Rect::new(0.0, 0.0, 30.0, 10.0));
    let cov = coverage(30, 10, &pill).unwrap();
    assert_eq!(at(&cov, 30, 0, 0), 0);
    assert_eq!(at(&cov, 30, 15, 5), 255);
}

#[test]
fn translated_moves_every_variant() {
    let shapes = [
        Shape::Rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
        Shape::rounded(Rect::new(0.0, 0.0, 1.0, 1.0), 0.5),
        Shape::Pill(Rect::new(0.0, 0.0, 1.0, 1.0)),
        Shape::Ellipse(Rect::new(0.0, 0.0, 1.0, 1.0)),
        Shape::circle(0.5, 0.5, 0.5),
    ];
    for s in shapes {
        assert_eq!(s.translated(3.0, -2.0).bounds(), Rect::new(3.0, -2.0, 4.0, -1.0));
    }
}

#[test]
fn empty_target_yields_no_coverage() {
    let cov = coverage(0, 5, &Shape::circle(1.0, 1.0, 1.0)).unwrap();
    assert!(cov.is_empty());
    assert!(coverage(70_000, 1, &Shape::circle(1.0, 1.0, 1.0)).is_err());
}
