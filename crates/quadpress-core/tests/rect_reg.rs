//! Rect regression test - geometry operations
//!
//! Tests creation, the half-open containment convention, intersection,
//! and translation.

use quadpress_core::Rect;
use quadpress_test::RegParams;

#[test]
fn rect_reg() {
    let mut rp = RegParams::new("rect");

    // --- Test 1: Creation and properties ---
    let r = Rect::new(60, 60, 40, 20).expect("rect create");
    rp.compare_values(60.0, r.x as f64, 0.0);
    rp.compare_values(60.0, r.y as f64, 0.0);
    rp.compare_values(100.0, r.right() as f64, 0.0);
    rp.compare_values(80.0, r.bottom() as f64, 0.0);
    rp.compare_values(800.0, r.area() as f64, 0.0);
    rp.compare_values(1.0, if Rect::new(0, 0, -4, 4).is_err() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: Half-open containment ---
    rp.compare_values(1.0, if r.contains_point(60, 60) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if r.contains_point(99, 79) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if r.contains_point(100, 60) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if r.contains_point(60, 80) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: Intersection ---
    let a = Rect::new_unchecked(60, 60, 40, 20);
    let b = Rect::new_unchecked(80, 70, 60, 40);
    let inter = a.intersect(&b).expect("intersection");
    rp.compare_values(80.0, inter.x as f64, 0.0);
    rp.compare_values(70.0, inter.y as f64, 0.0);
    rp.compare_values(20.0, inter.w as f64, 0.0);
    rp.compare_values(10.0, inter.h as f64, 0.0);

    let c = Rect::new_unchecked(200, 200, 10, 10);
    rp.compare_values(1.0, if a.intersect(&c).is_none() { 1.0 } else { 0.0 }, 0.0);

    // Sharing only an edge does not intersect
    let d = Rect::new_unchecked(100, 60, 10, 20);
    rp.compare_values(1.0, if a.intersect(&d).is_none() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: Translation and emptiness ---
    let t = r.translate(-60, 40);
    rp.compare_values(0.0, t.x as f64, 0.0);
    rp.compare_values(100.0, t.y as f64, 0.0);
    rp.compare_values(40.0, t.w as f64, 0.0);
    rp.compare_values(0.0, if t.is_empty() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(
        1.0,
        if Rect::new_unchecked(5, 5, 0, 9).is_empty() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "rect regression test failed");
}
