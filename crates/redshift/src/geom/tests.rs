use super::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use super::special::{rect, regular_polygon};
use super::*;
use proptest::prelude::*;

const UP: Vec4 = Vec4::xyz(0.0, 0.0, 1.0);

/// Integer-valued points keep the orientation and in-circle determinants exact.
fn lattice_point() -> impl Strategy<Value = Vec4> {
    (-100i32..=100, -100i32..=100).prop_map(|(x, y)| Vec4::xy(x as f64, y as f64))
}

fn circumcircle(t: &Triangle) -> (Vec4, f64) {
    let (a, b, c) = (t.a, t.b, t.c);
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let (a2, b2, c2) = (a.dot2(&a), b.dot2(&b), c.dot2(&c));
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Vec4::xy(ux, uy);
    let r = center.distance_squared(&a).sqrt();
    (center, r)
}

fn triangle_areas(poly: &Polygon, idx: &[usize]) -> Vec<f64> {
    idx.chunks(3)
        .map(|t| Triangle::new(poly.points[t[0]], poly.points[t[1]], poly.points[t[2]]).signed_area_2d())
        .collect()
}

fn triangle_area_sum(poly: &Polygon, idx: &[usize]) -> f64 {
    triangle_areas(poly, idx).iter().sum()
}

/// `k` unit teeth of height 3 on a base strip of height 1, CCW.
fn comb(k: usize) -> Polygon {
    let w = (2 * k - 1) as f64;
    let mut pts = vec![Vec4::xy(0.0, 0.0), Vec4::xy(w, 0.0)];
    for j in (0..k).rev() {
        let x = (2 * j) as f64;
        pts.push(Vec4::xy(x + 1.0, 3.0));
        pts.push(Vec4::xy(x, 3.0));
        if j > 0 {
            pts.push(Vec4::xy(x, 1.0));
            pts.push(Vec4::xy(x - 1.0, 1.0));
        }
    }
    Polygon::new(pts)
}

/// Archimedean band of width 0.4 over two turns, CCW.
fn spiral(samples: usize) -> Polygon {
    let sweep = 2.0 * std::f64::consts::TAU;
    let at = |i: usize, r0: f64| {
        let t = sweep * i as f64 / (samples - 1) as f64;
        let r = r0 + 0.5 * t;
        Vec4::xy(r * t.cos(), r * t.sin())
    };
    let outer = (0..samples).map(|i| at(i, 1.0));
    let inner = (0..samples).rev().map(|i| at(i, 0.6));
    Polygon::new(outer.chain(inner).collect())
}

proptest! {
    #[test]
    fn turn_is_cyclic_and_flips_on_swap(a in lattice_point(), b in lattice_point(), c in lattice_point()) {
        let t = Triangle::new(a, b, c).turn();
        prop_assert_eq!(t, Triangle::new(b, c, a).turn());
        prop_assert_eq!(t, Triangle::new(c, a, b).turn());
        prop_assert_eq!(t.signum(), -Triangle::new(a, c, b).turn().signum());
    }

    #[test]
    fn circumcircle_matches_radius_for_both_windings(
        a in lattice_point(), b in lattice_point(), c in lattice_point(), d in lattice_point()
    ) {
        let tri = Triangle::new(a, b, c);
        prop_assume!(tri.turn() != Turn::Collinear);
        let (center, r) = circumcircle(&tri);
        let dist = center.distance_squared(&d).sqrt();
        prop_assume!((dist - r).abs() > 1e-6 * r.max(1.0));
        let inside = dist < r;
        prop_assert_eq!(tri.point_in_circumcircle_2d(&d), inside);
        prop_assert_eq!(Triangle::new(a, c, b).point_in_circumcircle_2d(&d), inside);
    }

    #[test]
    fn star_triangulation_preserves_area(seed in any::<u64>(), index in 0u64..1_000) {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 4, max: 24 },
            ..StarCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken { seed, index });
        let area = poly.area_2d();
        for p in [poly.clone(), poly.reversed_winding()] {
            let idx = p.triangulate(&UP, true).unwrap();
            prop_assert_eq!(idx.len() % 3, 0);
            prop_assert!(idx.len() <= 3 * (p.len() - 2));
            // No inverted triangles hiding behind a matching sum.
            prop_assert!(triangle_areas(&p, &idx).iter().all(|&a| a > 0.0));
            prop_assert!((triangle_area_sum(&p, &idx) - area).abs() <= 1e-9 * area.max(1.0));

            let cw = p.triangulate(&UP, false).unwrap();
            prop_assert!(triangle_areas(&p, &cw).iter().all(|&a| a < 0.0));
            prop_assert!((triangle_area_sum(&p, &cw) + area).abs() <= 1e-9 * area.max(1.0));
        }
    }

    #[test]
    fn star_contains_its_center(seed in any::<u64>(), index in 0u64..1_000) {
        let cfg = StarCfg { center: (3.0, -7.0), ..StarCfg::default() };
        let poly = draw_star_polygon(cfg, ReplayToken { seed, index });
        prop_assert!(poly.is_counter_clockwise());
        prop_assert!(poly.point_inside(&Vec4::xy(3.0, -7.0)));
        prop_assert!(!poly.point_inside(&Vec4::xy(3.0 + 10.0, -7.0)));
    }
}

#[test]
fn comb_triangulates_without_overlap() {
    for k in [1usize, 2, 5, 12] {
        let p = comb(k);
        let area = (4 * k - 1) as f64;
        assert!((p.signed_area_2d() - area).abs() < 1e-12);
        for q in [p.clone(), p.reversed_winding()] {
            let idx = q.triangulate(&UP, true).unwrap();
            assert!(idx.len() <= 3 * (q.len() - 2));
            assert!(triangle_areas(&q, &idx).iter().all(|&a| a > 0.0));
            assert!((triangle_area_sum(&q, &idx) - area).abs() < 1e-9);
        }
    }
}

#[test]
fn spiral_triangulates_without_overlap() {
    let p = spiral(60);
    assert!(p.is_counter_clockwise());
    let area = p.area_2d();
    for q in [p.clone(), p.reversed_winding()] {
        let idx = q.triangulate(&UP, true).unwrap();
        assert!(idx.len() <= 3 * (q.len() - 2));
        assert!(triangle_areas(&q, &idx).iter().all(|&a| a > 0.0));
        assert!((triangle_area_sum(&q, &idx) - area).abs() < 1e-9 * area);
    }
}

#[test]
fn regular_polygon_area_closed_form() {
    for n in [3usize, 5, 8, 33] {
        let p = regular_polygon(n, 2.0);
        let expected = 0.5 * n as f64 * 4.0 * (std::f64::consts::TAU / n as f64).sin();
        assert!((p.signed_area_2d() - expected).abs() < 1e-9);
        let idx = p.triangulate(&UP, true).unwrap();
        assert_eq!(idx.len(), 3 * (n - 2));
        assert!((triangle_area_sum(&p, &idx) - expected).abs() < 1e-9);
    }
}

#[test]
fn rect_is_ccw_box() {
    let r = rect(1.0, 2.0, 3.0, 4.0);
    assert!(r.is_counter_clockwise());
    assert_eq!(r.bounds(), Some(Aabb::new(1.0, 2.0, 3.0, 4.0)));
    assert!((r.area_2d() - 12.0).abs() < 1e-12);
}
