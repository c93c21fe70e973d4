use super::*;

#[test]
fn cycling_wraps_both_ways() {
    assert_eq!(ShapeKind::Calligraphy.next(), ShapeKind::Triangle);
    assert_eq!(ShapeKind::Triangle.prev(), ShapeKind::Calligraphy);
    let mut k = ShapeKind::Astroid;
    for _ in 0..ShapeKind::ALL.len() {
        k = k.next();
    }
    assert_eq!(k, ShapeKind::Astroid);
}

#[test]
fn names_roundtrip_case_insensitively() {
    for k in ShapeKind::ALL {
        assert_eq!(ShapeKind::from_name(k.name()), Some(k));
        assert_eq!(ShapeKind::from_name(&k.name().to_uppercase()), Some(k));
    }
    assert_eq!(ShapeKind::from_name("dodecahedron"), None);
}

#[test]
fn map_points_skips_primitives() {
    let mut circle = ShapeOutput::Circle {
        center: Point::new(1.0, 2.0),
        radius: 3.0,
    };
    let before = circle.clone();
    circle.map_points(|p| Point::new(p.x + 10.0, p.y));
    assert_eq!(circle, before);
    assert!(circle.polylines().is_empty());

    let mut tri = ShapeOutput::single_closed(vec![Point::ZERO, Point::new(1.0, 0.0)]);
    tri.map_points(|p| Point::new(p.x + 10.0, p.y));
    assert_eq!(tri.polylines()[0].points[0], Point::new(10.0, 0.0));
    assert!(tri.polylines()[0].closed);
}
