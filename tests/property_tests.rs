//! Property based tests for the unit vector invariants

use proptest::prelude::*;
use spatial::{Angle, UnitVector2D, Vector2D, XmlSerializable};
use std::f64::consts::PI;

fn component() -> impl Strategy<Value = f64> {
    prop_oneof![-1e3..1e3f64, -1.0..1.0f64, -1e-6..1e-6f64, -1e300..1e300f64]
}

fn direction() -> impl Strategy<Value = UnitVector2D> {
    (component(), component())
        .prop_filter("zero length", |(x, y)| x.abs() > 1e-9 || y.abs() > 1e-9)
        .prop_map(|(x, y)| UnitVector2D::create(x, y).unwrap())
}

proptest! {
    #[test]
    fn create_yields_unit_length_in_same_direction(x in component(), y in component()) {
        prop_assume!(x.abs() > 1e-9 || y.abs() > 1e-9);
        let u = UnitVector2D::create(x, y).unwrap();
        prop_assert!((u.x() * u.x() + u.y() * u.y() - 1.0).abs() < 1e-14);
        prop_assert!((y.atan2(x) - u.y().atan2(u.x())).abs() < 1e-14);
    }

    #[test]
    fn cross_type_equality_agrees(u in direction()) {
        let v = u.to_vector_2d();
        prop_assert!(u == v);
        prop_assert!(v == u);
        prop_assert!(u.equals_within(&v, 1e-12).unwrap());
        prop_assert!(v.equals_within(&u, 1e-12).unwrap());

        let nudged = Vector2D::new(v.x + 1e-3, v.y);
        prop_assert_eq!(u == nudged, nudged == u);
        prop_assert_eq!(
            u.equals_within(&nudged, 1e-6).unwrap(),
            nudged.equals_within(&u, 1e-6).unwrap()
        );
    }

    #[test]
    fn unit_dot_product_is_a_valid_cosine(a in direction(), b in direction()) {
        let d = a.dot_product(&b);
        prop_assert!((-1.0..=1.0).contains(&d));
        prop_assert!((-1.0..=1.0).contains(&a.dot_product(&-a)));
        prop_assert!((-1.0..=1.0).contains(&a.dot_product(&a)));
    }

    #[test]
    fn angle_to_is_symmetric_and_bounded(a in direction(), b in direction()) {
        let ab = a.angle_to(&b);
        prop_assert_eq!(ab, b.angle_to(&a));
        prop_assert!(ab.radians() >= 0.0 && ab.radians() <= PI);
    }

    #[test]
    fn signed_angle_to_is_antisymmetric(a in direction(), b in direction()) {
        let ab = a.signed_angle_to(&b);
        prop_assume!(ab.radians().abs() < PI);
        prop_assert!(ab.radians() > -PI && ab.radians() <= PI);
        prop_assert!((ab + b.signed_angle_to(&a)).radians().abs() < 1e-15);
        prop_assert!((ab.abs().radians() - a.angle_to(&b).radians()).abs() < 1e-15);
    }

    #[test]
    fn full_turn_rotation_is_identity(u in direction()) {
        prop_assert_eq!(u.rotate(Angle::ZERO), u);
        prop_assert!(u.rotate(Angle::from_degrees(360.0)).equals_within(&u, 1e-14).unwrap());
        prop_assert!(u.rotate(Angle::from_degrees(-360.0)).equals_within(&u, 1e-14).unwrap());
    }

    #[test]
    fn rotation_preserves_unit_length(u in direction(), degrees in -720.0..720.0f64) {
        let r = u.rotate(Angle::from_degrees(degrees));
        prop_assert!((r.x() * r.x() + r.y() * r.y() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn text_round_trip(u in direction()) {
        let parsed: UnitVector2D = u.to_string().parse().unwrap();
        prop_assert_eq!(parsed, u);
    }

    #[test]
    fn xml_round_trip(u in direction()) {
        let back = UnitVector2D::read_xml(&u.to_xml_string().unwrap()).unwrap();
        prop_assert!(back.equals_within(&u, 1e-15).unwrap());

        let element_form = format!(
            "<UnitVector2D><X>{}</X><Y>{}</Y></UnitVector2D>",
            u.x(),
            u.y()
        );
        let back = UnitVector2D::read_xml(&element_form).unwrap();
        prop_assert!(back.equals_within(&u, 1e-15).unwrap());
    }
}
