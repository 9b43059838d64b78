// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Integration tests for anchor arithmetic and invalidation

use partscad::{AnchorPoints, Axis, Cube, Cylinder, Error, Point, Sphere, Vector};

#[test]
fn test_point_vector_associativity() {
    let points = [
        Point::new(1.0, 2.0, 3.0),
        Point::at_x(5.0),
        Point::partial(None, Some(-1.5), Some(4.0)),
    ];
    let v = Vector::new(0.25, -3.0, 8.0);
    let w = Vector::new(-1.0, 0.5, 2.0);
    for p in points {
        assert_eq!((p + v) + w, p + (v + w));
    }
}

#[test]
fn test_point_difference_with_null_axes() {
    let p = Point::new(3.0, 4.0, 5.0);
    assert_eq!(p - p, Vector::zeros());
    assert_eq!(Point::at_z(10.0) - p, Vector::new(0.0, 0.0, 5.0));
    assert_eq!(Point::at_x(1.0) - Point::at_y(1.0), Vector::zeros());
}

#[test]
fn test_cube_example() {
    let cube = Cube::new(2.0, 4.0, 6.0).build();
    assert_eq!(cube.anchor("pmin").unwrap(), Point::new(-1.0, -2.0, -3.0));
    assert_eq!(cube.anchor("pmax").unwrap(), Point::new(1.0, 2.0, 3.0));
    assert_eq!(cube.anchor("center").unwrap(), Point::O);
}

#[test]
fn test_cylinder_axes() {
    let z = Cylinder::new().r(1.0).h(4.0).build().unwrap();
    let x = Cylinder::new().r(1.0).hx(4.0).build().unwrap();
    assert_eq!(z.anchors().names(), x.anchors().names());
    assert_eq!(z.anchor("top").unwrap(), Point::at_z(2.0));
    assert_eq!(x.anchor("right").unwrap(), Point::at_x(2.0));
    assert_eq!(x.anchor("top").unwrap(), Point::at_z(1.0));
    assert_eq!(Axis::X.rotation(), Vector::new(0.0, 90.0, 0.0));
}

#[test]
fn test_move_to_is_exact() {
    let target = Point::new(3.0, -7.0, 12.5);
    for anchor in ["pmin", "pmax", "center"] {
        let moved = Sphere::new()
            .r(2.0)
            .build()
            .unwrap()
            .move_to([(anchor, target)])
            .unwrap();
        assert_eq!(moved.anchor(anchor).unwrap(), target);
    }
}

#[test]
fn test_move_to_null_axes_stay_put() {
    let cube = Cube::uniform(2.0).build().translate(10.0, 20.0, 30.0);
    let moved = cube
        .move_to([("center", Point::partial(Some(0.0), None, None))])
        .unwrap();
    assert_eq!(moved.anchor("center").unwrap(), Point::new(0.0, 20.0, 30.0));
}

#[test]
fn test_unknown_and_invalidated_are_distinct() {
    let cube = Cube::uniform(1.0).build().rotate(0.0, 0.0, 30.0);
    let invalidated = cube.anchor("top").unwrap_err();
    let unknown = cube.anchor("nose").unwrap_err();

    assert!(matches!(invalidated, Error::InvalidatedAnchor { .. }));
    assert!(matches!(unknown, Error::UnknownAnchor(_)));
    assert!(cube.has_anchor("top"));
    assert!(!cube.has_anchor("nose"));

    let message = invalidated.to_string();
    assert!(message.contains("rotate"));
    assert!(message.contains("tests/anchors.rs"));
}

#[test]
fn test_every_non_rigid_transform_invalidates() {
    let cube = || Cube::uniform(1.0).build();
    let transformed = [
        cube().scale(2.0, 2.0, 2.0),
        cube().rotate(90.0, 0.0, 0.0),
        cube().rotate_about(45.0, Vector::new(1.0, 1.0, 0.0)),
        cube().resize(3.0, 3.0, 3.0, None),
    ];
    for obj in transformed {
        for name in partscad::geometry::BOX_ANCHORS {
            assert!(matches!(
                obj.anchor(name),
                Err(Error::InvalidatedAnchor { .. })
            ));
        }
    }
}

#[test]
fn test_translate_after_invalidation_keeps_error() {
    let obj = Cube::uniform(1.0)
        .build()
        .scale(2.0, 1.0, 1.0)
        .translate(1.0, 0.0, 0.0);
    match obj.anchor("center") {
        Err(Error::InvalidatedAnchor { invalidation, .. }) => {
            assert_eq!(invalidation.operation(), "scale");
        }
        other => panic!("expected an invalidated anchor, got {other:?}"),
    }
}

#[test]
fn test_rederive_box_after_rotation() {
    let mut obj = Cube::new(2.0, 4.0, 6.0).build().rotate(0.0, 0.0, 90.0);
    obj.anchors_mut()
        .set_bounding_box(Point::new(-2.0, -1.0, -3.0), Point::new(2.0, 1.0, 3.0));
    assert_eq!(obj.anchor("right").unwrap(), Point::at_x(2.0));

    let moved = obj.translate(1.0, 0.0, 0.0);
    assert_eq!(moved.anchor("right").unwrap(), Point::at_x(3.0));
}

#[test]
fn test_custom_registry() {
    let mut anchors = AnchorPoints::from_points([("tip", Point::new(0.0, 0.0, 9.0))]);
    anchors.set_bounding_box(Point::O, Point::new(1.0, 1.0, 1.0));
    anchors.translate(Vector::new(1.0, 0.0, 0.0));
    assert_eq!(anchors.get("tip").unwrap(), Point::new(1.0, 0.0, 9.0));
    assert_eq!(anchors.get("left").unwrap(), Point::at_x(1.0));
}

#[test]
fn test_custom_anchor_on_rotated_object() {
    let mut obj = Cube::uniform(2.0).build().rotate(0.0, 0.0, 45.0);
    obj.anchors_mut().set("mark", Point::O);

    assert_eq!(obj.anchor("mark").unwrap(), Point::O);
    assert!(obj.has_anchor("top"));
    match obj.anchor("top") {
        Err(Error::InvalidatedAnchor { invalidation, .. }) => {
            assert_eq!(invalidation.operation(), "rotate");
        }
        other => panic!("expected an invalidated anchor, got {other:?}"),
    }

    let moved = obj.translate(0.0, 0.0, 3.0);
    assert_eq!(moved.anchor("mark").unwrap(), Point::new(0.0, 0.0, 3.0));
}
