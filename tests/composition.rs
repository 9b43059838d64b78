// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Integration tests for assemblies and transform propagation

use partscad::ast::SolidKind;
use partscad::{Cube, CustomObject, Cylinder, Error, Object, Point, Sphere, Vector};

fn puppet() -> Object {
    let body = Cube::new(10.0, 10.0, 10.0).build();
    let head = Sphere::new()
        .d(5.0)
        .build()
        .unwrap()
        .move_to([("bottom", body.anchor("top").unwrap())])
        .unwrap();
    CustomObject::new()
        .add_part("body", body)
        .add_part("head", head)
        .expose_anchors_of("body")
        .unwrap()
        .build()
}

#[test]
fn test_puppet_moves_as_one() {
    let puppet = puppet()
        .move_to([("center", Point::new(20.0, 20.0, 20.0))])
        .unwrap();
    assert_eq!(puppet.lookup("body.center").unwrap(), Point::new(20.0, 20.0, 20.0));
    assert_eq!(puppet.lookup("head.center").unwrap(), Point::new(20.0, 20.0, 27.5));
    assert_eq!(puppet.anchor("top").unwrap(), Point::at_z(25.0));
}

#[test]
fn test_nested_assemblies_propagate() {
    let row = CustomObject::new()
        .add_part("left", puppet())
        .add_part("right", puppet().translate(30.0, 0.0, 0.0))
        .build()
        .translate(0.0, 0.0, 100.0);
    assert_eq!(
        row.lookup("right.head.center").unwrap(),
        Point::new(30.0, 0.0, 107.5)
    );
    assert_eq!(row.lookup("left.body.bottom").unwrap(), Point::at_z(95.0));
}

#[test]
fn test_binary_vs_in_place_operators() {
    let a = Cube::new(1.0, 1.0, 1.0).build();
    let b = Cube::new(2.0, 2.0, 2.0).build();

    let c = a.differenced_with(&b);
    assert_eq!(c.children(), &[a.clone(), b.clone()]);
    assert!(a.children().is_empty());

    let mut d = a.clone();
    d.subtract_in_place(b.clone());
    assert_eq!(d.children(), &[b]);
}

#[test]
fn test_in_place_child_follows_receiver() {
    let mut plate = Cube::new(20.0, 20.0, 2.0).build();
    plate.subtract_in_place(Cylinder::new().d(3.0).h(4.0).build().unwrap());
    let plate = plate.translate(5.0, 5.0, 0.0);
    assert_eq!(plate.children()[0].anchor("center").unwrap(), Point::new(5.0, 5.0, 0.0));
}

#[test]
fn test_union_envelope() {
    let u = Object::union([
        Cube::uniform(2.0).build(),
        Sphere::new().r(1.0).build().unwrap().translate(0.0, 0.0, 10.0),
    ]);
    assert_eq!(u.anchor("pmin").unwrap(), Point::new(-1.0, -1.0, -1.0));
    assert_eq!(u.anchor("pmax").unwrap(), Point::new(1.0, 1.0, 11.0));
    assert_eq!(u.anchor("center").unwrap(), Point::new(0.0, 0.0, 5.0));
    assert!(matches!(u.solid().kind, SolidKind::Union(ref c) if c.len() == 2));
}

#[test]
fn test_intersection_keeps_receiver_anchors() {
    let a = Cube::uniform(4.0).build();
    let b = Sphere::new().d(5.0).build().unwrap();
    let i = a.intersected_with(&b);
    assert_eq!(i.anchors(), a.anchors());
    assert!(matches!(i.solid().kind, SolidKind::Intersection(_)));
}

#[test]
fn test_move_to_conflicting_constraints_last_wins() {
    // both anchors constrain x: the second constraint overrides the first
    let cube = Cube::uniform(2.0).build();
    let moved = cube
        .move_to([
            ("left", Point::at_x(10.0)),
            ("center", Point::new(0.0, 0.0, 0.0)),
        ])
        .unwrap();
    assert_eq!(moved.anchor("center").unwrap(), Point::O);
    assert_eq!(moved.anchor("left").unwrap(), Point::at_x(-1.0));

    let swapped = Cube::uniform(2.0)
        .build()
        .move_to([
            ("center", Point::new(0.0, 0.0, 0.0)),
            ("left", Point::at_x(10.0)),
        ])
        .unwrap();
    assert_eq!(swapped.anchor("left").unwrap(), Point::at_x(10.0));
}

#[test]
fn test_invalidation_reaches_parts() {
    let puppet = puppet().scale(2.0, 2.0, 2.0);
    assert!(matches!(
        puppet.lookup("head.center"),
        Err(Error::InvalidatedAnchor { .. })
    ));
    assert!(matches!(
        puppet.lookup("head.nose"),
        Err(Error::UnknownAnchor(_))
    ));
    assert_eq!(puppet.lookup("tail.center"), Err(Error::unknown_part("tail")));
}

#[test]
fn test_expose_anchors_of_invalidated_part() {
    let stale = Cube::uniform(1.0).build().rotate(45.0, 0.0, 0.0);
    let result = CustomObject::new()
        .add_part("stale", stale)
        .expose_anchors_of("stale");
    assert!(matches!(result, Err(Error::InvalidatedAnchors(_))));
}

#[test]
fn test_custom_anchor_moves_with_assembly() {
    let obj = CustomObject::new()
        .add_part("base", Cube::uniform(4.0).build())
        .set_anchor("mount", Point::new(0.0, 0.0, 2.0))
        .translate(1.0, 1.0, 1.0)
        .build();
    assert_eq!(obj.anchor("mount").unwrap(), Point::new(1.0, 1.0, 3.0));

    let moved = obj.translate_by(Vector::new(-1.0, -1.0, -1.0));
    assert_eq!(moved.anchor("mount").unwrap(), Point::new(0.0, 0.0, 2.0));
}
