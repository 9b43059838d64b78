// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Objects: a solid handle plus the anchors that describe it
//!
//! An [`Object`] owns its solid, its [`AnchorPoints`] and the children it was
//! composed from. Children's solids are merged into the parent's solid when
//! they are added; afterwards only their anchors are kept in sync, so that
//! `assembly.part("head")?.anchor("center")` keeps answering in world
//! coordinates however often the assembly is moved.

mod custom;
mod preview;

pub use custom::CustomObject;

use crate::ast::{Color, Modifier, Solid};
use crate::error::{Error, Result};
use crate::geometry::{AnchorPoints, BoundingBox, Cube, Invalidation, Point, Vector};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// How a part name maps onto the children list
#[derive(Debug, Clone, PartialEq)]
enum PartRef {
    One(usize),
    Group(Vec<usize>),
}

/// Geometric object (primitive or composite)
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    solid: Solid,
    anchors: AnchorPoints,
    children: Vec<Object>,
    parts: BTreeMap<String, PartRef>,
}

impl Object {
    pub fn new(solid: Solid, anchors: AnchorPoints) -> Self {
        Self {
            solid,
            anchors,
            children: Vec::new(),
            parts: BTreeMap::new(),
        }
    }

    /// Wrap a solid that exposes no anchors.
    pub fn from_solid(solid: Solid) -> Self {
        Self::new(solid, AnchorPoints::new())
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn into_solid(self) -> Solid {
        self.solid
    }

    pub fn anchors(&self) -> &AnchorPoints {
        &self.anchors
    }

    pub fn anchors_mut(&mut self) -> &mut AnchorPoints {
        &mut self.anchors
    }

    pub fn children(&self) -> &[Object] {
        &self.children
    }

    pub fn anchor(&self, name: &str) -> Result<Point> {
        self.anchors.get(name)
    }

    pub fn has_anchor(&self, name: &str) -> bool {
        self.anchors.has_point(name)
    }

    pub fn bounding_box(&self) -> Result<BoundingBox> {
        self.anchors.bounding_box()
    }

    // ----------------------------------------------------------------------
    // Named parts
    // ----------------------------------------------------------------------

    pub fn part(&self, name: &str) -> Result<&Object> {
        match self.parts.get(name) {
            Some(PartRef::One(index)) => Ok(&self.children[*index]),
            Some(PartRef::Group(_)) => Err(Error::invalid_parameter(format!(
                "`{name}` names a group of parts"
            ))),
            None => Err(Error::unknown_part(name)),
        }
    }

    pub fn part_group(&self, name: &str) -> Result<Vec<&Object>> {
        match self.parts.get(name) {
            Some(PartRef::One(index)) => Ok(vec![&self.children[*index]]),
            Some(PartRef::Group(indices)) => {
                Ok(indices.iter().map(|&i| &self.children[i]).collect())
            }
            None => Err(Error::unknown_part(name)),
        }
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// Resolve a dotted part path such as `board.mcu` or `holes.2`.
    pub fn find(&self, path: &str) -> Result<&Object> {
        let mut current = self;
        let mut segments = path.split('.');
        while let Some(segment) = segments.next() {
            current = match current.parts.get(segment) {
                Some(PartRef::One(index)) => &current.children[*index],
                Some(PartRef::Group(indices)) => {
                    let index = segments
                        .next()
                        .and_then(|n| n.parse::<usize>().ok())
                        .and_then(|n| indices.get(n))
                        .ok_or_else(|| Error::unknown_part(path))?;
                    &current.children[*index]
                }
                None => return Err(Error::unknown_part(segment)),
            };
        }
        Ok(current)
    }

    /// Read an anchor through a part path, e.g. `head.center`.
    pub fn lookup(&self, path: &str) -> Result<Point> {
        match path.rsplit_once('.') {
            Some((parts, anchor)) => self.find(parts)?.anchor(anchor),
            None => self.anchor(path),
        }
    }

    fn register_part(&mut self, name: String, part: PartRef) {
        if let Some(previous) = self.parts.insert(name.clone(), part) {
            debug!(part = %name, ?previous, "part name reassigned; previous child stays in the solid");
        }
    }

    // ----------------------------------------------------------------------
    // Transforms
    // ----------------------------------------------------------------------

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.translate_by(Vector::new(x, y, z))
    }

    pub fn translate_by(mut self, v: Vector) -> Self {
        self.translate_in_place(v);
        self
    }

    /// Move this object and every descendant's anchors by the same vector.
    pub fn translate_in_place(&mut self, v: Vector) {
        self.visit_anchors(&mut |anchors: &mut AnchorPoints| anchors.translate(v));
        self.map_solid(|solid| solid.translate(v));
    }

    #[track_caller]
    pub fn scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.invalidate_anchors(Invalidation::here("scale"));
        self.map_solid(|solid| solid.scale(Vector::new(x, y, z)));
        self
    }

    /// Euler rotation in degrees.
    #[track_caller]
    pub fn rotate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.invalidate_anchors(Invalidation::here("rotate"));
        self.map_solid(|solid| solid.rotate(Vector::new(x, y, z)));
        self
    }

    /// Rotation of `angle` degrees around `axis`.
    #[track_caller]
    pub fn rotate_about(mut self, angle: f64, axis: Vector) -> Self {
        self.invalidate_anchors(Invalidation::here("rotate"));
        self.map_solid(|solid| solid.rotate_about(angle, axis));
        self
    }

    #[track_caller]
    pub fn resize(mut self, x: f64, y: f64, z: f64, auto: Option<[bool; 3]>) -> Self {
        self.invalidate_anchors(Invalidation::here("resize"));
        self.map_solid(|solid| solid.resize(Vector::new(x, y, z), auto));
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let color = color.into();
        self.map_solid(|solid| solid.color(color));
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.solid.set_modifier(modifier);
        self
    }

    /// Invalidate the anchors of this object and all its descendants.
    pub fn invalidate_anchors(&mut self, invalidation: Invalidation) {
        self.visit_anchors(&mut |anchors: &mut AnchorPoints| {
            anchors.invalidate(invalidation.clone())
        });
    }

    /// Translate so that each named anchor lands on its target.
    ///
    /// Unconstrained target axes leave the object where it is on that axis.
    /// Constraints are applied one after the other: when two of them pin the
    /// same axis, the later one wins on that axis.
    pub fn move_to<S: AsRef<str>>(
        mut self,
        constraints: impl IntoIterator<Item = (S, Point)>,
    ) -> Result<Self> {
        self.move_to_in_place(constraints)?;
        Ok(self)
    }

    pub fn move_to_in_place<S: AsRef<str>>(
        &mut self,
        constraints: impl IntoIterator<Item = (S, Point)>,
    ) -> Result<()> {
        // resolve everything first so a bad name leaves the object untouched
        let constraints = constraints
            .into_iter()
            .map(|(name, target)| {
                self.anchor(name.as_ref())?;
                Ok((name, target))
            })
            .collect::<Result<Vec<_>>>()?;

        for (name, target) in constraints {
            let current = self.anchor(name.as_ref())?;
            let delta = target - current;
            trace!(anchor = name.as_ref(), %current, %target, ?delta, "move_to");
            self.translate_in_place(delta);
        }
        Ok(())
    }

    // ----------------------------------------------------------------------
    // Composition
    // ----------------------------------------------------------------------

    /// Union of `objects`; its box is the envelope of the operands' boxes.
    pub fn union(objects: impl IntoIterator<Item = Object>) -> Self {
        let mut result = Object::from_solid(Solid::empty_union());
        for object in objects {
            result.union_in_place(object);
        }
        result.anchors = envelope_anchors(&result.children);
        result
    }

    /// Difference of `objects`; anchors are those of the first operand.
    pub fn difference(objects: impl IntoIterator<Item = Object>) -> Self {
        let mut result = Object::from_solid(Solid::empty_union());
        for object in objects {
            result.subtract_in_place(object);
        }
        if let Some(first) = result.children.first() {
            result.anchors = first.anchors.clone();
        }
        result
    }

    pub fn unioned_with(&self, other: &Object) -> Object {
        Object::union([self.clone(), other.clone()])
    }

    pub fn differenced_with(&self, other: &Object) -> Object {
        Object::difference([self.clone(), other.clone()])
    }

    pub fn intersected_with(&self, other: &Object) -> Object {
        let mut result = Object::from_solid(Solid::empty_union());
        result.intersect_in_place(self.clone());
        result.intersect_in_place(other.clone());
        result.anchors = self.anchors.clone();
        result
    }

    /// Union `other` into this object's solid and adopt it as a child.
    /// This object's anchors are left as they are.
    pub fn union_in_place(&mut self, other: Object) {
        let solid = other.solid.clone();
        self.map_solid(|s| s.union_with(solid));
        self.children.push(other);
    }

    pub fn subtract_in_place(&mut self, other: Object) {
        let solid = other.solid.clone();
        self.map_solid(|s| s.difference_with(solid));
        self.children.push(other);
    }

    pub fn intersect_in_place(&mut self, other: Object) {
        let solid = other.solid.clone();
        self.map_solid(|s| s.intersection_with(solid));
        self.children.push(other);
    }

    /// Add a transparent cube showing the `pmin`..`pmax` box.
    pub fn show_bounding_box(mut self) -> Result<Self> {
        let pmin = self.anchor("pmin").map_err(missing_box("pmin"))?;
        let pmax = self.anchor("pmax").map_err(missing_box("pmax"))?;
        let size = pmax - pmin;
        let bbox = Cube::new(size.x, size.y, size.z)
            .build()
            .modifier(Modifier::Transparent)
            .move_to([("pmin", pmin)])?;
        self.map_solid(|s| s.union_with(bbox.solid));
        Ok(self)
    }

    /// Render to OpenSCAD with default settings.
    pub fn render(&self) -> String {
        crate::io::ScadRenderer::default().render(&self.solid)
    }

    fn map_solid(&mut self, f: impl FnOnce(Solid) -> Solid) {
        let solid = std::mem::replace(&mut self.solid, Solid::empty_union());
        self.solid = f(solid);
    }

    fn visit_anchors(&mut self, f: &mut impl FnMut(&mut AnchorPoints)) {
        f(&mut self.anchors);
        for child in &mut self.children {
            child.visit_anchors(f);
        }
    }
}

fn missing_box(name: &'static str) -> impl Fn(Error) -> Error {
    move |err| match err {
        Error::UnknownAnchor(_) => Error::MissingBoundingBox(name),
        other => other,
    }
}

/// Box anchors enclosing every child that has a box. If any of those boxes
/// was invalidated, so is the envelope.
fn envelope_anchors(children: &[Object]) -> AnchorPoints {
    let mut corners = Vec::new();
    let mut stale = None;
    for child in children {
        if !(child.has_anchor("pmin") && child.has_anchor("pmax")) {
            continue;
        }
        match child.bounding_box() {
            Ok(bbox) => corners.extend([bbox.min, bbox.max]),
            Err(Error::InvalidatedAnchor { invalidation, .. }) => {
                stale.get_or_insert(invalidation);
            }
            Err(_) => {}
        }
    }

    let mut anchors = AnchorPoints::new();
    if !corners.is_empty() && anchors.set_bounding_box_from(&corners, true).is_err() {
        return AnchorPoints::new();
    }
    if let Some(invalidation) = stale {
        if anchors.is_empty() {
            anchors.set_bounding_box(Point::O, Point::O);
        }
        anchors.invalidate(invalidation);
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sphere;

    fn cube(s: f64) -> Object {
        Cube::new(s, s, s).build()
    }

    #[test]
    fn test_translate_moves_anchors_and_solid() {
        let obj = cube(2.0).translate(1.0, 2.0, 3.0);
        assert_eq!(obj.anchor("center").unwrap(), Point::new(1.0, 2.0, 3.0));
        assert_eq!(obj.anchor("top").unwrap(), Point::at_z(4.0));
        assert!(obj.render().contains("translate([1, 2, 3])"));
    }

    #[test]
    fn test_binary_operators_do_not_mutate() {
        let a = cube(1.0);
        let b = cube(2.0);
        let c = a.differenced_with(&b);
        assert_eq!(c.children(), &[a.clone(), b.clone()]);
        assert!(a.children().is_empty());
        assert_eq!(c.anchor("pmax").unwrap(), Point::new(0.5, 0.5, 0.5));

        let u = a.unioned_with(&b.clone().translate(5.0, 0.0, 0.0));
        assert_eq!(u.anchor("pmin").unwrap(), Point::new(-0.5, -1.0, -1.0));
        assert_eq!(u.anchor("pmax").unwrap(), Point::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_in_place_operators_adopt_children() {
        let mut a = cube(4.0);
        a.subtract_in_place(cube(1.0));
        a.union_in_place(cube(1.0).translate(0.0, 0.0, 10.0));
        assert_eq!(a.children().len(), 2);
        // receiver anchors unchanged
        assert_eq!(a.anchor("top").unwrap(), Point::at_z(2.0));

        let a = a.translate(0.0, 0.0, 1.0);
        assert_eq!(a.children()[1].anchor("center").unwrap(), Point::new(0.0, 0.0, 11.0));
    }

    #[test]
    fn test_move_to_partial_target() {
        let base = cube(10.0);
        let head = Sphere::new()
            .d(4.0)
            .build()
            .unwrap()
            .translate(7.0, 8.0, 0.0)
            .move_to([("bottom", base.anchor("top").unwrap())])
            .unwrap();
        assert_eq!(head.anchor("center").unwrap(), Point::new(7.0, 8.0, 7.0));
    }

    #[test]
    fn test_move_to_unknown_anchor_leaves_object() {
        let mut obj = cube(2.0);
        let err = obj
            .move_to_in_place([("center", Point::new(5.0, 5.0, 5.0)), ("nose", Point::O)])
            .unwrap_err();
        assert_eq!(err, Error::unknown_anchor("nose"));
        assert_eq!(obj.anchor("center").unwrap(), Point::O);
    }

    #[test]
    fn test_rotate_invalidates_descendants() {
        let obj = Object::union([cube(1.0), cube(2.0)]).rotate(0.0, 0.0, 45.0);
        assert!(matches!(obj.anchor("center"), Err(Error::InvalidatedAnchor { .. })));
        assert!(matches!(
            obj.children()[0].anchor("top"),
            Err(Error::InvalidatedAnchor { .. })
        ));
    }

    #[test]
    fn test_union_of_invalidated_operand() {
        let stale = cube(1.0).scale(2.0, 2.0, 2.0);
        let u = Object::union([stale, cube(1.0)]);
        assert!(u.has_anchor("center"));
        match u.anchor("center") {
            Err(Error::InvalidatedAnchor { invalidation, .. }) => {
                assert_eq!(invalidation.operation(), "scale");
            }
            other => panic!("expected an invalidated anchor, got {other:?}"),
        }
    }

    #[test]
    fn test_show_bounding_box() {
        let obj = cube(2.0).show_bounding_box().unwrap();
        assert!(obj.render().contains("%cube(size = [2, 2, 2], center = true);"));

        let err = Object::from_solid(Solid::empty_union())
            .show_bounding_box()
            .unwrap_err();
        assert_eq!(err, Error::MissingBoundingBox("pmin"));
    }
}
