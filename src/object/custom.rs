// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Declarative assemblies built from named parts

use super::{Object, PartRef};
use crate::ast::Solid;
use crate::error::Result;
use crate::geometry::Point;

/// Builder for objects implemented in terms of other objects.
///
/// Every part added by name is unioned into the assembly and stays reachable
/// through [`Object::part`] and dotted anchor paths:
///
/// ```
/// use partscad::{CustomObject, Cube, Point, Sphere};
///
/// # fn main() -> partscad::Result<()> {
/// let body = Cube::new(10.0, 10.0, 10.0).build();
/// let head = Sphere::new().d(5.0).build()?.move_to([("bottom", body.anchor("top")?)])?;
/// let puppet = CustomObject::new()
///     .add_part("body", body)
///     .add_part("head", head)
///     .expose_anchors_of("body")?
///     .build()
///     .move_to([("center", Point::new(20.0, 20.0, 20.0))])?;
///
/// assert_eq!(puppet.lookup("head.center")?, Point::new(20.0, 20.0, 27.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CustomObject {
    object: Object,
}

impl CustomObject {
    pub fn new() -> Self {
        Self {
            object: Object::from_solid(Solid::empty_union()),
        }
    }

    /// Union `part` into the assembly under `name`.
    pub fn add_part(mut self, name: impl Into<String>, part: Object) -> Self {
        let index = self.object.children.len();
        self.object.union_in_place(part);
        self.object.register_part(name.into(), PartRef::One(index));
        self
    }

    /// Union every object of `parts`, reachable as `name.0`, `name.1`, ...
    pub fn add_parts(
        mut self,
        name: impl Into<String>,
        parts: impl IntoIterator<Item = Object>,
    ) -> Self {
        let mut indices = Vec::new();
        for part in parts {
            indices.push(self.object.children.len());
            self.object.union_in_place(part);
        }
        self.object.register_part(name.into(), PartRef::Group(indices));
        self
    }

    /// Subtract `part` from the assembly, keeping it reachable under `name`.
    pub fn sub_part(mut self, name: impl Into<String>, part: Object) -> Self {
        let index = self.object.children.len();
        self.object.subtract_in_place(part);
        self.object.register_part(name.into(), PartRef::One(index));
        self
    }

    /// Union an anonymous part.
    pub fn add(mut self, part: Object) -> Self {
        self.object.union_in_place(part);
        self
    }

    /// Subtract an anonymous part.
    pub fn subtract(mut self, part: Object) -> Self {
        self.object.subtract_in_place(part);
        self
    }

    pub fn part(&self, name: &str) -> Result<&Object> {
        self.object.part(name)
    }

    /// Anchor of the assembly itself, or of a part via a dotted path.
    pub fn anchor(&self, path: &str) -> Result<Point> {
        self.object.lookup(path)
    }

    pub fn set_anchor(mut self, name: impl Into<String>, point: Point) -> Self {
        self.object.anchors.set(name, point);
        self
    }

    /// Make the anchors of part `name` the assembly's own.
    pub fn expose_anchors_of(mut self, name: &str) -> Result<Self> {
        let anchors = self.object.part(name)?.anchors.clone();
        self.object.anchors.copy_from(&anchors)?;
        Ok(self)
    }

    /// Box anchors enclosing the boxes of the named parts (groups included).
    pub fn bounding_box_from_parts(mut self, names: &[&str]) -> Result<Self> {
        let mut corners = Vec::new();
        for name in names {
            for part in self.object.part_group(name)? {
                let bbox = part.bounding_box()?;
                corners.extend([bbox.min, bbox.max]);
            }
        }
        self.object.anchors.set_bounding_box_from(&corners, true)?;
        Ok(self)
    }

    pub fn translate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.object = self.object.translate(x, y, z);
        self
    }

    pub fn build(self) -> Object {
        self.object
    }
}

impl Default for CustomObject {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CustomObject> for Object {
    fn from(custom: CustomObject) -> Self {
        custom.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SolidKind;
    use crate::error::Error;
    use crate::geometry::{Cube, Cylinder};

    fn hole(x: f64, y: f64) -> Object {
        Cylinder::new()
            .d(3.0)
            .h(10.0)
            .build()
            .unwrap()
            .translate(x, y, 0.0)
    }

    #[test]
    fn test_parts_are_unioned() {
        let obj = CustomObject::new()
            .add_part("a", Cube::new(1.0, 1.0, 1.0).build())
            .add_part("b", Cube::new(2.0, 2.0, 2.0).build())
            .build();
        assert_eq!(obj.children().len(), 2);
        assert!(matches!(obj.solid().kind, SolidKind::Union(ref c) if c.len() == 2));
        assert_eq!(obj.part("b").unwrap().anchor("top").unwrap(), Point::at_z(1.0));
        assert_eq!(obj.part("c").unwrap_err(), Error::unknown_part("c"));
    }

    #[test]
    fn test_group_of_parts() {
        let holes = [(5.0, 0.0), (-5.0, 0.0), (0.0, 5.0), (0.0, -5.0)].map(|(x, y)| hole(x, y));
        let obj = CustomObject::new()
            .add_parts("holes", holes)
            .bounding_box_from_parts(&["holes"])
            .unwrap()
            .build();
        assert_eq!(obj.part_group("holes").unwrap().len(), 4);
        assert_eq!(obj.lookup("holes.1.center").unwrap(), Point::new(-5.0, 0.0, 0.0));
        assert_eq!(obj.anchor("pmin").unwrap(), Point::new(-6.5, -6.5, -5.0));
        assert_eq!(obj.anchor("center").unwrap(), Point::O);
        assert!(obj.lookup("holes.9.center").is_err());
        assert!(obj.part("holes").is_err());
    }

    #[test]
    fn test_sub_part_is_subtracted() {
        let obj = CustomObject::new()
            .add_part("plate", Cube::new(20.0, 20.0, 2.0).build())
            .sub_part("hole", hole(0.0, 0.0))
            .build();
        assert!(matches!(obj.solid().kind, SolidKind::Difference(ref c) if c.len() == 2));
        assert_eq!(obj.lookup("hole.top").unwrap(), Point::at_z(5.0));
    }

    #[test]
    fn test_renamed_part_keeps_old_child() {
        let obj = CustomObject::new()
            .add_part("x", Cube::new(1.0, 1.0, 1.0).build())
            .add_part("x", Cube::new(3.0, 3.0, 3.0).build())
            .build();
        assert_eq!(obj.children().len(), 2);
        assert_eq!(obj.part("x").unwrap().anchor("top").unwrap(), Point::at_z(1.5));
    }
}
