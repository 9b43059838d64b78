// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive shapes
//!
//! Every primitive is centered on the origin and derives its anchors from its
//! parameters alone:
//!
//! - `center`
//! - `pmin`, `pmax`
//! - `left`, `right`
//! - `front`, `back`
//! - `bottom`, `top`

use super::{AnchorPoints, Axis, Point, Vector};
use crate::ast::Solid;
use crate::error::{Error, Result};
use crate::object::Object;

/// Resolve a radius/diameter pair where exactly one side is given.
pub fn radius_and_diameter(
    r: Option<f64>,
    d: Option<f64>,
    names: (&'static str, &'static str),
) -> Result<(f64, f64)> {
    let (r, d) = match (r, d) {
        (Some(r), None) => (r, r * 2.0),
        (None, Some(d)) => (d / 2.0, d),
        _ => {
            return Err(Error::RadiusOrDiameter {
                radius: names.0,
                diameter: names.1,
            })
        }
    };
    if !(r.is_finite() && r >= 0.0) {
        return Err(Error::invalid_parameter(format!(
            "`{}` must be a non-negative number, got {r}",
            names.0
        )));
    }
    Ok((r, d))
}

fn box_anchors(pmin: Point, pmax: Point) -> AnchorPoints {
    let mut anchors = AnchorPoints::new();
    anchors.set_bounding_box(pmin, pmax);
    anchors
}

/// Box centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    size: Vector,
}

impl Cube {
    pub fn new(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            size: Vector::new(sx, sy, sz),
        }
    }

    /// Cube with the same size on every side.
    pub fn uniform(s: f64) -> Self {
        Self::new(s, s, s)
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn build(self) -> Object {
        let half = self.size / 2.0;
        let pmax = Point::new(half.x, half.y, half.z);
        let pmin = Point::O - half;
        Object::new(Solid::cube(self.size, true), box_anchors(pmin, pmax))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sphere {
    r: Option<f64>,
    d: Option<f64>,
    segments: Option<u32>,
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn d(mut self, d: f64) -> Self {
        self.d = Some(d);
        self
    }

    pub fn segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }

    pub fn build(self) -> Result<Object> {
        let (r, d) = radius_and_diameter(self.r, self.d, ("r", "d"))?;
        let anchors = box_anchors(Point::new(-r, -r, -r), Point::new(r, r, r));
        Ok(Object::new(Solid::sphere(d, self.segments), anchors))
    }
}

/// Height of a round body: `h` runs along the chosen axis, `hx`/`hy`/`hz`
/// name the axis directly.
#[derive(Debug, Clone, Copy, Default)]
struct Height {
    h: Option<f64>,
    hx: Option<f64>,
    hy: Option<f64>,
    hz: Option<f64>,
    axis: Axis,
}

impl Height {
    fn resolve(&self) -> Result<(f64, Axis)> {
        let given = [self.h, self.hx, self.hy, self.hz];
        if given.iter().filter(|h| h.is_some()).count() != 1 {
            return Err(Error::Height);
        }
        let resolved = match (self.h, self.hx, self.hy, self.hz) {
            (Some(h), ..) => (h, self.axis),
            (_, Some(h), ..) => (h, Axis::X),
            (_, _, Some(h), _) => (h, Axis::Y),
            (.., Some(h)) => (h, Axis::Z),
            _ => return Err(Error::Height),
        };
        Ok(resolved)
    }
}

/// Solid of revolution with radii `r1` at the bottom and `r2` at the top,
/// laid along `axis`. Its box is the one of the widest radius.
fn round_body(r1: f64, r2: f64, h: f64, axis: Axis, segments: Option<u32>) -> Object {
    let (pmin, pmax) = axis.cylinder_bounds(r1.max(r2), h);
    let mut solid = Solid::cylinder(h, r1, r2, segments);
    if axis != Axis::Z {
        solid = solid.rotate(axis.rotation());
    }
    Object::new(solid, box_anchors(pmin, pmax))
}

macro_rules! height_setters {
    () => {
        /// Height along the configured axis (z unless [`Self::axis`] says otherwise).
        pub fn h(mut self, h: f64) -> Self {
            self.height.h = Some(h);
            self
        }

        pub fn hx(mut self, h: f64) -> Self {
            self.height.hx = Some(h);
            self
        }

        pub fn hy(mut self, h: f64) -> Self {
            self.height.hy = Some(h);
            self
        }

        pub fn hz(mut self, h: f64) -> Self {
            self.height.hz = Some(h);
            self
        }

        pub fn axis(mut self, axis: Axis) -> Self {
            self.height.axis = axis;
            self
        }

        pub fn segments(mut self, segments: u32) -> Self {
            self.segments = Some(segments);
            self
        }
    };
}

/// Cylinder centered on the origin.
///
/// Give exactly one of `r`/`d` and exactly one of `h`/`hx`/`hy`/`hz`.
#[derive(Debug, Clone, Default)]
pub struct Cylinder {
    r: Option<f64>,
    d: Option<f64>,
    height: Height,
    segments: Option<u32>,
}

impl Cylinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn d(mut self, d: f64) -> Self {
        self.d = Some(d);
        self
    }

    height_setters!();

    pub fn build(self) -> Result<Object> {
        let (r, _) = radius_and_diameter(self.r, self.d, ("r", "d"))?;
        let (h, axis) = self.height.resolve()?;
        Ok(round_body(r, r, h, axis, self.segments))
    }
}

/// Truncated cone
#[derive(Debug, Clone, Default)]
pub struct TCone {
    r1: Option<f64>,
    d1: Option<f64>,
    r2: Option<f64>,
    d2: Option<f64>,
    height: Height,
    segments: Option<u32>,
}

impl TCone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r1(mut self, r: f64) -> Self {
        self.r1 = Some(r);
        self
    }

    pub fn d1(mut self, d: f64) -> Self {
        self.d1 = Some(d);
        self
    }

    pub fn r2(mut self, r: f64) -> Self {
        self.r2 = Some(r);
        self
    }

    pub fn d2(mut self, d: f64) -> Self {
        self.d2 = Some(d);
        self
    }

    height_setters!();

    pub fn build(self) -> Result<Object> {
        let (r1, _) = radius_and_diameter(self.r1, self.d1, ("r1", "d1"))?;
        let (r2, _) = radius_and_diameter(self.r2, self.d2, ("r2", "d2"))?;
        let (h, axis) = self.height.resolve()?;
        Ok(round_body(r1, r2, h, axis, self.segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{SolidKind, TransformOp};
    use crate::geometry::BOX_ANCHORS;

    #[test]
    fn test_cube_anchors() {
        let cube = Cube::new(2.0, 4.0, 6.0).build();
        assert_eq!(cube.anchor("pmin").unwrap(), Point::new(-1.0, -2.0, -3.0));
        assert_eq!(cube.anchor("pmax").unwrap(), Point::new(1.0, 2.0, 3.0));
        assert_eq!(cube.anchor("center").unwrap(), Point::O);
        assert_eq!(
            cube.anchor("pmax").unwrap() - cube.anchor("pmin").unwrap(),
            Vector::new(2.0, 4.0, 6.0)
        );
        assert_eq!(Cube::uniform(3.0).size(), Vector::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_radius_or_diameter() {
        assert_eq!(radius_and_diameter(Some(2.0), None, ("r", "d")).unwrap(), (2.0, 4.0));
        assert_eq!(radius_and_diameter(None, Some(3.0), ("r", "d")).unwrap(), (1.5, 3.0));

        let both = Sphere::new().r(1.0).d(2.0).build().unwrap_err();
        assert_eq!(
            both,
            Error::RadiusOrDiameter {
                radius: "r",
                diameter: "d"
            }
        );
        assert!(Sphere::new().build().is_err());
        assert!(matches!(
            radius_and_diameter(Some(-1.0), None, ("r", "d")),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_sphere() {
        let sphere = Sphere::new().r(2.0).build().unwrap();
        assert_eq!(sphere.anchor("top").unwrap(), Point::at_z(2.0));
        assert_eq!(sphere.solid(), &Solid::sphere(4.0, None));
    }

    #[test]
    fn test_cylinder_height_is_exclusive() {
        assert_eq!(Cylinder::new().r(1.0).build().unwrap_err(), Error::Height);
        assert_eq!(
            Cylinder::new().r(1.0).h(2.0).hx(2.0).build().unwrap_err(),
            Error::Height
        );
        assert_eq!(
            Cylinder::new().h(2.0).build().unwrap_err(),
            Error::RadiusOrDiameter {
                radius: "r",
                diameter: "d"
            }
        );
    }

    #[test]
    fn test_cylinder_axis_swaps_anchors() {
        let z = Cylinder::new().r(2.0).h(10.0).build().unwrap();
        let x = Cylinder::new().r(2.0).h(10.0).axis(Axis::X).build().unwrap();
        assert_eq!(z.anchors().names(), x.anchors().names());
        assert_eq!(z.anchors().len(), BOX_ANCHORS.len());

        assert_eq!(z.anchor("top").unwrap(), Point::at_z(5.0));
        assert_eq!(z.anchor("right").unwrap(), Point::at_x(2.0));
        assert_eq!(x.anchor("top").unwrap(), Point::at_z(2.0));
        assert_eq!(x.anchor("right").unwrap(), Point::at_x(5.0));

        match &x.solid().kind {
            SolidKind::Transform {
                op: TransformOp::Rotate(angles),
                ..
            } => assert_eq!(*angles, Vector::new(0.0, 90.0, 0.0)),
            other => panic!("expected a rotation, got {other:?}"),
        }
        assert!(matches!(z.solid().kind, SolidKind::Cylinder { .. }));
    }

    #[test]
    fn test_hy_means_axis_y() {
        let a = Cylinder::new().d(4.0).hy(6.0).build().unwrap();
        let b = Cylinder::new().d(4.0).h(6.0).axis(Axis::Y).build().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.anchor("back").unwrap(), Point::at_y(3.0));
    }

    #[test]
    fn test_tcone_uses_widest_radius() {
        let cone = TCone::new().r1(1.0).d2(6.0).h(4.0).build().unwrap();
        assert_eq!(cone.anchor("pmax").unwrap(), Point::new(3.0, 3.0, 2.0));
        match &cone.solid().kind {
            SolidKind::Cylinder { r1, r2, .. } => assert_eq!((*r1, *r2), (1.0, 3.0)),
            other => panic!("expected a cylinder, got {other:?}"),
        }
        assert_eq!(
            TCone::new().r1(1.0).h(4.0).build().unwrap_err(),
            Error::RadiusOrDiameter {
                radius: "r2",
                diameter: "d2"
            }
        );
    }
}
