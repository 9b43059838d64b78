// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Derived shapes: annular slices and hexagons

use crate::ast::Arg;
use crate::error::{Error, Result};
use crate::geometry::{radius_and_diameter, AnchorPoints, Axis, Cylinder, Vector};
use crate::io::ScadLibrary;
use crate::object::Object;
use crate::utils::math::cos_deg;

const SHAPES_2D: ScadLibrary = ScadLibrary::new("MCAD/2Dshapes.scad");

/// Extruded annular sector between radii `r1 < r2`.
///
/// Anchors describe the full outer cylinder whatever the sweep, so a partial
/// slice positions exactly like a complete ring.
#[derive(Debug, Clone)]
pub struct DonutSlice {
    h: f64,
    r1: Option<f64>,
    d1: Option<f64>,
    r2: Option<f64>,
    d2: Option<f64>,
    start_angle: f64,
    end_angle: f64,
    axis: Axis,
}

impl DonutSlice {
    pub fn new(h: f64) -> Self {
        Self {
            h,
            r1: None,
            d1: None,
            r2: None,
            d2: None,
            start_angle: 0.0,
            end_angle: 360.0,
            axis: Axis::Z,
        }
    }

    /// Inner radius
    pub fn r1(mut self, r: f64) -> Self {
        self.r1 = Some(r);
        self
    }

    pub fn d1(mut self, d: f64) -> Self {
        self.d1 = Some(d);
        self
    }

    /// Outer radius
    pub fn r2(mut self, r: f64) -> Self {
        self.r2 = Some(r);
        self
    }

    pub fn d2(mut self, d: f64) -> Self {
        self.d2 = Some(d);
        self
    }

    /// Sweep in degrees, counterclockwise from +x.
    pub fn angles(mut self, start: f64, end: f64) -> Self {
        self.start_angle = start;
        self.end_angle = end;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn build(self) -> Result<Object> {
        let (r1, _) = radius_and_diameter(self.r1, self.d1, ("r1", "d1"))?;
        let (r2, _) = radius_and_diameter(self.r2, self.d2, ("r2", "d2"))?;
        if r1 >= r2 {
            return Err(Error::invalid_parameter(format!(
                "inner radius {r1} must be smaller than outer radius {r2}"
            )));
        }

        let bounds = Cylinder::new().r(r2).h(self.h).axis(self.axis).build()?;
        let mut anchors = AnchorPoints::new();
        anchors.copy_from(bounds.anchors())?;

        let profile = SHAPES_2D.call(
            "donutSlice",
            vec![
                Arg::positional(r1),
                Arg::positional(r2),
                Arg::positional(self.start_angle),
                Arg::positional(self.end_angle),
            ],
        );
        let mut solid = profile
            .linear_extrude(self.h)
            .translate(Vector::new(0.0, 0.0, -self.h / 2.0));
        if self.axis != Axis::Z {
            solid = solid.rotate(self.axis.rotation());
        }
        Ok(Object::new(solid, anchors))
    }
}

/// Hexagonal prism circumscribing the cylinder of radius `r` (diameter `d`):
/// `d` is the distance between two opposite sides.
pub fn circumscribed_hexagon(h: f64, axis: Axis, r: Option<f64>, d: Option<f64>) -> Result<Object> {
    let (r, _) = radius_and_diameter(r, d, ("r", "d"))?;
    Cylinder::new()
        .r(r / cos_deg(30.0))
        .h(h)
        .axis(axis)
        .segments(6)
        .build()
}

/// Hex key (allen key) of the given side-to-side size.
pub fn hex_key(size: f64, h: f64, axis: Axis) -> Result<Object> {
    circumscribed_hexagon(h, axis, None, Some(size))
}
