// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rings, bolt holes and other small hardware

use super::calibration::TEFLON_GLIDE_GROOVE_CLEARANCE;
use crate::error::{Error, Result};
use crate::geometry::{Axis, Cylinder, Point};
use crate::object::{CustomObject, Object};
use crate::utils::math::{check_dimension, EPS};

/// Default clearance added to a bolt hole diameter
pub const BOLT_CLEARANCE: f64 = 0.2;

/// Cylinder of diameter `outer_d` with a through bore of `inner_d`.
///
/// Anchors are those of the outer cylinder.
pub fn ring(outer_d: f64, inner_d: f64, h: f64, axis: Axis) -> Result<Object> {
    if inner_d >= outer_d {
        return Err(Error::invalid_parameter(format!(
            "ring bore {inner_d} must be smaller than its diameter {outer_d}"
        )));
    }
    let outer = Cylinder::new().d(outer_d).h(h).axis(axis).build()?;
    let bore = Cylinder::new().d(inner_d).h(h + EPS).axis(axis).build()?;
    Ok(Object::difference([outer, bore]))
}

/// Hole for a bolt of diameter `d`, slightly taller than `h` so that it cuts
/// cleanly through a plate of that thickness.
pub fn bolt_hole(d: f64, h: f64, clearance: f64) -> Result<Object> {
    Cylinder::new().d(d + clearance).h(h + EPS * 2.0).build()
}

/// Self-adhesive PTFE furniture glide (measured by hand).
///
/// A dark base ring with a smaller hole, topped by a lighter ring with a wide
/// bore. Anchored as one cylinder centered on the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeflonGlide;

impl TeflonGlide {
    pub const D: f64 = 19.0;
    pub const INNER_D: f64 = 9.2;
    pub const HOLE_D: f64 = 4.3;
    pub const BASE_H: f64 = 3.5;
    pub const UPPER_H: f64 = 1.9;
    pub const H: f64 = Self::BASE_H + Self::UPPER_H;

    pub fn build(self) -> Result<Object> {
        let base = ring(Self::D, Self::HOLE_D, Self::BASE_H, Axis::Z)?
            .color([0.3, 0.3, 0.3])
            .move_to([("bottom", Point::O)])?;
        let upper = ring(Self::D, Self::INNER_D, Self::UPPER_H, Axis::Z)?
            .move_to([("bottom", base.anchor("top")? - EPS)])?
            .color("LightSteelBlue");

        let stacked = upper.anchor("top")? - base.anchor("bottom")?;
        check_dimension("teflon glide height", stacked.z, Self::H);

        Ok(CustomObject::new()
            .add_part("base", base)
            .add_part("upper", upper)
            .translate(0.0, 0.0, -Self::H / 2.0)
            .bounding_box_from_parts(&["base", "upper"])?
            .set_anchor("center", Point::O)
            .build())
    }

    /// Pocket holding a glide, `depth` deep.
    pub fn groove(depth: f64) -> Result<Object> {
        Cylinder::new()
            .d(Self::D + TEFLON_GLIDE_GROOVE_CLEARANCE)
            .h(depth)
            .build()
    }
}
