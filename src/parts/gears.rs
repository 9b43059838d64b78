// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Spur and worm gears from `gears.scad`
//!
//! The tooth geometry comes from the library; anchors are computed from the
//! gear parameters with an equivalent cylinder.

use crate::ast::Arg;
use crate::error::{Error, Result};
use crate::geometry::{AnchorPoints, Axis, Cylinder, Point, Vector};
use crate::io::ScadLibrary;
use crate::object::Object;
use crate::utils::math::sin_deg;
use std::f64::consts::PI;

const GEARS: ScadLibrary = ScadLibrary::new("vendored/gears/gears.scad");

/// Spur gear centered on the origin, anchored like a cylinder of its pitch
/// diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SpurGear {
    module: f64,
    teeth: u32,
    h: f64,
    bore_d: f64,
    pressure_angle: f64,
    lead_angle: f64,
    optimized: bool,
    axis: Axis,
}

impl SpurGear {
    pub fn new(module: f64, teeth: u32, h: f64) -> Self {
        Self {
            module,
            teeth,
            h,
            bore_d: 0.0,
            pressure_angle: 20.0,
            lead_angle: 0.0,
            optimized: true,
            axis: Axis::Z,
        }
    }

    pub fn bore_d(mut self, bore_d: f64) -> Self {
        self.bore_d = bore_d;
        self
    }

    pub fn pressure_angle(mut self, degrees: f64) -> Self {
        self.pressure_angle = degrees;
        self
    }

    /// Helix angle; negative for a gear meshing with a [`WormGear`].
    pub fn lead_angle(mut self, degrees: f64) -> Self {
        self.lead_angle = degrees;
        self
    }

    pub fn optimized(mut self, optimized: bool) -> Self {
        self.optimized = optimized;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Pitch diameter
    pub fn d(&self) -> f64 {
        self.module * f64::from(self.teeth)
    }

    pub fn r(&self) -> f64 {
        self.d() / 2.0
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn build(&self) -> Result<Object> {
        if self.teeth == 0 || self.module <= 0.0 {
            return Err(Error::invalid_parameter(
                "a spur gear needs a positive module and at least one tooth",
            ));
        }
        let equivalent = Cylinder::new().d(self.d()).h(self.h).axis(self.axis).build()?;
        let mut anchors = AnchorPoints::new();
        anchors.copy_from(equivalent.anchors())?;

        let width = self.h;
        // turn the teeth to line up with the matching worm thread
        let gamma = -90.0 * width * sin_deg(-self.lead_angle) / (PI * self.r());
        let solid = GEARS
            .call(
                "spur_gear",
                vec![
                    Arg::positional(self.module),
                    Arg::positional(self.teeth),
                    Arg::positional(width),
                    Arg::positional(self.bore_d),
                    Arg::positional(self.pressure_angle),
                    Arg::positional(self.lead_angle),
                    Arg::positional(self.optimized),
                ],
            )
            .translate(Vector::new(0.0, 0.0, -width / 2.0))
            .rotate(Vector::new(0.0, 0.0, gamma))
            .rotate(self.axis.rotation());
        Ok(Object::new(solid, anchors))
    }
}

/// Worm lying along the y axis, centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct WormGear {
    module: f64,
    thread_starts: u32,
    length: f64,
    bore_d: f64,
    pressure_angle: f64,
    lead_angle: f64,
}

impl WormGear {
    pub fn new(module: f64, thread_starts: u32, length: f64) -> Self {
        Self {
            module,
            thread_starts,
            length,
            bore_d: 0.0,
            pressure_angle: 20.0,
            lead_angle: 10.0,
        }
    }

    pub fn bore_d(mut self, bore_d: f64) -> Self {
        self.bore_d = bore_d;
        self
    }

    pub fn pressure_angle(mut self, degrees: f64) -> Self {
        self.pressure_angle = degrees;
        self
    }

    pub fn lead_angle(mut self, degrees: f64) -> Self {
        self.lead_angle = degrees;
        self
    }

    /// Pitch radius
    pub fn r(&self) -> f64 {
        self.module * f64::from(self.thread_starts) / (2.0 * sin_deg(self.lead_angle))
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn build(&self) -> Result<Object> {
        if self.thread_starts == 0 || !(self.lead_angle > 0.0 && self.lead_angle < 90.0) {
            return Err(Error::invalid_parameter(format!(
                "a worm needs at least one thread start and a lead angle in (0, 90), got {}",
                self.lead_angle
            )));
        }
        let r = self.r();
        let half = self.length / 2.0;
        let mut anchors = AnchorPoints::new();
        anchors.set_bounding_box(Point::new(-r, -half, -r), Point::new(r, half, r));

        let solid = GEARS
            .call(
                "worm",
                vec![
                    Arg::positional(self.module),
                    Arg::positional(self.thread_starts),
                    Arg::positional(self.length),
                    Arg::positional(self.bore_d),
                    Arg::positional(self.pressure_angle),
                    Arg::positional(self.lead_angle),
                    Arg::named("together_built", true),
                ],
            )
            // lay it along y, threads in phase with SpurGear
            .rotate(Vector::new(90.0, 180.0 / f64::from(self.thread_starts), 0.0))
            .translate(Vector::new(0.0, half, 0.0));
        Ok(Object::new(solid, anchors))
    }
}

/// Matching worm and spur gears sharing one set of tooth parameters.
pub struct WormFactory;

impl WormFactory {
    pub const MODULE: f64 = 1.0;
    pub const THREAD_STARTS: u32 = 2;
    pub const PRESSURE_ANGLE: f64 = 28.0;
    pub const LEAD_ANGLE: f64 = 10.0;

    pub fn spur(teeth: u32, h: f64) -> SpurGear {
        SpurGear::new(Self::MODULE, teeth, h)
            .pressure_angle(Self::PRESSURE_ANGLE)
            .lead_angle(-Self::LEAD_ANGLE)
    }

    pub fn worm(length: f64) -> WormGear {
        WormGear::new(Self::MODULE, Self::THREAD_STARTS, length)
            .pressure_angle(Self::PRESSURE_ANGLE)
            .lead_angle(Self::LEAD_ANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{SolidKind, TransformOp};
    use approx::assert_relative_eq;

    #[test]
    fn test_spur_anchors_match_cylinder() {
        let spur = SpurGear::new(1.0, 24, 3.0).axis(Axis::X);
        assert_eq!(spur.d(), 24.0);
        let gear = spur.build().unwrap();
        let cylinder = Cylinder::new().d(24.0).h(3.0).axis(Axis::X).build().unwrap();
        assert_eq!(gear.anchors(), cylinder.anchors());
    }

    #[test]
    fn test_spur_shares_axis_rotation() {
        let gear = SpurGear::new(1.0, 24, 3.0).axis(Axis::Y).build().unwrap();
        match &gear.solid().kind {
            SolidKind::Transform {
                op: TransformOp::Rotate(angles),
                ..
            } => assert_eq!(*angles, Axis::Y.rotation()),
            other => panic!("expected a rotation, got {other:?}"),
        }
        assert!(gear.solid().to_string().contains("spur_gear(1, 24, 3, 0, 20, 0, true);"));
    }

    #[test]
    fn test_worm_radius() {
        let worm = WormFactory::worm(15.0);
        assert_relative_eq!(worm.r(), 1.0 / sin_deg(10.0), epsilon = 1e-12);
        assert_relative_eq!(worm.r(), 5.75877, epsilon = 1e-5);

        let obj = worm.build().unwrap();
        let size = obj.anchor("pmax").unwrap() - obj.anchor("pmin").unwrap();
        assert_relative_eq!(size.y, 15.0);
        assert_relative_eq!(size.x, 2.0 * worm.r());
        assert!(obj.solid().to_string().contains("together_built = true"));
    }

    #[test]
    fn test_worm_meshes_with_spur() {
        let spur = WormFactory::spur(24, 2.0).bore_d(3.2).build().unwrap();
        let worm = WormFactory::worm(15.0)
            .build()
            .unwrap()
            .move_to([("left", spur.anchor("right").unwrap())])
            .unwrap();
        assert_relative_eq!(
            worm.anchor("center").unwrap().x.unwrap(),
            12.0 + WormFactory::worm(15.0).r()
        );
    }

    #[test]
    fn test_invalid_gears() {
        assert!(SpurGear::new(1.0, 0, 2.0).build().is_err());
        assert!(WormGear::new(1.0, 2, 10.0).lead_angle(0.0).build().is_err());
    }
}
