// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stepper motors

use crate::error::Result;
use crate::geometry::{AnchorPoints, Axis, Cylinder, Point, Vector};
use crate::io::ScadLibrary;
use crate::object::Object;

const STEP_MOTOR: ScadLibrary = ScadLibrary::new("vendored/motors/StepMotor_28BYJ-48.scad");

/// 28BYJ-48 5V stepper motor, shaft parallel to x.
///
/// Anchored like its cylindrical body, so the shaft sticks out of the box:
/// place the body against a wall and let the shaft go through it. The
/// `shaft` anchor is the line the shaft runs along.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stepper28BYJ48;

impl Stepper28BYJ48 {
    /// Motor body height
    pub const BODY_H: f64 = 18.8;
    /// Motor body diameter
    pub const BODY_D: f64 = 28.25;
    /// Offset of the shaft from the body center
    pub const SHAFT_OFFSET: f64 = 7.875;
    pub const SHAFT_D: f64 = 4.93;
    /// Shaft length above the body
    pub const SHAFT_H: f64 = 9.75;
    /// Mounting hole center-to-center distance
    pub const MOUNT_HOLE_DISTANCE: f64 = 35.0;

    pub fn build(self) -> Result<Object> {
        let body = Cylinder::new()
            .d(Self::BODY_D)
            .h(Self::BODY_H)
            .axis(Axis::X)
            .build()?;
        let mut anchors = AnchorPoints::new();
        anchors.copy_from(body.anchors())?;
        anchors.set("shaft", Point::partial(None, Some(0.0), Some(Self::SHAFT_OFFSET)));

        let solid = STEP_MOTOR
            .call("StepMotor28BYJ", Vec::new())
            .rotate(Vector::new(0.0, -90.0, 0.0));
        Ok(Object::new(solid, anchors))
    }
}
