// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Ball bearings of the 6xx series

use super::calibration::bearing_hole_clearance;
use super::misc::ring;
use crate::error::{Error, Result};
use crate::geometry::{Axis, Cylinder};
use crate::object::{CustomObject, Object};
use tracing::warn;

pub const STEEL: [f64; 3] = [0.65, 0.67, 0.72];

/// Rim width of the inner and outer rings (measured on a 608)
const RIM: f64 = 1.90;

/// Hole clearance for models without calibration data
const DEFAULT_HOLE_CLEARANCE: f64 = 0.1;

/// Model, bore diameter, outer diameter, height (mm)
const DIMENSIONS: &[(&str, f64, f64, f64)] = &[
    ("603", 3.0, 9.0, 5.0),
    ("604", 4.0, 12.0, 4.0),
    ("605", 5.0, 14.0, 5.0),
    ("606", 6.0, 17.0, 6.0),
    ("607", 7.0, 19.0, 6.0),
    ("608", 8.0, 22.0, 7.0),
    ("609", 9.0, 24.0, 7.0),
    ("623", 3.0, 10.0, 4.0),
    ("624", 4.0, 13.0, 5.0),
    ("625", 5.0, 16.0, 5.0),
    ("626", 6.0, 19.0, 6.0),
    ("627", 7.0, 22.0, 7.0),
    ("628", 8.0, 24.0, 8.0),
    ("629", 9.0, 26.0, 8.0),
    ("633", 3.0, 13.0, 5.0),
    ("634", 4.0, 16.0, 5.0),
    ("635", 5.0, 19.0, 6.0),
    ("636", 6.0, 22.0, 7.0),
    ("637", 7.0, 26.0, 9.0),
    ("638", 8.0, 28.0, 9.0),
    ("639", 9.0, 30.0, 10.0),
    ("673", 3.0, 6.0, 2.5),
    ("674", 4.0, 7.0, 2.5),
    ("675", 5.0, 8.0, 2.5),
    ("676", 6.0, 10.0, 3.0),
    ("677", 7.0, 11.0, 3.0),
    ("678", 8.0, 12.0, 3.5),
    ("683", 3.0, 7.0, 3.0),
    ("684", 4.0, 9.0, 4.0),
    ("685", 5.0, 11.0, 5.0),
    ("686", 6.0, 13.0, 5.0),
    ("687", 7.0, 14.0, 5.0),
    ("688", 8.0, 16.0, 5.0),
    ("689", 9.0, 17.0, 5.0),
    ("693", 3.0, 8.0, 4.0),
    ("694", 4.0, 11.0, 4.0),
    ("695", 5.0, 13.0, 4.0),
    ("696", 6.0, 15.0, 5.0),
    ("697", 7.0, 17.0, 5.0),
    ("698", 8.0, 19.0, 6.0),
    ("699", 9.0, 20.0, 6.0),
];

/// Known bearing models
pub fn bearing_models() -> impl Iterator<Item = &'static str> {
    DIMENSIONS.iter().map(|(model, ..)| *model)
}

/// Bearing with the anchors of its outer ring
#[derive(Debug, Clone, PartialEq)]
pub struct Bearing {
    model: &'static str,
    hole_d: f64,
    d: f64,
    h: f64,
    axis: Axis,
}

impl Bearing {
    pub fn new(model: &str) -> Result<Self> {
        let &(model, hole_d, d, h) = DIMENSIONS
            .iter()
            .find(|(name, ..)| *name == model)
            .ok_or_else(|| Error::invalid_parameter(format!("unknown bearing model `{model}`")))?;
        Ok(Self {
            model,
            hole_d,
            d,
            h,
            axis: Axis::Z,
        })
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Bore diameter
    pub fn hole_d(&self) -> f64 {
        self.hole_d
    }

    /// Outer diameter
    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn inner_rim_d(&self) -> f64 {
        self.hole_d + RIM
    }

    pub fn build(&self) -> Result<Object> {
        let outer = ring(self.d, self.d - RIM, self.h, self.axis)?.color(STEEL);
        let inner = ring(self.inner_rim_d(), self.hole_d, self.h, self.axis)?.color(STEEL);

        let mut bearing = CustomObject::new().add_part("outer", outer);
        if self.inner_rim_d() < self.d - RIM {
            let seal = ring(self.d - RIM, self.inner_rim_d(), self.h * 0.8, self.axis)?
                .color("dodgerblue");
            bearing = bearing.add_part("seal", seal);
        } else {
            warn!(
                model = self.model,
                "bearing rims overlap, leaving out the seal"
            );
        }
        Ok(bearing.add_part("inner", inner).expose_anchors_of("outer")?.build())
    }

    /// Pocket for press-fitting this bearing, `h` deep along the bearing axis.
    ///
    /// Without an explicit `clearance`, the calibrated one for this model is
    /// used when there is one.
    pub fn hole(&self, h: f64, clearance: Option<f64>) -> Result<Object> {
        let clearance = clearance
            .or_else(|| bearing_hole_clearance(self.model))
            .unwrap_or(DEFAULT_HOLE_CLEARANCE);
        Cylinder::new()
            .d(self.d + clearance)
            .h(h)
            .axis(self.axis)
            .build()
    }
}
