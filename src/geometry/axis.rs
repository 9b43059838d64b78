// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! World axes for cylinder-like shapes

use super::{Point, Vector};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The world axis a cylinder-like shape's height runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Euler rotation (degrees) that lays a z-aligned solid along this axis.
    ///
    /// Cylinders, gears and every other round body use this same convention.
    pub fn rotation(&self) -> Vector {
        match self {
            Axis::X => Vector::new(0.0, 90.0, 0.0),
            Axis::Y => Vector::new(-90.0, 0.0, 0.0),
            Axis::Z => Vector::zeros(),
        }
    }

    /// Opposite corners of a centered body of the given radius and height.
    pub fn cylinder_bounds(&self, radius: f64, height: f64) -> (Point, Point) {
        let (r, h) = (radius, height / 2.0);
        match self {
            Axis::X => (Point::new(-h, -r, -r), Point::new(h, r, r)),
            Axis::Y => (Point::new(-r, -h, -r), Point::new(r, h, r)),
            Axis::Z => (Point::new(-r, -r, -h), Point::new(r, r, h)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(Error::UnsupportedAxis(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
