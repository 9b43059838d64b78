// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Photography hardware

use super::calibration::manfrotto_rubber_pad_clearance;
use crate::geometry::{AnchorPoints, Cube, Point};
use crate::io::ScadLibrary;
use crate::object::Object;

const MANFROTTO: ScadLibrary = ScadLibrary::new("vendored/photo/manfrotto-200PL-003.scad");

/// Manfrotto 200PL quick release plate.
///
/// The library draws it with a corner on the origin, so its box spans
/// `(0, 0, 0)..(SX, SY, SZ)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manfrotto200PL;

impl Manfrotto200PL {
    const TOP_PLATE_Y: f64 = 47.6 - 5.2;

    pub const SX: f64 = 52.6;
    pub const SY: f64 = Self::TOP_PLATE_Y;
    pub const SZ: f64 = 9.85;

    pub fn build(self) -> Object {
        let mut anchors = AnchorPoints::new();
        anchors.set_bounding_box(Point::O, Point::new(Self::SX, Self::SY, Self::SZ));
        Object::new(MANFROTTO.call("plate", Vec::new()), anchors)
    }

    /// Box to cut from a mount so that the plate with its rubber pad fits.
    pub fn socket(self) -> Object {
        let clearance = manfrotto_rubber_pad_clearance();
        Cube::new(
            Self::SX + clearance.x,
            Self::SY + clearance.y,
            Self::SZ + clearance.z,
        )
        .build()
    }
}
