// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Printer calibration
//!
//! Clearances tuned for an Ender 3 Pro printing PLA. Parts that press-fit a
//! vitamin read them from here.

use crate::geometry::Vector;

/// Extra diameter for a bearing pocket, per bearing model
pub fn bearing_hole_clearance(model: &str) -> Option<f64> {
    match model {
        "604" => Some(0.5),
        "608" => Some(0.7),
        _ => None,
    }
}

pub const TEFLON_GLIDE_GROOVE_CLEARANCE: f64 = 0.8;

/// Extra room around the Manfrotto plate rubber pad, per axis
pub fn manfrotto_rubber_pad_clearance() -> Vector {
    Vector::new(0.5, 0.5, 0.0)
}
