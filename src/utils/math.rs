// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use tracing::warn;

/// Small overlap used to avoid coincident faces in boolean operations
pub const EPS: f64 = 0.001;

/// Tolerance for dimensional cross-checks between parts
pub const DIMENSION_TOLERANCE: f64 = 0.01;

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

pub fn in2mm(inches: f64) -> f64 {
    inches * 25.4
}

/// Compare a measured dimension with its declared value.
///
/// A mismatch is reported as a warning and construction goes on, so the
/// model can still be rendered and inspected.
pub fn check_dimension(what: &str, measured: f64, declared: f64) -> bool {
    let ok = approx_eq(measured, declared, DIMENSION_TOLERANCE);
    if !ok {
        warn!(what, measured, declared, "dimension mismatch");
    }
    ok
}
