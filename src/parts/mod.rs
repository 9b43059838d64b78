// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vitamins: off-the-shelf hardware modelled with analytic anchors

pub mod calibration;
mod bearing;
mod gears;
mod misc;
mod motors;
mod photo;

pub use bearing::{bearing_models, Bearing, STEEL};
pub use gears::{SpurGear, WormFactory, WormGear};
pub use misc::{bolt_hole, ring, TeflonGlide, BOLT_CLEARANCE};
pub use motors::Stepper28BYJ48;
pub use photo::Manfrotto200PL;
