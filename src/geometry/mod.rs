// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - points, anchors and primitive shapes

mod anchors;
mod axis;
mod bbox;
mod point;
mod primitives;

pub use anchors::{AnchorPoints, Invalidation, BOX_ANCHORS};
pub use axis::Axis;
pub use bbox::BoundingBox;
pub use point::{Point, Vector};
pub use primitives::{radius_and_diameter, Cube, Cylinder, Sphere, TCone};
