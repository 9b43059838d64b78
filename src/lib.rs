// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! partscad
//!
//! Parametric parts for 3D printing, positioned through named anchor points
//! and rendered to OpenSCAD.
//!
//! Every [`Object`] carries the named points of its bounding box (`top`,
//! `left`, `center`, ...) plus any custom ones. Moving an object moves its
//! anchors and those of every part it was assembled from; scaling or rotating
//! invalidates them so stale positions can never be read silently.

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod models;
pub mod object;
pub mod parts;
pub mod shapes;
pub mod utils;

pub use ast::{Modifier, Solid};
pub use config::{Config, RenderSettings};
pub use error::{Error, Result};
pub use geometry::{AnchorPoints, Axis, BoundingBox, Cube, Cylinder, Point, Sphere, TCone, Vector};
pub use io::ScadRenderer;
pub use object::{CustomObject, Object};
pub use shapes::DonutSlice;

/// Render an object to OpenSCAD source with the default settings
pub fn render(object: &Object) -> String {
    object.render()
}
