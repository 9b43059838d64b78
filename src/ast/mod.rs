// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Solid tree module
//!
//! Defines the OpenSCAD-compatible operations objects are built from

mod node;

pub use node::{Arg, Color, Modifier, Solid, SolidKind, TransformOp, Value};
