// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - OpenSCAD export and external library calls

mod exporter;
mod importer;

pub use exporter::ScadRenderer;
pub use importer::{resolve_library, ScadLibrary};
