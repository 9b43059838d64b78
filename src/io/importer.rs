// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! External `.scad` libraries
//!
//! Modules of a library are not parsed; a call is recorded in the solid tree
//! and the library is pulled in with `use <...>;` when rendering.

use crate::ast::{Arg, Solid, SolidKind};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A `.scad` file whose modules can be called from a solid tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScadLibrary {
    path: &'static str,
}

impl ScadLibrary {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Call `module` with the given arguments.
    pub fn call(&self, module: &str, args: Vec<Arg>) -> Solid {
        Solid::new(SolidKind::ModuleCall {
            library: self.path.to_string(),
            module: module.to_string(),
            args,
        })
    }
}

/// Locate `library` under `search_paths`, first match wins.
///
/// Returns the path as written when no search path contains it, leaving
/// resolution to OpenSCAD's own library lookup.
pub fn resolve_library(library: &str, search_paths: &[PathBuf]) -> String {
    if Path::new(library).is_absolute() {
        return library.to_string();
    }
    for dir in search_paths {
        let candidate = dir.join(library);
        if candidate.is_file() {
            debug!(library, path = %candidate.display(), "resolved library");
            return candidate.display().to_string();
        }
    }
    debug!(library, "library not found in search paths");
    library.to_string()
}
