// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD exporter

use super::importer::resolve_library;
use crate::ast::{Arg, Color, Solid, SolidKind, TransformOp, Value};
use crate::config::{Config, RenderSettings};
use crate::geometry::Vector;
use crate::object::Object;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &str = "    ";

/// Serializes solid trees to OpenSCAD source
#[derive(Debug, Clone, Default)]
pub struct ScadRenderer {
    settings: RenderSettings,
    library_paths: Vec<PathBuf>,
}

impl ScadRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            settings: config.render,
            library_paths: config.library_paths.clone(),
        }
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// `$fn`/`$fa`/`$fs` assignments for the settings that are set.
    pub fn header(&self) -> String {
        let mut header = String::new();
        if let Some(fn_) = self.settings.fn_ {
            header.push_str(&format!("$fn = {fn_};\n"));
        }
        if let Some(fa) = self.settings.fa {
            header.push_str(&format!("$fa = {};\n", number(fa)));
        }
        if let Some(fs) = self.settings.fs {
            header.push_str(&format!("$fs = {};\n", number(fs)));
        }
        header
    }

    /// Complete file: header, library imports, then the statements.
    pub fn render(&self, solid: &Solid) -> String {
        let mut out = self.header();
        for library in solid.libraries() {
            let path = resolve_library(library, &self.library_paths);
            out.push_str(&format!("use <{path}>;\n"));
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.render_body(solid));
        out
    }

    /// Libraries used by `solid` that none of the search paths contain.
    ///
    /// Empty when no search path is configured: OpenSCAD then does its own
    /// lookup for every library.
    pub fn unresolved_libraries<'a>(&self, solid: &'a Solid) -> Vec<&'a str> {
        if self.library_paths.is_empty() {
            return Vec::new();
        }
        solid
            .libraries()
            .into_iter()
            .filter(|library| resolve_library(library, &self.library_paths) == *library)
            .collect()
    }

    /// Statements only, without header or imports.
    pub fn render_body(&self, solid: &Solid) -> String {
        let mut out = String::new();
        write_solid(&mut out, solid, 0);
        out
    }

    /// Render `object` and write it to `path`, creating parent directories.
    pub fn render_to_file(&self, object: &Object, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let text = self.render(object.solid());
        fs::write(path, &text).with_context(|| format!("Failed to write SCAD file: {:?}", path))?;
        debug!(path = %path.display(), bytes = text.len(), "rendered object");
        Ok(())
    }
}

/// Shortest round-trip form; negative zero prints as `0`.
fn number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}

fn vector(v: &Vector) -> String {
    format!("[{}, {}, {}]", number(v.x), number(v.y), number(v.z))
}

fn list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| number(*v)).collect();
    format!("[{}]", items.join(", "))
}

fn value(v: &Value) -> String {
    match v {
        Value::Number(n) => number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Str(s) => format!("{s:?}"),
        Value::List(items) => list(items),
    }
}

fn arguments(args: &[Arg]) -> String {
    let args: Vec<String> = args
        .iter()
        .map(|arg| match &arg.name {
            Some(name) => format!("{name} = {}", value(&arg.value)),
            None => value(&arg.value),
        })
        .collect();
    args.join(", ")
}

fn segments(segments: Option<u32>) -> String {
    segments.map(|n| format!(", $fn = {n}")).unwrap_or_default()
}

fn transform(op: &TransformOp) -> String {
    match op {
        TransformOp::Translate(v) => format!("translate({})", vector(v)),
        TransformOp::Rotate(v) => format!("rotate({})", vector(v)),
        TransformOp::RotateAbout { angle, axis } => {
            format!("rotate(a = {}, v = {})", number(*angle), vector(axis))
        }
        TransformOp::Scale(v) => format!("scale({})", vector(v)),
        TransformOp::Resize { size, auto: None } => format!("resize({})", vector(size)),
        TransformOp::Resize {
            size,
            auto: Some([x, y, z]),
        } => format!("resize({}, auto = [{x}, {y}, {z}])", vector(size)),
    }
}

fn color(color: &Color) -> String {
    match color {
        Color::Named(name) => format!("color({name:?})"),
        Color::Rgb(rgb) => format!("color({})", list(rgb)),
        Color::Rgba(rgba) => format!("color({})", list(rgba)),
    }
}

fn write_solid(out: &mut String, solid: &Solid, depth: usize) {
    let indent = INDENT.repeat(depth);
    let prefix = solid
        .modifier
        .map(|m| m.symbol().to_string())
        .unwrap_or_default();

    match &solid.kind {
        SolidKind::Cube { size, center } => {
            out.push_str(&format!(
                "{indent}{prefix}cube(size = {}, center = {center});\n",
                vector(size)
            ));
        }
        SolidKind::Sphere { d, segments: n } => {
            out.push_str(&format!(
                "{indent}{prefix}sphere(d = {}{});\n",
                number(*d),
                segments(*n)
            ));
        }
        SolidKind::Cylinder {
            h,
            r1,
            r2,
            center,
            segments: n,
        } => {
            out.push_str(&format!(
                "{indent}{prefix}cylinder(h = {}, r1 = {}, r2 = {}, center = {center}{});\n",
                number(*h),
                number(*r1),
                number(*r2),
                segments(*n)
            ));
        }
        SolidKind::LinearExtrude { height, child } => {
            let head = format!("{prefix}linear_extrude(height = {})", number(*height));
            write_block(out, &head, [child.as_ref()], depth);
        }
        SolidKind::Union(children) => {
            write_block(out, &format!("{prefix}union()"), children, depth);
        }
        SolidKind::Difference(children) => {
            write_block(out, &format!("{prefix}difference()"), children, depth);
        }
        SolidKind::Intersection(children) => {
            write_block(out, &format!("{prefix}intersection()"), children, depth);
        }
        SolidKind::Transform { op, child } => {
            let head = format!("{prefix}{}", transform(op));
            write_block(out, &head, [child.as_ref()], depth);
        }
        SolidKind::Color { color: c, child } => {
            let head = format!("{prefix}{}", color(c));
            write_block(out, &head, [child.as_ref()], depth);
        }
        SolidKind::ModuleCall { module, args, .. } => {
            out.push_str(&format!("{indent}{prefix}{module}({});\n", arguments(args)));
        }
        SolidKind::Preview { preview, render } => {
            // `if` takes no modifier: carry it on a wrapping union
            if prefix.is_empty() {
                write_preview(out, preview, render, depth);
            } else {
                out.push_str(&format!("{indent}{prefix}union() {{\n"));
                write_preview(out, preview, render, depth + 1);
                out.push_str(&format!("{indent}}}\n"));
            }
        }
        SolidKind::Empty => {}
    }
}

fn write_preview(out: &mut String, preview: &Solid, render: &Solid, depth: usize) {
    let indent = INDENT.repeat(depth);
    out.push_str(&format!("{indent}if ($preview) {{\n"));
    write_solid(out, preview, depth + 1);
    out.push_str(&format!("{indent}}} else {{\n"));
    write_solid(out, render, depth + 1);
    out.push_str(&format!("{indent}}}\n"));
}

fn write_block<'a>(
    out: &mut String,
    head: &str,
    children: impl IntoIterator<Item = &'a Solid>,
    depth: usize,
) {
    let indent = INDENT.repeat(depth);
    let mut children = children.into_iter().peekable();
    if children.peek().is_none() {
        out.push_str(&format!("{indent}{head} {{}}\n"));
        return;
    }
    out.push_str(&format!("{indent}{head} {{\n"));
    for child in children {
        write_solid(out, child, depth + 1);
    }
    out.push_str(&format!("{indent}}}\n"));
}
