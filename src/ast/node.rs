// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Solid tree definitions
//!
//! A [`Solid`] is the opaque handle objects hand to the OpenSCAD backend.
//! Nothing in the anchor layer inspects it; it is only wrapped, combined and
//! finally rendered.

use crate::geometry::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Node of the solid tree, optionally tagged with a display modifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub kind: SolidKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
}

/// Types of solid nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolidKind {
    // Primitives
    Cube {
        size: Vector,
        center: bool,
    },
    Sphere {
        d: f64,
        segments: Option<u32>,
    },
    Cylinder {
        h: f64,
        r1: f64,
        r2: f64,
        center: bool,
        segments: Option<u32>,
    },
    LinearExtrude {
        height: f64,
        child: Box<Solid>,
    },

    // Boolean operations
    Union(Vec<Solid>),
    Difference(Vec<Solid>),
    Intersection(Vec<Solid>),

    // Transformations
    Transform {
        op: TransformOp,
        child: Box<Solid>,
    },
    Color {
        color: Color,
        child: Box<Solid>,
    },

    /// Call into an external `.scad` library module
    ModuleCall {
        library: String,
        module: String,
        args: Vec<Arg>,
    },

    /// `if ($preview) { preview } else { render }`
    Preview {
        preview: Box<Solid>,
        render: Box<Solid>,
    },

    Empty,
}

/// Transformation operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    Translate(Vector),
    /// Euler angles in degrees
    Rotate(Vector),
    RotateAbout { angle: f64, axis: Vector },
    Scale(Vector),
    Resize { size: Vector, auto: Option<[bool; 3]> },
}

/// OpenSCAD display modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// `#`
    Highlight,
    /// `%`
    Transparent,
    /// `!`
    ShowOnly,
    /// `*`
    Disable,
}

impl Modifier {
    pub fn symbol(&self) -> char {
        match self {
            Modifier::Highlight => '#',
            Modifier::Transparent => '%',
            Modifier::ShowOnly => '!',
            Modifier::Disable => '*',
        }
    }
}

impl FromStr for Modifier {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "#" => Ok(Modifier::Highlight),
            "%" => Ok(Modifier::Transparent),
            "!" => Ok(Modifier::ShowOnly),
            "*" => Ok(Modifier::Disable),
            _ => Err(crate::Error::invalid_parameter(format!(
                "unknown modifier `{s}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Named(String),
    Rgb([f64; 3]),
    Rgba([f64; 4]),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<[f64; 4]> for Color {
    fn from(rgba: [f64; 4]) -> Self {
        Color::Rgba(rgba)
    }
}

/// Argument value passed to a library module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Str(String),
    List(Vec<f64>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::List(v)
    }
}

/// Positional or named module argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub name: Option<String>,
    pub value: Value,
}

impl Arg {
    pub fn positional(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }
}

impl Solid {
    pub fn new(kind: SolidKind) -> Self {
        Self {
            kind,
            modifier: None,
        }
    }

    /// A union with no children, used as the seed of composites.
    pub fn empty_union() -> Self {
        Self::new(SolidKind::Union(Vec::new()))
    }

    pub fn cube(size: Vector, center: bool) -> Self {
        Self::new(SolidKind::Cube { size, center })
    }

    pub fn sphere(d: f64, segments: Option<u32>) -> Self {
        Self::new(SolidKind::Sphere { d, segments })
    }

    pub fn cylinder(h: f64, r1: f64, r2: f64, segments: Option<u32>) -> Self {
        Self::new(SolidKind::Cylinder {
            h,
            r1,
            r2,
            center: true,
            segments,
        })
    }

    pub fn transform(self, op: TransformOp) -> Self {
        Self::new(SolidKind::Transform {
            op,
            child: Box::new(self),
        })
    }

    pub fn translate(self, v: Vector) -> Self {
        self.transform(TransformOp::Translate(v))
    }

    pub fn rotate(self, angles: Vector) -> Self {
        self.transform(TransformOp::Rotate(angles))
    }

    pub fn rotate_about(self, angle: f64, axis: Vector) -> Self {
        self.transform(TransformOp::RotateAbout { angle, axis })
    }

    pub fn scale(self, factors: Vector) -> Self {
        self.transform(TransformOp::Scale(factors))
    }

    pub fn resize(self, size: Vector, auto: Option<[bool; 3]>) -> Self {
        self.transform(TransformOp::Resize { size, auto })
    }

    pub fn color(self, color: impl Into<Color>) -> Self {
        Self::new(SolidKind::Color {
            color: color.into(),
            child: Box::new(self),
        })
    }

    pub fn linear_extrude(self, height: f64) -> Self {
        Self::new(SolidKind::LinearExtrude {
            height,
            child: Box::new(self),
        })
    }

    pub fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = Some(modifier);
    }

    /// Union, extending `self` in place when it already is a plain union.
    pub fn union_with(self, other: Solid) -> Self {
        match self {
            Solid {
                kind: SolidKind::Union(mut children),
                modifier: None,
            } => {
                children.push(other);
                Self::new(SolidKind::Union(children))
            }
            solid => Self::new(SolidKind::Union(vec![solid, other])),
        }
    }

    /// Difference; an empty plain union is replaced by `other` so that the
    /// first subtraction into a fresh composite sets the minuend.
    pub fn difference_with(self, other: Solid) -> Self {
        match self {
            solid if solid.is_blank() => other,
            Solid {
                kind: SolidKind::Difference(mut children),
                modifier: None,
            } => {
                children.push(other);
                Self::new(SolidKind::Difference(children))
            }
            solid => Self::new(SolidKind::Difference(vec![solid, other])),
        }
    }

    pub fn intersection_with(self, other: Solid) -> Self {
        match self {
            solid if solid.is_blank() => other,
            Solid {
                kind: SolidKind::Intersection(mut children),
                modifier: None,
            } => {
                children.push(other);
                Self::new(SolidKind::Intersection(children))
            }
            solid => Self::new(SolidKind::Intersection(vec![solid, other])),
        }
    }

    /// Get child nodes
    pub fn children(&self) -> Vec<&Solid> {
        match &self.kind {
            SolidKind::Union(children)
            | SolidKind::Difference(children)
            | SolidKind::Intersection(children) => children.iter().collect(),
            SolidKind::LinearExtrude { child, .. }
            | SolidKind::Transform { child, .. }
            | SolidKind::Color { child, .. } => vec![child.as_ref()],
            SolidKind::Preview { preview, render } => vec![preview.as_ref(), render.as_ref()],
            _ => Vec::new(),
        }
    }

    /// True for `Empty` and for a childless, unmodified union.
    pub fn is_blank(&self) -> bool {
        match &self.kind {
            SolidKind::Empty => self.modifier.is_none(),
            SolidKind::Union(children) => children.is_empty() && self.modifier.is_none(),
            _ => false,
        }
    }

    /// External libraries referenced anywhere in the tree, sorted.
    pub fn libraries(&self) -> BTreeSet<&str> {
        let mut libraries = BTreeSet::new();
        self.collect_libraries(&mut libraries);
        libraries
    }

    fn collect_libraries<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        if let SolidKind::ModuleCall { library, .. } = &self.kind {
            out.insert(library.as_str());
        }
        for child in self.children() {
            child.collect_libraries(out);
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::io::ScadRenderer::default().render_body(self))
    }
}
