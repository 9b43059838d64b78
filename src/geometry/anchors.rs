// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Named anchor points
//!
//! Every object owns one [`AnchorPoints`] registry. Rigid moves shift all of
//! its points; non-rigid transforms flip it into the invalidated state, where
//! reads fail with the location of the transform that broke it.
//!
//! Names written after an invalidation are valid again one by one. The
//! registry only becomes fully valid once every invalidated name has been
//! rewritten, e.g. by re-deriving the bounding box of a rotated cube.

use super::{BoundingBox, Point, Vector};
use crate::error::{Error, Result};
use std::backtrace::Backtrace;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// The nine anchors derived from a bounding box.
pub const BOX_ANCHORS: [&str; 9] = [
    "pmin", "pmax", "left", "right", "front", "back", "bottom", "top", "center",
];

/// Where and how a registry was invalidated.
///
/// The stack of the invalidating call is always captured, so the root cause
/// can be traced even when the transform ran inside a helper.
#[derive(Debug, Clone)]
pub struct Invalidation {
    operation: &'static str,
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
}

impl Invalidation {
    /// Record an invalidation at the caller's location.
    #[track_caller]
    pub fn here(operation: &'static str) -> Self {
        Self::at(operation, Location::caller())
    }

    /// Record an invalidation at `location`, with the current stack.
    pub fn at(operation: &'static str, location: &'static Location<'static>) -> Self {
        Self {
            operation,
            location,
            backtrace: Arc::new(Backtrace::force_capture()),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// Two invalidations are the same when they come from the same call site.
impl PartialEq for Invalidation {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation && self.location == other.location
    }
}

impl fmt::Display for Invalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnchorPoints have been invalidated by `{}` at {}",
            self.operation, self.location
        )?;
        for line in self.backtrace.to_string().lines() {
            write!(f, "\n    {line}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Valid(BTreeMap<String, Point>),
    /// `known` still fail with `invalidation`; `points` were written since.
    Invalidated {
        known: BTreeSet<String>,
        invalidation: Invalidation,
        points: BTreeMap<String, Point>,
    },
}

/// Registry of named anchor points.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoints {
    state: State,
}

impl AnchorPoints {
    pub fn new() -> Self {
        Self {
            state: State::Valid(BTreeMap::new()),
        }
    }

    pub fn from_points<S: Into<String>>(points: impl IntoIterator<Item = (S, Point)>) -> Self {
        let mut anchors = Self::new();
        for (name, point) in points {
            anchors.set(name, point);
        }
        anchors
    }

    /// True if `name` is defined, or was defined before invalidation.
    pub fn has_point(&self, name: &str) -> bool {
        match &self.state {
            State::Valid(points) => points.contains_key(name),
            State::Invalidated { known, points, .. } => {
                known.contains(name) || points.contains_key(name)
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<Point> {
        match &self.state {
            State::Valid(points) => points
                .get(name)
                .copied()
                .ok_or_else(|| Error::unknown_anchor(name)),
            State::Invalidated {
                known,
                invalidation,
                points,
            } => {
                if let Some(point) = points.get(name) {
                    Ok(*point)
                } else if known.contains(name) {
                    Err(Error::InvalidatedAnchor {
                        name: name.to_string(),
                        invalidation: invalidation.clone(),
                    })
                } else {
                    Err(Error::unknown_anchor(name))
                }
            }
        }
    }

    /// Define or overwrite an anchor.
    ///
    /// On an invalidated registry only `name` becomes readable again; every
    /// other invalidated name keeps failing with the original cause.
    pub fn set(&mut self, name: impl Into<String>, point: Point) {
        let name = name.into();
        match &mut self.state {
            State::Valid(points) => {
                points.insert(name, point);
            }
            State::Invalidated { known, points, .. } => {
                known.remove(&name);
                points.insert(name, point);
                if known.is_empty() {
                    self.state = State::Valid(std::mem::take(points));
                }
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        match &self.state {
            State::Valid(points) => points.keys().map(String::as_str).collect(),
            State::Invalidated { known, points, .. } => {
                let names: BTreeSet<&str> = known
                    .iter()
                    .chain(points.keys())
                    .map(String::as_str)
                    .collect();
                names.into_iter().collect()
            }
        }
    }

    /// Readable anchors in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point)> {
        let points = match &self.state {
            State::Valid(points) => points,
            State::Invalidated { points, .. } => points,
        };
        points.iter().map(|(name, point)| (name.as_str(), point))
    }

    pub fn len(&self) -> usize {
        match &self.state {
            State::Valid(points) => points.len(),
            State::Invalidated { known, points, .. } => known.len() + points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.state, State::Valid(_))
    }

    pub fn invalidation(&self) -> Option<&Invalidation> {
        match &self.state {
            State::Valid(_) => None,
            State::Invalidated { invalidation, .. } => Some(invalidation),
        }
    }

    /// Standard anchors for the box with opposite corners `p1` and `p2`,
    /// including `center`.
    ///
    ///   - pmin, pmax: lower-left and upper-right points
    ///   - left, right: min and max planes on the X axis
    ///   - front, back: min and max planes on the Y axis
    ///   - bottom, top: min and max planes on the Z axis
    pub fn set_bounding_box(&mut self, p1: Point, p2: Point) {
        self.set_bounding_box_with(p1, p2, true);
    }

    pub fn set_bounding_box_with(&mut self, p1: Point, p2: Point, set_center: bool) {
        self.apply_box(&BoundingBox::from_points(&[p1, p2]), set_center);
    }

    /// Standard anchors for the envelope of an arbitrary set of points.
    ///
    /// Partial points only bound the axes they define.
    pub fn set_bounding_box_from(&mut self, points: &[Point], set_center: bool) -> Result<()> {
        let bbox = BoundingBox::from_points(points);
        if bbox.is_empty() {
            return Err(Error::invalid_parameter(
                "a bounding box needs at least one defined coordinate",
            ));
        }
        self.apply_box(&bbox, set_center);
        Ok(())
    }

    /// The box spanned by `pmin` and `pmax`.
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        Ok(BoundingBox::new(self.get("pmin")?, self.get("pmax")?))
    }

    fn apply_box(&mut self, bbox: &BoundingBox, set_center: bool) {
        let (min, max) = (bbox.min, bbox.max);
        self.set("pmin", min);
        self.set("pmax", max);
        self.set("left", Point::partial(min.x, None, None));
        self.set("right", Point::partial(max.x, None, None));
        self.set("front", Point::partial(None, min.y, None));
        self.set("back", Point::partial(None, max.y, None));
        self.set("bottom", Point::partial(None, None, min.z));
        self.set("top", Point::partial(None, None, max.z));
        if set_center {
            self.set("center", bbox.center());
        }
    }

    /// Shift every readable anchor by `v`.
    pub fn translate(&mut self, v: Vector) {
        let points = match &mut self.state {
            State::Valid(points) => points,
            State::Invalidated { points, .. } => points,
        };
        for point in points.values_mut() {
            *point += v;
        }
    }

    /// Overlay the anchors of `src` onto this registry; same names overwrite.
    ///
    /// Fails with [`Error::InvalidatedAnchors`] when `src` has any invalidated
    /// name, leaving this registry untouched.
    pub fn copy_from(&mut self, src: &AnchorPoints) -> Result<()> {
        match &src.state {
            State::Valid(points) => {
                for (name, point) in points {
                    self.set(name.clone(), *point);
                }
                Ok(())
            }
            State::Invalidated { invalidation, .. } => {
                Err(Error::InvalidatedAnchors(invalidation.clone()))
            }
        }
    }

    /// Mark every anchor as untrustworthy. The first invalidation is kept.
    pub fn invalidate(&mut self, invalidation: Invalidation) {
        match &mut self.state {
            State::Valid(points) => {
                let known = std::mem::take(points).into_keys().collect();
                self.state = State::Invalidated {
                    known,
                    invalidation,
                    points: BTreeMap::new(),
                };
            }
            State::Invalidated { known, points, .. } => {
                known.extend(std::mem::take(points).into_keys());
            }
        }
    }
}

impl Default for AnchorPoints {
    fn default() -> Self {
        Self::new()
    }
}
