// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::{Point, Vector};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over possibly partial points.
///
/// Each axis is bounded independently by the values defined on that axis;
/// an axis no point defines stays unconstrained in both corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        let none = Point::partial(None, None, None);
        Self {
            min: none,
            max: none,
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.expand_to_include(point);
        }
        bbox
    }

    pub fn expand_to_include(&mut self, point: &Point) {
        fn widen(lo: &mut Option<f64>, hi: &mut Option<f64>, v: Option<f64>) {
            if let Some(v) = v {
                *lo = Some(lo.map_or(v, |lo| lo.min(v)));
                *hi = Some(hi.map_or(v, |hi| hi.max(v)));
            }
        }
        widen(&mut self.min.x, &mut self.max.x, point.x);
        widen(&mut self.min.y, &mut self.max.y, point.y);
        widen(&mut self.min.z, &mut self.max.z, point.z);
    }

    /// True if no axis has been bounded.
    pub fn is_empty(&self) -> bool {
        self.min.components().iter().all(Option::is_none)
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }

    /// Extent per axis; unbounded axes measure 0.
    pub fn size(&self) -> Vector {
        self.max - self.min
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        let close = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => (a - b).abs() < tolerance,
            (None, None) => true,
            _ => false,
        };
        self.min
            .components()
            .iter()
            .zip(other.min.components())
            .chain(self.max.components().iter().zip(other.max.components()))
            .all(|(a, b)| close(*a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let mut bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        bbox.expand_to_include(&Point::new(1.0, 2.0, 3.0));
        bbox.expand_to_include(&Point::new(-1.0, -2.0, -3.0));

        assert_eq!(bbox.min, Point::new(-1.0, -2.0, -3.0));
        assert_eq!(bbox.max, Point::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.center(), Point::O);
        assert_eq!(bbox.size(), Vector::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_partial_points() {
        let bbox = BoundingBox::from_points(&[
            Point::at_x(4.0),
            Point::partial(Some(-2.0), Some(1.0), None),
            Point::at_y(7.0),
        ]);
        assert_eq!(bbox.min, Point::partial(Some(-2.0), Some(1.0), None));
        assert_eq!(bbox.max, Point::partial(Some(4.0), Some(7.0), None));
        assert_eq!(bbox.center(), Point::partial(Some(1.0), Some(4.0), None));
        assert!(!bbox.is_empty());
    }

    #[test]
    fn test_approx_eq() {
        let a = BoundingBox::new(Point::O, Point::new(1.0, 1.0, 1.0));
        let b = BoundingBox::new(Point::O, Point::new(1.0, 1.0, 1.0 + 1e-9));
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&BoundingBox::empty(), 1e-6));
    }
}
