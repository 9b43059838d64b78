// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Partial points and displacement vectors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Rigid displacement. Every component is always defined.
pub type Vector = nalgebra::Vector3<f64>;

/// A position whose axes may be left unconstrained.
///
/// `Point::new(5.0, 2.0, 1.0)` is a location, while `Point::at_x(5.0)` is
/// the plane x = 5. Unconstrained axes survive translation untouched and
/// contribute nothing when two points are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Point {
    /// Origin
    pub const O: Point = Point::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub const fn partial(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    /// The plane x = `x`.
    pub const fn at_x(x: f64) -> Self {
        Self::partial(Some(x), None, None)
    }

    /// The plane y = `y`.
    pub const fn at_y(y: f64) -> Self {
        Self::partial(None, Some(y), None)
    }

    /// The plane z = `z`.
    pub const fn at_z(z: f64) -> Self {
        Self::partial(None, None, Some(z))
    }

    pub fn components(&self) -> [Option<f64>; 3] {
        [self.x, self.y, self.z]
    }

    /// True when no axis is left unconstrained.
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.z.is_some()
    }

    /// Position vector from the origin, if every axis is defined.
    pub fn to_vector(&self) -> Option<Vector> {
        Some(Vector::new(self.x?, self.y?, self.z?))
    }

    /// Per-axis midpoint; an axis stays unconstrained unless both sides define it.
    pub fn midpoint(&self, other: &Point) -> Point {
        let mid = |a: Option<f64>, b: Option<f64>| Some((a? + b?) / 2.0);
        Point::partial(
            mid(self.x, other.x),
            mid(self.y, other.y),
            mid(self.z, other.z),
        )
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::partial(
            self.x.map(|x| x + v.x),
            self.y.map(|y| y + v.y),
            self.z.map(|z| z + v.z),
        )
    }
}

/// Uniform shift along every axis.
impl Add<f64> for Point {
    type Output = Point;

    fn add(self, d: f64) -> Point {
        self + Vector::repeat(d)
    }
}

impl Sub<f64> for Point {
    type Output = Point;

    fn sub(self, d: f64) -> Point {
        self + (-d)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        self + (-v)
    }
}

/// Displacement from `p` to `self`. Axes undefined on either side yield 0.
impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, p: Point) -> Vector {
        let delta = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => a - b,
            _ => 0.0,
        };
        Vector::new(delta(self.x, p.x), delta(self.y, p.y), delta(self.z, p.z))
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, v: Vector) {
        *self = *self + v;
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = |v: Option<f64>| v.map_or_else(|| "None".to_string(), |v| v.to_string());
        write!(f, "Point({}, {}, {})", axis(self.x), axis(self.y), axis(self.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add() {
        let p = Point::new(10.0, 20.0, 30.0);
        assert_eq!(p + Vector::new(1.0, 2.0, 3.0), Point::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_point_sub() {
        let diff = Point::new(10.0, 20.0, 30.0) - Point::new(1.0, 2.0, 3.0);
        assert_eq!(diff, Vector::new(9.0, 18.0, 27.0));
    }

    #[test]
    fn test_vector_add() {
        let v = Vector::new(10.0, 20.0, 30.0) + Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vector::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_unconstrained_axes() {
        let p = Point::new(10.0, 20.0, -100.0);
        let bottom = Point::at_z(30.0);
        let v = bottom - p;
        assert_eq!(v, Vector::new(0.0, 0.0, 130.0));
        assert_eq!(p + v, Point::new(10.0, 20.0, 30.0));

        // unconstrained stays unconstrained
        assert_eq!(bottom + Vector::new(1.0, 1.0, 1.0), Point::at_z(31.0));
        assert_eq!(Point::at_x(1.0) - Point::at_y(2.0), Vector::zeros());
    }

    #[test]
    fn test_scalar_shift() {
        let front = Point::at_y(-44.0);
        assert_eq!(front + 21.0, Point::at_y(-23.0));
        assert_eq!(Point::new(1.0, 2.0, 3.0) - 1.0, Point::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_associativity() {
        let p = Point::new(1.0, -2.0, 4.0);
        let v = Vector::new(3.0, 5.0, -7.0);
        let w = Vector::new(0.5, 0.25, 8.0);
        assert_eq!((p + v) + w, p + (v + w));
    }

    #[test]
    fn test_self_difference_is_zero() {
        let p = Point::new(3.5, -1.0, 12.0);
        assert_eq!(p - p, Vector::zeros());
    }

    #[test]
    fn test_midpoint_and_display() {
        let a = Point::partial(Some(-1.0), None, Some(2.0));
        let b = Point::new(3.0, 4.0, 6.0);
        assert_eq!(a.midpoint(&b), Point::partial(Some(1.0), None, Some(4.0)));
        assert_eq!(a.to_string(), "Point(-1, None, 2)");
        assert!(!a.is_complete());
        assert_eq!(b.to_vector(), Some(Vector::new(3.0, 4.0, 6.0)));
    }
}
