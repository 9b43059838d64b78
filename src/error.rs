// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for object construction and anchor lookup

use crate::geometry::Invalidation;
use thiserror::Error;

/// Result type alias for partscad operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or positioning objects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Exactly one of a radius or a diameter must be given.
    #[error("you must specify exactly one of `{radius}` or `{diameter}`")]
    RadiusOrDiameter {
        radius: &'static str,
        diameter: &'static str,
    },

    /// Exactly one of h, hx, hy, hz must be given.
    #[error("you must specify exactly one of h, hx, hy or hz")]
    Height,

    #[error("unsupported axis `{0}`: expected x, y or z")]
    UnsupportedAxis(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The anchor was never defined on this object.
    #[error("no such anchor: `{0}`")]
    UnknownAnchor(String),

    /// The anchor existed, but a non-rigid transform made it untrustworthy.
    #[error("anchor `{name}` can no longer be used: {invalidation}")]
    InvalidatedAnchor {
        name: String,
        invalidation: Invalidation,
    },

    /// A whole registry was read after it was invalidated.
    #[error("anchors can no longer be used: {0}")]
    InvalidatedAnchors(Invalidation),

    #[error("no such part: `{0}`")]
    UnknownPart(String),

    #[error("cannot find a bounding box: anchor `{0}` is missing")]
    MissingBoundingBox(&'static str),

    #[error("unknown model `{0}`")]
    UnknownModel(String),
}

impl Error {
    #[must_use]
    pub fn invalid_parameter(details: impl Into<String>) -> Self {
        Self::InvalidParameter(details.into())
    }

    #[must_use]
    pub fn unknown_anchor(name: impl Into<String>) -> Self {
        Self::UnknownAnchor(name.into())
    }

    #[must_use]
    pub fn unknown_part(name: impl Into<String>) -> Self {
        Self::UnknownPart(name.into())
    }

    /// True for anchor lookup failures, unknown or invalidated.
    pub fn is_anchor_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownAnchor(_) | Self::InvalidatedAnchor { .. } | Self::InvalidatedAnchors(_)
        )
    }
}
