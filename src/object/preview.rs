// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Objects that look different in preview and in final render

use super::Object;
use crate::ast::{Solid, SolidKind};

impl Object {
    /// Show `preview` while previewing and `render` otherwise.
    ///
    /// The result exposes the anchors of `render`; both objects stay
    /// children so translation keeps them aligned.
    pub fn preview(preview: Object, render: Object) -> Object {
        let solid = Solid::new(SolidKind::Preview {
            preview: Box::new(preview.solid.clone()),
            render: Box::new(render.solid.clone()),
        });
        let anchors = render.anchors.clone();
        let mut object = Object::new(solid, anchors);
        object.children = vec![preview, render];
        object
    }
}
