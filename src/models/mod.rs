// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Demo assemblies available from the command line

use crate::error::{Error, Result};
use crate::geometry::{Axis, Cube, Cylinder, Point, Sphere};
use crate::object::{CustomObject, Object};
use crate::parts::{bolt_hole, Bearing, Manfrotto200PL, Stepper28BYJ48, TeflonGlide, WormFactory};
use crate::shapes::DonutSlice;
use crate::utils::math::EPS;

/// A named model the CLI can build
#[derive(Debug, Clone, Copy)]
pub struct Model {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> Result<Object>,
}

impl Model {
    pub fn build(&self) -> Result<Object> {
        (self.build)()
    }
}

const MODELS: &[Model] = &[
    Model {
        name: "puppet",
        description: "cube body with a spherical head",
        build: puppet,
    },
    Model {
        name: "bearings",
        description: "row of 6xx bearings and a teflon glide",
        build: bearings,
    },
    Model {
        name: "rotating_plate",
        description: "turntable ring with mounting holes and a camera plate",
        build: rotating_plate,
    },
    Model {
        name: "board",
        description: "controller board with its components and screw holes",
        build: board,
    },
    Model {
        name: "worm_drive",
        description: "worm and spur gear driven by a 28BYJ-48 stepper",
        build: worm_drive,
    },
];

/// All models, in display order
pub fn catalog() -> &'static [Model] {
    MODELS
}

pub fn find(name: &str) -> Result<&'static Model> {
    catalog()
        .iter()
        .find(|model| model.name == name)
        .ok_or_else(|| Error::UnknownModel(name.to_string()))
}

pub fn puppet() -> Result<Object> {
    let body = Cube::uniform(10.0).build().color("orange");
    let head = Sphere::new()
        .d(5.0)
        .build()?
        .color("pink")
        .move_to([("bottom", body.anchor("top")?)])?;
    Ok(CustomObject::new()
        .add_part("body", body)
        .add_part("head", head)
        .expose_anchors_of("body")?
        .build())
}

pub fn bearings() -> Result<Object> {
    let mut row = CustomObject::new();
    let mut next = Point::at_x(0.0);
    for model in ["604", "608", "625", "673"] {
        let bearing = Bearing::new(model)?
            .build()?
            .move_to([("left", next), ("bottom", Point::at_z(0.0))])?;
        next = bearing.anchor("right")? + 5.0;
        row = row.add_part(format!("b{model}"), bearing);
    }
    let glide = TeflonGlide
        .build()?
        .move_to([("left", next), ("bottom", Point::at_z(0.0))])?;
    Ok(row.add_part("glide", glide).build())
}

/// Four vertical holes at distance `dist` from the origin along x and y.
fn four_holes(dist: f64, d: f64, h: f64) -> Result<Object> {
    let mut holes = Vec::new();
    for center in [
        Point::new(dist, 0.0, 0.0),
        Point::new(-dist, 0.0, 0.0),
        Point::new(0.0, dist, 0.0),
        Point::new(0.0, -dist, 0.0),
    ] {
        let hole = Cylinder::new().d(d).h(h).build()?;
        holes.push(hole.move_to([("center", center)])?);
    }
    Ok(CustomObject::new()
        .add_parts("holes", holes)
        .bounding_box_from_parts(&["holes"])?
        .build())
}

pub fn rotating_plate() -> Result<Object> {
    let h = 8.6;
    let outer = DonutSlice::new(h).d1(70.0).d2(93.4).build()?.color("grey");
    let inner = DonutSlice::new(h).d1(95.4).d2(120.0).build()?.color("grey");
    let plate = CustomObject::new()
        .add_part("outer", outer)
        .add_part("inner", inner)
        .sub_part("inner_holes", four_holes(82.0 / 2.0, 5.0, 10.0)?)
        .sub_part("outer_holes", four_holes(107.5 / 2.0, 5.0, 10.0)?)
        .bounding_box_from_parts(&["outer", "inner"])?
        .build();

    let camera = Manfrotto200PL
        .build()
        .move_to([
            ("center", Point::partial(Some(0.0), Some(0.0), None)),
            ("bottom", plate.anchor("top")?),
        ])?;
    Ok(CustomObject::new()
        .add_part("plate", plate)
        .add_part("camera", camera)
        .expose_anchors_of("plate")?
        .build())
}

pub fn board() -> Result<Object> {
    let base = Cube::new(102.0, 88.0, 1.6).build().color("tan");
    let top = base.anchor("top")?;
    let left = base.anchor("left")?;
    let right = base.anchor("right")?;
    let front = base.anchor("front")?;
    let back = base.anchor("back")?;

    let buttons = Cube::new(59.0, 13.0, 12.6).build().color("red").move_to([
        ("bottom", top),
        ("back", front + 21.0),
        ("right", right - 3.36),
    ])?;
    let mcu = Cube::new(58.0, 22.6, 20.4).build().color("blue").move_to([
        ("bottom", top),
        ("front", front + 24.65),
        ("right", right - 6.71),
    ])?;
    let buzzer = Cylinder::new().d(15.2).h(3.7).build()?.color("black").move_to([
        ("bottom", top),
        ("back", back - 4.6),
        ("right", right - 8.46),
    ])?;
    let terminals = Cube::new(10.15, 44.0, 14.35).build().color("green").move_to([
        ("bottom", top),
        ("left", left),
        ("front", front + 20.75),
    ])?;
    let capacitor = Cylinder::new()
        .d(18.2)
        .h(32.3)
        .axis(Axis::X)
        .build()?
        .color("darkblue")
        .move_to([
            ("bottom", top),
            ("right", right - 24.0),
            ("front", back - 27.3),
        ])?;
    let capacitor2 = Cylinder::new().d(8.2).h(14.4).build()?.color("darkblue").move_to([
        ("bottom", top),
        ("front", front + 6.7),
        ("left", left + 12.8),
    ])?;
    let booster = Cube::new(43.0, 21.3, 12.8).build().color("blue").move_to([
        ("bottom", top),
        ("back", back),
        ("left", left),
    ])?;
    let transistor = Cylinder::new().d(5.0).h(8.0).build()?.color("grey").move_to([
        ("bottom", top),
        ("right", right - 4.75),
        ("front", back - 26.78),
    ])?;
    let screw_hole = bolt_hole(3.75, 25.0, 0.0)?.move_to([
        ("front", front + 16.6),
        ("left", left + 3.0),
    ])?;
    let screw_hole2 = bolt_hole(3.75, 25.0, 0.0)?.move_to([
        ("back", back - 31.0),
        ("right", right - 12.5),
    ])?;

    Ok(CustomObject::new()
        .add_part("base", base)
        .add_part("buttons", buttons)
        .add_part("mcu", mcu)
        .add_part("buzzer", buzzer)
        .add_part("terminals", terminals)
        .add_part("capacitor", capacitor)
        .add_part("capacitor2", capacitor2)
        .add_part("booster", booster)
        .add_part("transistor", transistor)
        .sub_part("screw_hole", screw_hole)
        .sub_part("screw_hole2", screw_hole2)
        .expose_anchors_of("base")?
        .build())
}

pub fn worm_drive() -> Result<Object> {
    let spur = WormFactory::spur(24, 2.0).bore_d(3.2).build()?;
    let worm = WormFactory::worm(15.0)
        .build()?
        .move_to([("left", spur.anchor("right")?)])?;
    let motor = Stepper28BYJ48.build()?.move_to([
        ("front", worm.anchor("back")? + EPS),
        ("shaft", Point::partial(None, None, worm.anchor("center")?.z)),
    ])?;
    Ok(CustomObject::new()
        .add_part("spur", spur)
        .add_part("worm", worm)
        .add_part("motor", motor)
        .bounding_box_from_parts(&["spur", "worm", "motor"])?
        .build())
}
