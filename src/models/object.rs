// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Placed game objects.

use crate::util::geometry::{Bounds, Point};

/// Identity of an object within a scene: its position in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// A game object placed on the canvas.
///
/// `x`/`y` is the top-left corner. Positions are never clamped, so they may
/// be negative or lie past the canvas edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub template_type: String,
    pub image_path: Option<String>,
}

impl PlacedObject {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.x, self.y, self.width, self.height)
    }

    /// Center point, where the body and label primitives are anchored.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}
