// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keeps the drawing surface in step with the scene.
//!
//! Each placed object owns exactly one body and one label primitive. The
//! association is stored explicitly so moving an object always moves its
//! own pair, whatever else has been drawn since.

use super::surface::{PrimitiveId, PrimitiveKind, Surface};
use crate::models::object::{ObjectId, PlacedObject};
use crate::util::geometry::Point;
use std::collections::HashMap;

/// Body and label primitives belonging to one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitivePair {
    pub body: PrimitiveId,
    pub label: PrimitiveId,
}

#[derive(Debug, Default)]
pub struct RenderSync {
    surface: Surface,
    pairs: HashMap<ObjectId, PrimitivePair>,
}

impl RenderSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a body and label for `object` at its current geometry.
    pub fn create(&mut self, id: ObjectId, object: &PlacedObject) -> PrimitivePair {
        let center = object.center();
        let kind = match &object.image_path {
            Some(path) => PrimitiveKind::Image { path: path.clone() },
            None => PrimitiveKind::Rectangle,
        };
        let body = self.surface.push(id, kind, center, object.width, object.height);
        let label = self.surface.push_label(id, &object.name, center);

        let pair = PrimitivePair { body, label };
        self.pairs.insert(id, pair);
        pair
    }

    /// Re-center the pair owned by `id` for a top-left corner at `(x, y)`.
    ///
    /// Returns false when `id` has no primitives.
    pub fn move_to(&mut self, id: ObjectId, object: &PlacedObject, x: f64, y: f64) -> bool {
        let Some(pair) = self.pairs.get(&id) else {
            return false;
        };
        let center = Point::new(x + object.width / 2.0, y + object.height / 2.0);
        let body = self.surface.set_center(pair.body, center);
        let label = self.surface.set_center(pair.label, center);
        body && label
    }

    pub fn clear_all(&mut self) {
        self.surface.clear();
        self.pairs.clear();
    }

    /// Clear everything, then draw `objects` in order.
    pub fn rebuild<'a>(&mut self, objects: impl IntoIterator<Item = (ObjectId, &'a PlacedObject)>) {
        self.clear_all();
        for (id, object) in objects {
            self.create(id, object);
        }
    }

    pub fn pair(&self, id: ObjectId) -> Option<PrimitivePair> {
        self.pairs.get(&id).copied()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}
