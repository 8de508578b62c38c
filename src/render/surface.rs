// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Retained drawing surface.
//!
//! Primitives are kept in draw order: later entries are painted on top.
//! The surface answers the two spatial queries hit-testing needs, the
//! topmost primitive under a point and every primitive overlapping a box.

use crate::models::object::ObjectId;
use crate::util::geometry::{Bounds, Point};

/// How far outside its bounds a primitive still counts as under the pointer.
pub const HIT_SLOP: f64 = 1.0;

/// Estimated advance of one label glyph, in pixels.
pub const LABEL_CHAR_WIDTH: f64 = 7.0;
pub const LABEL_HEIGHT: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveKind {
    /// Object body drawn from an image file scaled to `size`.
    Image { path: String },
    /// Object body drawn as a filled rectangle.
    Rectangle,
    Label { text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub id: PrimitiveId,
    pub owner: ObjectId,
    pub kind: PrimitiveKind,
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Primitive {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_size(self.center, self.width, self.height)
    }
}

#[derive(Debug, Default)]
pub struct Surface {
    primitives: Vec<Primitive>,
    next_id: u64,
}

impl Surface {
    /// Add a primitive on top of everything drawn so far.
    pub fn push(
        &mut self,
        owner: ObjectId,
        kind: PrimitiveKind,
        center: Point,
        width: f64,
        height: f64,
    ) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.primitives.push(Primitive {
            id,
            owner,
            kind,
            center,
            width,
            height,
        });
        id
    }

    /// Push a text label sized from its character count.
    pub fn push_label(&mut self, owner: ObjectId, text: &str, center: Point) -> PrimitiveId {
        let width = text.chars().count() as f64 * LABEL_CHAR_WIDTH;
        self.push(
            owner,
            PrimitiveKind::Label {
                text: text.to_string(),
            },
            center,
            width,
            LABEL_HEIGHT,
        )
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.id == id)
    }

    /// Move a primitive's center. Returns false if the id is unknown.
    pub fn set_center(&mut self, id: PrimitiveId, center: Point) -> bool {
        match self.primitives.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.center = center;
                true
            }
            None => false,
        }
    }

    /// Last-drawn primitive whose bounds contain `point`.
    pub fn topmost_at(&self, point: Point) -> Option<PrimitiveId> {
        self.primitives
            .iter()
            .rev()
            .find(|p| p.bounds().expand(HIT_SLOP).contains(point))
            .map(|p| p.id)
    }

    /// Every primitive whose bounds intersect `area`, bottom to top.
    pub fn overlapping(&self, area: &Bounds) -> Vec<PrimitiveId> {
        self.primitives
            .iter()
            .filter(|p| p.bounds().intersects(area))
            .map(|p| p.id)
            .collect()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Primitives in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
