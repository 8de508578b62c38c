// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer-driven selection and dragging.
//!
//! A gesture is press, any number of moves, release. The press picks an
//! object and remembers where inside it the pointer grabbed; moves keep
//! that grab point under the pointer; the release ends the gesture.
//!
//! Picking walks objects in creation order and takes the first whose box
//! holds the point and overlaps the topmost primitive there. With stacked
//! objects this can pick the one underneath the visible one. Saved scenes
//! rely on that behavior, so it is kept.

use crate::models::object::ObjectId;
use crate::models::scene::Scene;
use crate::render::surface::HIT_SLOP;
use crate::render::sync::RenderSync;
use crate::util::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        object: ObjectId,
        /// Pointer position relative to the object's top-left corner.
        offset: Point,
    },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn selected(&self) -> Option<ObjectId> {
        match self.state {
            DragState::Dragging { object, .. } => Some(object),
            DragState::Idle => None,
        }
    }

    /// Start a gesture at `point`. Returns the picked object, if any.
    pub fn pointer_down(&mut self, point: Point, scene: &Scene, render: &RenderSync) -> Option<ObjectId> {
        self.state = DragState::Idle;

        let surface = render.surface();
        let hit = surface.topmost_at(point)?;

        let (id, object) = scene.iter().find(|(_, object)| {
            let bounds = object.bounds();
            bounds.expand(HIT_SLOP).contains(point) && surface.overlapping(&bounds).contains(&hit)
        })?;

        self.state = DragState::Dragging {
            object: id,
            offset: Point::new(point.x - object.x, point.y - object.y),
        };
        log::info!("Selected object {} ({:?})", id.0, object.name);
        Some(id)
    }

    /// Drag the selected object so its grab point follows `point`.
    ///
    /// The scene is updated before the render layer. Returns false when
    /// nothing is selected.
    pub fn pointer_move(&mut self, point: Point, scene: &mut Scene, render: &mut RenderSync) -> bool {
        let DragState::Dragging { object: id, offset } = self.state else {
            return false;
        };

        let new_x = point.x - offset.x;
        let new_y = point.y - offset.y;

        let Some(object) = scene.get_mut(id) else {
            log::error!("Dragged object {} is no longer in the scene", id.0);
            self.state = DragState::Idle;
            return false;
        };
        object.set_position(new_x, new_y);

        if !render.move_to(id, object, new_x, new_y) {
            log::error!("Dragged object {} has no primitives to move", id.0);
        }
        true
    }

    /// End the gesture. Returns the object that was being dragged.
    pub fn pointer_up(&mut self) -> Option<ObjectId> {
        let released = self.selected();
        if let Some(id) = released {
            log::info!("Released object {}", id.0);
        }
        self.state = DragState::Idle;
        released
    }

    /// Drop any in-flight gesture, e.g. after the scene was replaced.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::templates::TemplateStore;
    use crate::models::template::Template;

    fn editor() -> (Scene, RenderSync, TemplateStore) {
        let templates = TemplateStore::from_templates(vec![
            Template {
                name: "tree".to_string(),
                width: 40.0,
                height: 80.0,
                image: None,
            },
            Template {
                name: "rock".to_string(),
                width: 20.0,
                height: 20.0,
                image: Some("rock.png".to_string()),
            },
        ]);
        (Scene::new(), RenderSync::new(), templates)
    }

    fn add(scene: &mut Scene, render: &mut RenderSync, templates: &TemplateStore, t: &str, name: &str) -> ObjectId {
        let id = scene.instantiate(templates, t, name).unwrap();
        render.create(id, scene.get(id).unwrap());
        id
    }

    fn drag(ctrl: &mut DragController, scene: &mut Scene, render: &mut RenderSync, from: Point, to: Point) {
        ctrl.pointer_down(from, scene, render);
        ctrl.pointer_move(to, scene, render);
        ctrl.pointer_up();
    }

    #[test]
    fn test_drag_preserves_grab_offset() {
        let (mut scene, mut render, templates) = editor();
        let oak = add(&mut scene, &mut render, &templates, "tree", "Oak");
        let mut ctrl = DragController::new();

        assert_eq!(ctrl.pointer_down(Point::new(110.0, 110.0), &scene, &render), Some(oak));
        assert_eq!(
            ctrl.state(),
            DragState::Dragging {
                object: oak,
                offset: Point::new(10.0, 10.0)
            }
        );

        assert!(ctrl.pointer_move(Point::new(150.0, 140.0), &mut scene, &mut render));
        let moved = scene.get(oak).unwrap();
        assert_eq!((moved.x, moved.y), (140.0, 130.0));

        let pair = render.pair(oak).unwrap();
        assert_eq!(render.surface().get(pair.body).unwrap().center, Point::new(160.0, 170.0));
        assert_eq!(render.surface().get(pair.label).unwrap().center, Point::new(160.0, 170.0));

        assert_eq!(ctrl.pointer_up(), Some(oak));
        assert_eq!(ctrl.state(), DragState::Idle);
    }

    #[test]
    fn test_drag_by_vector_changes_only_position() {
        let (mut scene, mut render, templates) = editor();
        let rock = add(&mut scene, &mut render, &templates, "rock", "Pebble");
        let before = scene.get(rock).unwrap().clone();
        let mut ctrl = DragController::new();

        let (dx, dy) = (-137.5, 42.25);
        let from = Point::new(105.0, 115.0);
        drag(&mut ctrl, &mut scene, &mut render, from, Point::new(from.x + dx, from.y + dy));

        let after = scene.get(rock).unwrap();
        assert_eq!((after.x, after.y), (before.x + dx, before.y + dy));
        assert_eq!(after.width, before.width);
        assert_eq!(after.height, before.height);
        assert_eq!(after.template_type, before.template_type);
        assert_eq!(after.image_path, before.image_path);
    }

    #[test]
    fn test_multiple_moves_track_pointer() {
        let (mut scene, mut render, templates) = editor();
        let oak = add(&mut scene, &mut render, &templates, "tree", "Oak");
        let mut ctrl = DragController::new();

        ctrl.pointer_down(Point::new(120.0, 150.0), &scene, &render);
        for step in 1..=5 {
            let p = Point::new(120.0 + step as f64 * 10.0, 150.0 - step as f64 * 3.0);
            ctrl.pointer_move(p, &mut scene, &mut render);
        }
        ctrl.pointer_up();

        let o = scene.get(oak).unwrap();
        assert_eq!((o.x, o.y), (150.0, 85.0));
    }

    #[test]
    fn test_press_on_empty_canvas_selects_nothing() {
        let (mut scene, mut render, templates) = editor();
        add(&mut scene, &mut render, &templates, "tree", "Oak");
        let before = scene.clone();
        let mut ctrl = DragController::new();

        assert_eq!(ctrl.pointer_down(Point::new(600.0, 500.0), &scene, &render), None);
        assert_eq!(ctrl.state(), DragState::Idle);
        assert!(!ctrl.pointer_move(Point::new(10.0, 10.0), &mut scene, &mut render));
        assert_eq!(scene, before);
    }

    #[test]
    fn test_release_without_selection_is_noop() {
        let (mut scene, mut render, templates) = editor();
        add(&mut scene, &mut render, &templates, "tree", "Oak");
        let before = scene.clone();
        let mut ctrl = DragController::new();

        assert_eq!(ctrl.pointer_up(), None);
        assert_eq!(scene, before);
        assert_eq!(ctrl.state(), DragState::Idle);
    }

    #[test]
    fn test_move_after_release_does_nothing() {
        let (mut scene, mut render, templates) = editor();
        let oak = add(&mut scene, &mut render, &templates, "tree", "Oak");
        let mut ctrl = DragController::new();

        drag(&mut ctrl, &mut scene, &mut render, Point::new(110.0, 110.0), Point::new(210.0, 110.0));
        assert!(!ctrl.pointer_move(Point::new(500.0, 500.0), &mut scene, &mut render));
        assert_eq!(scene.get(oak).unwrap().x, 200.0);
    }

    #[test]
    fn test_dragging_second_object_moves_its_own_primitives() {
        let (mut scene, mut render, templates) = editor();
        let first = add(&mut scene, &mut render, &templates, "tree", "First");
        let mut ctrl = DragController::new();
        drag(&mut ctrl, &mut scene, &mut render, Point::new(110.0, 110.0), Point::new(410.0, 110.0));

        let second = add(&mut scene, &mut render, &templates, "tree", "Second");
        assert_eq!(ctrl.pointer_down(Point::new(105.0, 105.0), &scene, &render), Some(second));
        ctrl.pointer_move(Point::new(105.0, 305.0), &mut scene, &mut render);
        ctrl.pointer_up();

        let f = scene.get(first).unwrap();
        let s = scene.get(second).unwrap();
        assert_eq!((f.x, f.y), (400.0, 100.0));
        assert_eq!((s.x, s.y), (100.0, 300.0));

        let surface = render.surface();
        let fp = render.pair(first).unwrap();
        let sp = render.pair(second).unwrap();
        assert_eq!(surface.get(fp.body).unwrap().center, f.center());
        assert_eq!(surface.get(fp.label).unwrap().center, f.center());
        assert_eq!(surface.get(sp.body).unwrap().center, s.center());
        assert_eq!(surface.get(sp.label).unwrap().center, s.center());
    }

    #[test]
    fn test_stacked_objects_pick_earliest_created() {
        let (mut scene, mut render, templates) = editor();
        let bottom = add(&mut scene, &mut render, &templates, "tree", "Bottom");
        let top = add(&mut scene, &mut render, &templates, "tree", "Top");
        let mut ctrl = DragController::new();

        // Both sit at the default origin; the later one is drawn on top.
        let hit = render.surface().topmost_at(Point::new(110.0, 110.0)).unwrap();
        assert_eq!(hit, render.pair(top).unwrap().body);
        assert_eq!(ctrl.pointer_down(Point::new(110.0, 110.0), &scene, &render), Some(bottom));
    }

    #[test]
    fn test_new_press_discards_previous_gesture() {
        let (mut scene, mut render, templates) = editor();
        add(&mut scene, &mut render, &templates, "tree", "Oak");
        let mut ctrl = DragController::new();

        ctrl.pointer_down(Point::new(110.0, 110.0), &scene, &render);
        assert_eq!(ctrl.pointer_down(Point::new(700.0, 700.0), &scene, &render), None);
        assert_eq!(ctrl.selected(), None);
    }

    #[test]
    fn test_reset_clears_selection() {
        let (mut scene, mut render, templates) = editor();
        add(&mut scene, &mut render, &templates, "tree", "Oak");
        let mut ctrl = DragController::new();

        ctrl.pointer_down(Point::new(110.0, 110.0), &scene, &render);
        ctrl.reset();
        assert_eq!(ctrl.state(), DragState::Idle);
    }
}
