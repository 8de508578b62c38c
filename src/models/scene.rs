// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene state management.
//!
//! The scene is the authoritative, ordered list of placed objects. It never
//! touches rendering or storage; callers drive the render layer from the
//! ids it hands back.

use super::object::{ObjectId, PlacedObject};
use crate::error::{EditorError, EditorResult};
use crate::io::templates::TemplateStore;
use crate::util::geometry::Point;

/// Where every freshly instantiated object is placed.
pub const DEFAULT_ORIGIN: Point = Point { x: 100.0, y: 100.0 };

/// Ordered sequence of placed objects, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    objects: Vec<PlacedObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new object from `template_name` at the default origin.
    ///
    /// The scene is left untouched when the template is unknown.
    pub fn instantiate(
        &mut self,
        templates: &TemplateStore,
        template_name: &str,
        display_name: &str,
    ) -> EditorResult<ObjectId> {
        let template = templates
            .get(template_name)
            .ok_or_else(|| EditorError::TemplateNotFound(template_name.to_string()))?;

        let object = PlacedObject {
            name: display_name.to_string(),
            x: DEFAULT_ORIGIN.x,
            y: DEFAULT_ORIGIN.y,
            width: template.width,
            height: template.height,
            template_type: template_name.to_string(),
            image_path: template.image.clone(),
        };

        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        log::info!(
            "Instantiated {:?} from template {:?}, total: {}",
            display_name,
            template_name,
            self.objects.len()
        );
        Ok(id)
    }

    /// Discard every object and install `objects` in their place.
    pub fn replace_all(&mut self, objects: Vec<PlacedObject>) {
        self.objects = objects;
    }

    /// Read-only view in insertion order.
    pub fn snapshot(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PlacedObject> {
        self.objects.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &PlacedObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::Template;

    fn store() -> TemplateStore {
        TemplateStore::from_templates(vec![
            Template {
                name: "tree".to_string(),
                width: 40.0,
                height: 80.0,
                image: None,
            },
            Template {
                name: "house".to_string(),
                width: 120.0,
                height: 90.0,
                image: Some("assets/house.png".to_string()),
            },
        ])
    }

    #[test]
    fn test_instantiate_copies_template_at_default_origin() {
        let mut scene = Scene::new();
        let id = scene.instantiate(&store(), "tree", "Oak").unwrap();

        assert_eq!(id, ObjectId(0));
        assert_eq!(
            scene.get(id).unwrap(),
            &PlacedObject {
                name: "Oak".to_string(),
                x: 100.0,
                y: 100.0,
                width: 40.0,
                height: 80.0,
                template_type: "tree".to_string(),
                image_path: None,
            }
        );
    }

    #[test]
    fn test_instantiate_ignores_existing_occupants() {
        let templates = store();
        let mut scene = Scene::new();
        scene.instantiate(&templates, "tree", "Oak").unwrap();
        scene.instantiate(&templates, "tree", "Oak").unwrap();
        let id = scene.instantiate(&templates, "house", "Home").unwrap();

        assert_eq!(scene.len(), 3);
        let house = scene.get(id).unwrap();
        assert_eq!((house.x, house.y), (100.0, 100.0));
        assert_eq!(house.image_path.as_deref(), Some("assets/house.png"));
        // Names need not be unique.
        assert_eq!(scene.snapshot()[0].name, scene.snapshot()[1].name);
    }

    #[test]
    fn test_instantiate_unknown_template_leaves_scene_unchanged() {
        let mut scene = Scene::new();
        scene.instantiate(&store(), "tree", "Oak").unwrap();

        let err = scene.instantiate(&store(), "dragon", "Smaug").unwrap_err();
        assert!(matches!(err, EditorError::TemplateNotFound(ref n) if n == "dragon"));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_replace_all_installs_new_sequence() {
        let mut scene = Scene::new();
        scene.instantiate(&store(), "tree", "Oak").unwrap();

        let rock = PlacedObject {
            name: "Rock".to_string(),
            x: 5.0,
            y: 5.0,
            width: 20.0,
            height: 20.0,
            template_type: "rock".to_string(),
            image_path: None,
        };
        scene.replace_all(vec![rock.clone()]);
        assert_eq!(scene.snapshot(), &[rock]);

        scene.replace_all(Vec::new());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_iter_yields_insertion_order() {
        let templates = store();
        let mut scene = Scene::new();
        scene.instantiate(&templates, "house", "A").unwrap();
        scene.instantiate(&templates, "tree", "B").unwrap();

        let names: Vec<_> = scene.iter().map(|(id, o)| (id.0, o.name.as_str())).collect();
        assert_eq!(names, vec![(0, "A"), (1, "B")]);
    }
}
