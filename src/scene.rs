//! Scene arena
//!
//! The host owns one [`Scene`] holding every shape. Surfaces and layouts only
//! keep [`DrawableId`] handles into it, so the same shape can be registered
//! with both without anyone sharing ownership.

use std::fmt;

use slotmap::{SecondaryMap, SlotMap};

use crate::renderer::Renderer;
use crate::shapes::Shape;

slotmap::new_key_type! {
    /// Handle to a shape stored in a [`Scene`]
    pub struct DrawableId;
}

/// Called with the surface's renderer and the surface-local click position
pub type ClickHandler = Box<dyn FnMut(&mut dyn Renderer, f64, f64)>;

/// Storage for all shapes, indexed by their ids
#[derive(Default)]
pub struct Scene {
    shapes: SlotMap<DrawableId, Shape>,
    on_click: SecondaryMap<DrawableId, ClickHandler>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shape: impl Into<Shape>) -> DrawableId {
        self.shapes.insert(shape.into())
    }

    /// Remove a shape together with its click handler
    pub fn remove(&mut self, id: DrawableId) -> Option<Shape> {
        self.on_click.remove(id);
        self.shapes.remove(id)
    }

    pub fn get(&self, id: DrawableId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    pub fn contains(&self, id: DrawableId) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DrawableId, &Shape)> {
        self.shapes.iter()
    }

    /// Install a click handler. Returns false if `id` is not in the scene.
    pub fn set_on_click(
        &mut self,
        id: DrawableId,
        handler: impl FnMut(&mut dyn Renderer, f64, f64) + 'static,
    ) -> bool {
        if !self.shapes.contains_key(id) {
            return false;
        }
        self.on_click.insert(id, Box::new(handler));
        true
    }

    pub fn clear_on_click(&mut self, id: DrawableId) -> bool {
        self.on_click.remove(id).is_some()
    }

    pub fn has_on_click(&self, id: DrawableId) -> bool {
        self.on_click.contains_key(id)
    }

    pub(crate) fn click_handler_mut(&mut self, id: DrawableId) -> Option<&mut ClickHandler> {
        self.on_click.get_mut(id)
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("shapes", &self.shapes)
            .field("clickable", &self.on_click.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{CircleShape, RectangleShape};

    #[test]
    fn insert_get_remove() {
        let mut scene = Scene::new();
        let id = scene.insert(RectangleShape::new());
        assert!(scene.contains(id));
        assert_eq!(scene.len(), 1);
        assert!(matches!(scene.get(id), Some(Shape::Rectangle(_))));

        assert!(scene.remove(id).is_some());
        assert!(!scene.contains(id));
        assert!(scene.get(id).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn stale_handle_does_not_resolve_to_new_shape() {
        let mut scene = Scene::new();
        let old = scene.insert(RectangleShape::new());
        scene.remove(old);
        let new = scene.insert(CircleShape::new(3.0));
        assert_ne!(old, new);
        assert!(scene.get(old).is_none());
    }

    #[test]
    fn click_handlers_follow_shape_lifetime() {
        let mut scene = Scene::new();
        let id = scene.insert(RectangleShape::new());
        assert!(scene.set_on_click(id, |_, _, _| {}));
        assert!(scene.has_on_click(id));

        scene.remove(id);
        assert!(!scene.has_on_click(id));
        assert!(!scene.set_on_click(id, |_, _, _| {}));
    }

    #[test]
    fn clear_on_click_reports_removal() {
        let mut scene = Scene::new();
        let id = scene.insert(RectangleShape::new());
        assert!(!scene.clear_on_click(id));
        scene.set_on_click(id, |_, _, _| {});
        assert!(scene.clear_on_click(id));
    }
}
