use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{GroupId, RenderFrame, RenderSurface, Shape, ShapeId};

#[derive(Debug, Clone, PartialEq)]
struct SceneGroup {
    visible: bool,
    shapes: IndexMap<ShapeId, Shape>,
}

/// In-memory `RenderSurface` backing headless use and tests.
///
/// `IndexMap` keeps z-order and id lookup in one structure; removals use
/// `shift_remove` so the remaining order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    groups: IndexMap<GroupId, SceneGroup>,
    owners: IndexMap<ShapeId, GroupId>,
    next_group: u64,
    next_shape: u64,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group ids from back to front.
    pub fn group_order(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.groups.keys().copied()
    }

    #[must_use]
    pub fn is_group_visible(&self, group: GroupId) -> Option<bool> {
        self.groups.get(&group).map(|entry| entry.visible)
    }

    #[must_use]
    pub fn group_len(&self, group: GroupId) -> usize {
        self.groups.get(&group).map_or(0, |entry| entry.shapes.len())
    }

    /// Shapes of one group from back to front, including hidden groups.
    pub fn shapes_in(&self, group: GroupId) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.groups
            .get(&group)
            .into_iter()
            .flat_map(|entry| entry.shapes.iter().map(|(id, shape)| (*id, shape)))
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        let group = self.owners.get(&id)?;
        self.groups.get(group)?.shapes.get(&id)
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.owners.len()
    }

    /// Flattens every visible group into one back-to-front frame.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let shapes = self
            .groups
            .values()
            .filter(|group| group.visible)
            .flat_map(|group| group.shapes.values().cloned())
            .collect();
        RenderFrame::from_shapes(shapes)
    }

    fn group_mut(&mut self, group: GroupId) -> ChartResult<&mut SceneGroup> {
        self.groups
            .get_mut(&group)
            .ok_or_else(|| ChartError::UnknownNode(group.to_string()))
    }
}

impl RenderSurface for Scene {
    fn create_group(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        self.groups.insert(
            id,
            SceneGroup {
                visible: true,
                shapes: IndexMap::new(),
            },
        );
        id
    }

    fn insert(&mut self, group: GroupId, shape: Shape) -> ChartResult<ShapeId> {
        let id = ShapeId(self.next_shape);
        self.group_mut(group)?.shapes.insert(id, shape);
        self.next_shape += 1;
        self.owners.insert(id, group);
        Ok(id)
    }

    fn update(&mut self, shape: ShapeId, replacement: Shape) -> ChartResult<()> {
        let group = *self
            .owners
            .get(&shape)
            .ok_or_else(|| ChartError::UnknownNode(shape.to_string()))?;
        let slot = self
            .group_mut(group)?
            .shapes
            .get_mut(&shape)
            .ok_or_else(|| ChartError::UnknownNode(shape.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    fn remove(&mut self, shape: ShapeId) -> ChartResult<()> {
        let group = self
            .owners
            .shift_remove(&shape)
            .ok_or_else(|| ChartError::UnknownNode(shape.to_string()))?;
        self.group_mut(group)?.shapes.shift_remove(&shape);
        Ok(())
    }

    fn clear_group(&mut self, group: GroupId) -> ChartResult<()> {
        let removed: Vec<ShapeId> = self.group_mut(group)?.shapes.drain(..).map(|(id, _)| id).collect();
        for id in removed {
            self.owners.shift_remove(&id);
        }
        Ok(())
    }

    fn set_group_visible(&mut self, group: GroupId, visible: bool) -> ChartResult<()> {
        self.group_mut(group)?.visible = visible;
        Ok(())
    }

    fn bring_to_front(&mut self, group: GroupId) -> ChartResult<()> {
        let index = self
            .groups
            .get_index_of(&group)
            .ok_or_else(|| ChartError::UnknownNode(group.to_string()))?;
        let last = self.groups.len() - 1;
        self.groups.move_index(index, last);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::render::{CirclePrimitive, Color, RenderSurface, Shape};

    fn marker(x: f64) -> Shape {
        Shape::Marker(CirclePrimitive::new(x, 0.0, 5.0, Color::BLACK))
    }

    #[test]
    fn frame_respects_group_order_and_visibility() {
        let mut scene = Scene::new();
        let back = scene.create_group();
        let front = scene.create_group();
        scene.insert(front, marker(2.0)).expect("insert");
        scene.insert(back, marker(1.0)).expect("insert");

        let frame = scene.frame();
        assert_eq!(frame.shapes, vec![marker(1.0), marker(2.0)]);

        scene.bring_to_front(back).expect("reorder");
        assert_eq!(scene.frame().shapes, vec![marker(2.0), marker(1.0)]);

        scene.set_group_visible(front, false).expect("hide");
        scene.set_group_visible(front, false).expect("hide twice");
        assert_eq!(scene.frame().shapes, vec![marker(1.0)]);
        assert_eq!(scene.group_len(front), 1);
    }

    #[test]
    fn removed_shape_ids_become_unknown() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let id = scene.insert(group, marker(1.0)).expect("insert");
        scene.remove(id).expect("remove");
        assert!(scene.remove(id).is_err());
        assert!(scene.update(id, marker(3.0)).is_err());
        assert_eq!(scene.shape_count(), 0);
    }

    #[test]
    fn clear_group_drops_all_shapes() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        for x in 0..4 {
            scene.insert(group, marker(f64::from(x))).expect("insert");
        }
        scene.clear_group(group).expect("clear");
        assert_eq!(scene.group_len(group), 0);
        assert_eq!(scene.shape_count(), 0);
        assert_eq!(scene.is_group_visible(group), Some(true));
    }
}
