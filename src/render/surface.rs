use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

/// Retained, z-ordered container of drawables that a viewport writes into.
///
/// Groups are ordered back to front, as are the shapes inside each group.
/// Implementations report ids they do not hold as `ChartError::UnknownNode`.
pub trait RenderSurface {
    /// Creates an empty, visible group in front of every existing group.
    fn create_group(&mut self) -> GroupId;

    /// Appends `shape` at the front of `group`.
    fn insert(&mut self, group: GroupId, shape: Shape) -> ChartResult<ShapeId>;

    /// Replaces the geometry and style of an existing shape in place.
    fn update(&mut self, shape: ShapeId, replacement: Shape) -> ChartResult<()>;

    fn remove(&mut self, shape: ShapeId) -> ChartResult<()>;

    fn clear_group(&mut self, group: GroupId) -> ChartResult<()>;

    fn set_group_visible(&mut self, group: GroupId, visible: bool) -> ChartResult<()>;

    fn bring_to_front(&mut self, group: GroupId) -> ChartResult<()>;
}
