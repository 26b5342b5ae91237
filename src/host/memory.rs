//! In-memory collider host recording attached shapes

use std::collections::BTreeMap;

use crate::host::generator::ColliderHost;
use crate::spatial::rect::BoxShape;

/// Handle to a container owned by [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerHandle {
    /// The host object itself
    Host,
    /// A child container by creation id
    Child(usize),
}

/// Child container with its attached shapes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChildContainer {
    /// Container name
    pub name: String,
    /// Shapes in attachment order
    pub shapes: Vec<BoxShape>,
}

/// Host object that keeps shapes and child containers in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    host_shapes: Vec<BoxShape>,
    children: BTreeMap<usize, ChildContainer>,
    next_child: usize,
}

impl MemoryHost {
    /// Create a host with no shapes and no children
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes attached to a container, empty for unknown handles
    pub fn shapes(&self, container: ContainerHandle) -> &[BoxShape] {
        match container {
            ContainerHandle::Host => self.host_shapes.as_slice(),
            ContainerHandle::Child(id) => self
                .children
                .get(&id)
                .map(|child| child.shapes.as_slice())
                .unwrap_or_default(),
        }
    }

    /// Live child containers in creation order
    pub fn children(&self) -> impl Iterator<Item = (ContainerHandle, &ChildContainer)> {
        self.children
            .iter()
            .map(|(&id, child)| (ContainerHandle::Child(id), child))
    }

    /// Number of shapes across the host object and all children
    pub fn shape_count(&self) -> usize {
        self.host_shapes.len()
            + self
                .children
                .values()
                .map(|child| child.shapes.len())
                .sum::<usize>()
    }

    /// Whether no generated artifact remains
    pub fn is_clean(&self) -> bool {
        self.host_shapes.is_empty() && self.children.is_empty()
    }
}

impl ColliderHost for MemoryHost {
    type Container = ContainerHandle;

    fn host_object(&self) -> Self::Container {
        ContainerHandle::Host
    }

    fn create_container(&mut self, name: &str) -> Self::Container {
        let id = self.next_child;
        self.next_child += 1;
        self.children.insert(
            id,
            ChildContainer {
                name: name.to_string(),
                shapes: Vec::new(),
            },
        );
        ContainerHandle::Child(id)
    }

    fn find_container(&self, name: &str) -> Option<Self::Container> {
        self.children
            .iter()
            .find(|(_, child)| child.name == name)
            .map(|(&id, _)| ContainerHandle::Child(id))
    }

    fn attach_box(&mut self, container: &Self::Container, shape: BoxShape) {
        match container {
            ContainerHandle::Host => self.host_shapes.push(shape),
            ContainerHandle::Child(id) => {
                if let Some(child) = self.children.get_mut(id) {
                    child.shapes.push(shape);
                }
            }
        }
    }

    fn destroy_all_boxes(&mut self, container: &Self::Container) {
        match container {
            ContainerHandle::Host => self.host_shapes.clear(),
            ContainerHandle::Child(id) => {
                if let Some(child) = self.children.get_mut(id) {
                    child.shapes.clear();
                }
            }
        }
    }

    fn destroy_container(&mut self, container: Self::Container) {
        // The host object outlives every generation pass
        if let ContainerHandle::Child(id) = container {
            self.children.remove(&id);
        }
    }
}
