//! Collider generation against a host capability interface
//!
//! The generator never touches a concrete engine. It asks a [`ColliderHost`]
//! to create containers, attach box shapes and destroy previous output.

use log::{debug, info};

use crate::algorithm::cover::{OverlapPolicy, RectangleCoverSolver};
use crate::io::configuration::COLLIDER_CHILD_NAME;
use crate::spatial::grid::{GridBuilder, OccupancySource};
use crate::spatial::rect::{BoxShape, CellRect, RegionBounds};

/// Where generated colliders are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerTarget {
    /// Attach shapes to the host object itself
    #[default]
    UseHostObject,
    /// Create a child container named [`COLLIDER_CHILD_NAME`] and attach shapes to it
    CreateChildContainer,
}

/// Operations a host framework exposes to the generator
///
/// Hosts are assumed to succeed; failures materialising shapes are the
/// host's own concern.
pub trait ColliderHost {
    /// Handle identifying an object shapes can be attached to
    type Container: Clone;

    /// The object the generator is attached to
    fn host_object(&self) -> Self::Container;

    /// Create a child container under the host object
    fn create_container(&mut self, name: &str) -> Self::Container;

    /// Look up a child container of the host object by name
    fn find_container(&self, name: &str) -> Option<Self::Container>;

    /// Attach a box shape to a container
    fn attach_box(&mut self, container: &Self::Container, shape: BoxShape);

    /// Destroy every box shape attached to a container
    fn destroy_all_boxes(&mut self, container: &Self::Container);

    /// Destroy a child container together with its shapes
    fn destroy_container(&mut self, container: Self::Container);
}

/// Settings fixed for one generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    /// Where shapes are attached
    pub target: ContainerTarget,
    /// Whether rectangles may overlap
    pub overlap: OverlapPolicy,
}

/// Result of one generation pass
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Region the occupancy source described
    pub region: RegionBounds,
    /// Rectangles in grid-local cells, in discovery order
    pub rectangles: Vec<CellRect>,
    /// Shapes handed to the host, one per rectangle
    pub shapes: Vec<BoxShape>,
}

impl GenerationSummary {
    const fn empty(region: RegionBounds) -> Self {
        Self {
            region,
            rectangles: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Total cells claimed by all rectangles, counting overlaps once per rectangle
    pub fn claimed_cells(&self) -> usize {
        self.rectangles.iter().map(CellRect::area).sum()
    }
}

/// Turns occupancy sources into box colliders on a host
#[derive(Debug, Clone, Copy, Default)]
pub struct ColliderGenerator {
    config: GeneratorConfig,
}

impl ColliderGenerator {
    /// Create a generator with fixed settings
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Settings this generator was created with
    pub const fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Replace previous output with a fresh cover of `source`
    ///
    /// Removes earlier colliders, selects the target container, then builds a
    /// grid, solves it and attaches one box per rectangle in discovery order.
    /// A region with no cells attaches nothing.
    pub fn generate<H, S>(&self, host: &mut H, source: &S) -> GenerationSummary
    where
        H: ColliderHost,
        S: OccupancySource + ?Sized,
    {
        self.remove_all(host);
        let container = self.select_container(host);

        let region = source.bounds();
        if region.is_empty() {
            info!("region {}x{} has no cells", region.width, region.height);
            return GenerationSummary::empty(region);
        }

        let mut grid = GridBuilder::build(source);
        let rectangles = RectangleCoverSolver::new(self.config.overlap).solve(&mut grid);

        let shapes: Vec<BoxShape> = rectangles
            .iter()
            .map(|rect| BoxShape::from_cell_rect(rect, &region))
            .collect();
        for shape in &shapes {
            host.attach_box(&container, *shape);
        }

        info!(
            "attached {} box colliders for {}x{} region at ({}, {})",
            shapes.len(),
            region.width,
            region.height,
            region.x,
            region.y
        );

        GenerationSummary {
            region,
            rectangles,
            shapes,
        }
    }

    /// Destroy colliders on the host object and the child container, if any
    pub fn remove_all<H: ColliderHost>(&self, host: &mut H) {
        let host_object = host.host_object();
        host.destroy_all_boxes(&host_object);

        if let Some(child) = host.find_container(COLLIDER_CHILD_NAME) {
            debug!("destroying child container {COLLIDER_CHILD_NAME}");
            host.destroy_container(child);
        }
    }

    fn select_container<H: ColliderHost>(&self, host: &mut H) -> H::Container {
        match self.config.target {
            ContainerTarget::UseHostObject => host.host_object(),
            ContainerTarget::CreateChildContainer => host.create_container(COLLIDER_CHILD_NAME),
        }
    }
}
