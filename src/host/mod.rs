//! Host-side collider materialisation
//!
//! The cover algorithm only produces rectangles. Placing them as colliders on
//! a real object is delegated to a host implementing [`ColliderHost`].

/// Generator driving a host through remove, select, cover and attach
pub mod generator;
/// In-memory host used by the command-line tool
pub mod memory;

pub use generator::{ColliderGenerator, ColliderHost, ContainerTarget, GeneratorConfig};
pub use memory::{ContainerHandle, MemoryHost};
