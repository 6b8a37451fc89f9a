//! Topic clusters: template generation and the render walk.

pub mod generator;
pub mod walk;

pub use generator::{generate, ClusterHints};
pub use walk::{PlacedNode, Position, RenderWalk};
