mod component;
pub mod render;
mod state;
mod types;

pub use component::MindMapCanvas;
pub use types::{Edge, Graph, Node};
