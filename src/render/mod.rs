//! Turn a mapping plan into a graph and the graph into an image.

pub mod graphviz;
pub mod tree;

pub use graphviz::{render_to_dir, RenderConfig};
pub use tree::render_plan;
