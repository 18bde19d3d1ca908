//! Graphviz DOT rendering of a finished type graph.

mod writer;

pub use writer::{render_dot, sanitize_dot_id, write_dot, write_to_file};
