pub mod builder;
pub mod edge;
pub mod frontend;
pub mod graph;
pub mod matcher;
pub mod node;
pub mod ports;
pub mod resolver;
pub mod type_registry;
