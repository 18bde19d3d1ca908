//! typegraph library: structural type graphs (Has, Embeds, Implements, UsesAsAlias) built
//! from a resolved front-end program and rendered as Graphviz DOT.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
