//! CLI Commands

pub mod duplicates;
pub mod graph;
pub mod layout;
