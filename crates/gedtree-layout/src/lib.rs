#![forbid(unsafe_code)]

//! Generation layering and kinship search for `gedtree`.
//!
//! Everything here is a pure function of a parsed [`gedtree_core::Gedcom`]: build a
//! [`KinGraph`] once, then derive generations, display order and connection paths from it.

pub mod generation;
pub mod graph;
pub mod order;
pub mod path;

pub use generation::{
    FounderPolicy, GenerationMap, GenerationOptions, ParentlessPolicy, RootPolicy,
    assign_generations, assign_generations_with, root_policy,
};
pub use graph::{KinGraph, SpouseEdge};
pub use order::{MISSING_YEAR, MarriageGroup, marriage_groups, order_generation};
pub use path::{PathHop, RelationshipKind, find_path, labelled_path, relationship_type};

#[cfg(test)]
mod tests;
