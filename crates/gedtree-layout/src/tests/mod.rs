mod path;

use crate::KinGraph;

pub(crate) fn graph_of(text: &str) -> KinGraph {
    KinGraph::from_gedcom(&gedtree_core::parse(text))
}

pub(crate) fn founders(text: &str) -> crate::GenerationMap {
    crate::assign_generations(&graph_of(text), &crate::FounderPolicy)
}
