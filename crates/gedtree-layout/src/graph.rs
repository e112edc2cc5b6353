//! Index-based kinship graph.
//!
//! Individuals become dense `usize` nodes in file order. Edges are resolved once from
//! [`gedtree_core::Relations`], so traversals never touch string maps in their hot loops.

use gedtree_core::{Gedcom, SpouseStatus};
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpouseEdge {
    pub node: usize,
    pub family_id: String,
    pub status: SpouseStatus,
    pub marriage_year: Option<i32>,
    /// Position of the family in the owner's `FAMS` list.
    pub fams_index: usize,
}

#[derive(Debug, Clone, Default)]
struct NodeEntry {
    id: String,
    birth_year: Option<i32>,
    parents: Vec<usize>,
    children: Vec<usize>,
    spouses: Vec<SpouseEdge>,
}

#[derive(Debug, Clone, Default)]
pub struct KinGraph {
    nodes: Vec<NodeEntry>,
    node_index: HashMap<String, usize>,
}

impl KinGraph {
    pub fn from_gedcom(gedcom: &Gedcom) -> Self {
        let rel = gedcom.relations();

        let mut node_index: HashMap<String, usize> = HashMap::default();
        node_index.reserve(gedcom.individuals.len());
        for (idx, id) in gedcom.individuals.keys().enumerate() {
            node_index.insert(id.clone(), idx);
        }
        let lookup = |id: &str| node_index.get(id).copied();

        let mut nodes = Vec::with_capacity(gedcom.individuals.len());
        for (id, person) in &gedcom.individuals {
            let mut parents: Vec<usize> = Vec::new();
            for p in rel.parents(id).into_iter().filter_map(lookup) {
                if !parents.contains(&p) {
                    parents.push(p);
                }
            }
            let children = rel.children(id).into_iter().filter_map(lookup).collect();
            let spouses = rel
                .spouses(id)
                .into_iter()
                .enumerate()
                .filter_map(|(fams_index, link)| {
                    let node = lookup(&link.spouse_id)?;
                    Some(SpouseEdge {
                        node,
                        marriage_year: link.marriage_year(),
                        family_id: link.family_id,
                        status: link.status,
                        fams_index,
                    })
                })
                .collect();

            nodes.push(NodeEntry {
                id: id.clone(),
                birth_year: person.birth_year(),
                parents,
                children,
                spouses,
            });
        }

        let graph = Self { nodes, node_index };
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built kinship graph"
        );
        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent->child edges plus spouse edges, each counted once per direction.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.children.len() + n.spouses.len())
            .sum()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn id(&self, node: usize) -> &str {
        &self.nodes[node].id
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn birth_year(&self, node: usize) -> Option<i32> {
        self.nodes[node].birth_year
    }

    pub fn parents(&self, node: usize) -> &[usize] {
        &self.nodes[node].parents
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    pub fn spouses(&self, node: usize) -> &[SpouseEdge] {
        &self.nodes[node].spouses
    }

    pub fn spouse_edge(&self, node: usize, spouse: usize) -> Option<&SpouseEdge> {
        self.nodes[node].spouses.iter().find(|s| s.node == spouse)
    }

    pub fn has_parents(&self, node: usize) -> bool {
        !self.nodes[node].parents.is_empty()
    }

    pub fn has_children(&self, node: usize) -> bool {
        !self.nodes[node].children.is_empty()
    }

    /// Neighbors in traversal order: parents, then children, then spouses.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let entry = &self.nodes[node];
        entry
            .parents
            .iter()
            .copied()
            .chain(entry.children.iter().copied())
            .chain(entry.spouses.iter().map(|s| s.node))
    }
}
