//! Generation assignment.
//!
//! GEDCOM carries no generation field, so generations are derived from graph structure:
//! roots are picked by a [`RootPolicy`], a breadth-first pass propagates generations along
//! child (+1) and spouse (+0) edges, and a sweep assigns whatever the pass never reached.

use crate::graph::KinGraph;
use crate::order::order_generation;
use gedtree_core::{RootPolicyKind, TreeConfig};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

/// Chooses the individuals seeded at generation 1.
pub trait RootPolicy {
    fn name(&self) -> &'static str;

    /// Root nodes in file order.
    fn select_roots(&self, graph: &KinGraph) -> Vec<usize>;
}

/// Parentless individuals with children whose spouses are also parentless.
///
/// Falls back to parentless individuals whose spouses are parentless, then to every parentless
/// individual. The spouse condition keeps a married-in spouse (no recorded parents, partner of
/// someone who has parents) from seeding a generation of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct FounderPolicy;

impl RootPolicy for FounderPolicy {
    fn name(&self) -> &'static str {
        "founders"
    }

    fn select_roots(&self, graph: &KinGraph) -> Vec<usize> {
        let parentless: Vec<usize> = (0..graph.node_count())
            .filter(|&n| !graph.has_parents(n))
            .collect();
        let spouses_parentless = |n: usize| {
            graph
                .spouses(n)
                .iter()
                .all(|s| !graph.has_parents(s.node))
        };

        let founders: Vec<usize> = parentless
            .iter()
            .copied()
            .filter(|&n| graph.has_children(n) && spouses_parentless(n))
            .collect();
        if !founders.is_empty() {
            return founders;
        }

        let unattached: Vec<usize> = parentless
            .iter()
            .copied()
            .filter(|&n| spouses_parentless(n))
            .collect();
        if !unattached.is_empty() {
            tracing::debug!(
                roots = unattached.len(),
                "no founders with children; using parentless individuals with parentless spouses"
            );
            return unattached;
        }

        tracing::debug!("falling back to every parentless individual as a root");
        parentless
    }
}

/// Every individual without recorded parents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentlessPolicy;

impl RootPolicy for ParentlessPolicy {
    fn name(&self) -> &'static str {
        "parentless"
    }

    fn select_roots(&self, graph: &KinGraph) -> Vec<usize> {
        (0..graph.node_count())
            .filter(|&n| !graph.has_parents(n))
            .collect()
    }
}

pub fn root_policy(kind: RootPolicyKind) -> &'static dyn RootPolicy {
    match kind {
        RootPolicyKind::Founders => &FounderPolicy,
        RootPolicyKind::Parentless => &ParentlessPolicy,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub root_policy: RootPolicyKind,
}

impl GenerationOptions {
    pub fn from_config(config: &TreeConfig) -> gedtree_core::Result<Self> {
        Ok(Self {
            root_policy: RootPolicyKind::from_config(config)?,
        })
    }
}

/// Generation of every individual plus the ordered per-generation groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMap {
    /// GEDCOM id -> generation, in file order.
    pub generation_of: IndexMap<String, u32>,
    /// Generation -> ids in left-to-right display order.
    pub groups: BTreeMap<u32, Vec<String>>,
}

impl GenerationMap {
    pub fn generation(&self, id: &str) -> Option<u32> {
        self.generation_of.get(id).copied()
    }

    pub fn group(&self, generation: u32) -> &[String] {
        self.groups
            .get(&generation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn generations(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.groups.iter().map(|(g, ids)| (*g, ids.as_slice()))
    }

    pub fn max_generation(&self) -> Option<u32> {
        self.groups.keys().next_back().copied()
    }

    /// Ids ordered generation by generation, left to right.
    pub fn ordered_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.values().flatten().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.generation_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation_of.is_empty()
    }
}

/// Per-node generations plus the order in which nodes were assigned.
#[derive(Debug, Clone, Default)]
pub(crate) struct Assignment {
    pub generation: Vec<Option<u32>>,
    pub order: Vec<usize>,
}

pub(crate) fn propagate(graph: &KinGraph, roots: &[usize]) -> Assignment {
    let n = graph.node_count();
    let mut generation: Vec<Option<u32>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();
    for &root in roots {
        if !visited[root] {
            visited[root] = true;
            queue.push_back((root, 1));
        }
    }

    while let Some((node, generation_no)) = queue.pop_front() {
        generation[node] = Some(generation_no);
        order.push(node);

        for &child in graph.children(node) {
            if !visited[child] {
                visited[child] = true;
                queue.push_back((child, generation_no + 1));
            }
        }
        for spouse in graph.spouses(node) {
            if !visited[spouse.node] {
                visited[spouse.node] = true;
                queue.push_back((spouse.node, generation_no));
            }
        }
    }

    // Orphan sweep, in file order. Earlier sweep assignments are visible to later orphans.
    for node in 0..n {
        if generation[node].is_some() {
            continue;
        }
        let from_parent = graph
            .parents(node)
            .iter()
            .find_map(|&p| generation[p])
            .map(|g| g + 1);
        let from_spouse = || graph.spouses(node).iter().find_map(|s| generation[s.node]);
        let assigned = from_parent.or_else(from_spouse).unwrap_or(1);

        tracing::debug!(id = graph.id(node), generation = assigned, "orphan sweep");
        generation[node] = Some(assigned);
        order.push(node);
    }

    Assignment { generation, order }
}

pub fn assign_generations(graph: &KinGraph, policy: &dyn RootPolicy) -> GenerationMap {
    let roots = policy.select_roots(graph);
    tracing::debug!(
        policy = policy.name(),
        roots = ?roots.iter().map(|&r| graph.id(r)).collect::<Vec<_>>(),
        "selected generation roots"
    );

    let assignment = propagate(graph, &roots);

    let mut members: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for &node in &assignment.order {
        if let Some(g) = assignment.generation[node] {
            members.entry(g).or_default().push(node);
        }
    }

    let mut groups: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for (g, nodes) in members {
        let ordered = order_generation(graph, &nodes);
        groups.insert(
            g,
            ordered.into_iter().map(|n| graph.id(n).to_string()).collect(),
        );
    }

    let generation_of = (0..graph.node_count())
        .filter_map(|n| Some((graph.id(n).to_string(), assignment.generation[n]?)))
        .collect();

    GenerationMap {
        generation_of,
        groups,
    }
}

pub fn assign_generations_with(graph: &KinGraph, options: GenerationOptions) -> GenerationMap {
    assign_generations(graph, root_policy(options.root_policy))
}
