//! Left-to-right ordering inside one generation.
//!
//! Members are partitioned into marriage groups (connected components of same-generation
//! spouse edges). Each group is laid out around its anchor with the current spouse adjacent and
//! earlier spouses pushed outward, then groups are sorted by birth era.

use crate::graph::{KinGraph, SpouseEdge};
use gedtree_core::SpouseStatus;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use std::collections::VecDeque;

/// Sorts after every real year.
pub const MISSING_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarriageGroup {
    pub anchor: usize,
    /// Left-to-right member order.
    pub members: Vec<usize>,
    pub sort_key: i32,
}

/// Orders `members` (given in assignment order) for display.
pub fn order_generation(graph: &KinGraph, members: &[usize]) -> Vec<usize> {
    let mut groups = marriage_groups(graph, members);
    groups.sort_by_key(|g| g.sort_key);
    groups.into_iter().flat_map(|g| g.members).collect()
}

pub fn marriage_groups(graph: &KinGraph, members: &[usize]) -> Vec<MarriageGroup> {
    let position: HashMap<usize, usize> = members
        .iter()
        .enumerate()
        .map(|(pos, &node)| (node, pos))
        .collect();
    let same_generation = |edge: &&SpouseEdge| position.contains_key(&edge.node);

    let mut placed: HashSet<usize> = HashSet::default();
    let mut groups = Vec::new();

    for &start in members {
        if placed.contains(&start) {
            continue;
        }

        let mut component = vec![start];
        placed.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for edge in graph.spouses(node).iter().filter(same_generation) {
                if placed.insert(edge.node) {
                    component.push(edge.node);
                    queue.push_back(edge.node);
                }
            }
        }
        component.sort_by_key(|n| position[n]);

        // Most same-generation spouses wins; ties keep assignment order.
        let spouse_count =
            |n: usize| graph.spouses(n).iter().filter(same_generation).count();
        let mut anchor = component[0];
        for &n in &component[1..] {
            if spouse_count(n) > spouse_count(anchor) {
                anchor = n;
            }
        }

        let anchor_edges: Vec<&SpouseEdge> = graph
            .spouses(anchor)
            .iter()
            .filter(same_generation)
            .collect();
        let layout = arrange_around_anchor(anchor, &anchor_edges);
        let layout = attach_remaining(graph, layout, &component, anchor);
        let sort_key = group_sort_key(graph, anchor, &layout);

        groups.push(MarriageGroup {
            anchor,
            members: layout,
            sort_key,
        });
    }

    groups
}

fn recency(edge: &SpouseEdge) -> (i32, usize) {
    (edge.marriage_year.unwrap_or(MISSING_YEAR), edge.fams_index)
}

/// `[oldest prior, .., latest prior, anchor, current]`.
fn arrange_around_anchor(anchor: usize, edges: &[&SpouseEdge]) -> Vec<usize> {
    let mut distinct: Vec<&SpouseEdge> = Vec::with_capacity(edges.len());
    for edge in edges {
        if !distinct.iter().any(|e| e.node == edge.node) {
            distinct.push(edge);
        }
    }

    let current = distinct
        .iter()
        .filter(|e| e.status == SpouseStatus::Married)
        .max_by_key(|e| recency(e))
        .or_else(|| distinct.iter().max_by_key(|e| recency(e)))
        .map(|e| e.node);

    let mut priors: Vec<&SpouseEdge> = distinct
        .into_iter()
        .filter(|e| Some(e.node) != current)
        .collect();
    priors.sort_by_key(|e| recency(e));

    let mut layout: Vec<usize> = priors.into_iter().map(|e| e.node).collect();
    layout.push(anchor);
    layout.extend(current);
    layout
}

/// Places component members that are not the anchor's spouses next to a placed partner, on the
/// side facing away from the anchor.
fn attach_remaining(
    graph: &KinGraph,
    mut layout: Vec<usize>,
    component: &[usize],
    anchor: usize,
) -> Vec<usize> {
    let mut pending: Vec<usize> = component
        .iter()
        .copied()
        .filter(|n| !layout.contains(n))
        .collect();

    while !pending.is_empty() {
        let mut progressed = false;
        let mut still_pending = Vec::new();
        for node in pending {
            let partner_pos = graph
                .spouses(node)
                .iter()
                .find_map(|s| layout.iter().position(|&m| m == s.node));
            let Some(partner_pos) = partner_pos else {
                still_pending.push(node);
                continue;
            };
            let anchor_pos = layout.iter().position(|&m| m == anchor).unwrap_or(0);
            if partner_pos < anchor_pos {
                layout.insert(partner_pos, node);
            } else {
                layout.insert(partner_pos + 1, node);
            }
            progressed = true;
        }
        if !progressed {
            layout.extend(still_pending);
            break;
        }
        pending = still_pending;
    }

    layout
}

/// Minimum of the anchor's birth year and every marriage year inside the group.
fn group_sort_key(graph: &KinGraph, anchor: usize, members: &[usize]) -> i32 {
    let mut key = graph.birth_year(anchor).unwrap_or(MISSING_YEAR);
    for &m in members {
        for edge in graph.spouses(m) {
            if members.contains(&edge.node) {
                key = key.min(edge.marriage_year.unwrap_or(MISSING_YEAR));
            }
        }
    }
    key
}
