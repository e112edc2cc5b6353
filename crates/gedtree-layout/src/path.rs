//! Shortest kinship path between two individuals.

use crate::graph::KinGraph;
use gedtree_core::SpouseStatus;
use serde::{Serialize, Serializer};
use std::collections::VecDeque;

/// How `to` relates to `from` along one hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Parent,
    Child,
    Spouse(SpouseStatus),
    Unknown,
}

impl RelationshipKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse(SpouseStatus::Married) => "spouse-married",
            Self::Spouse(SpouseStatus::Divorced) => "spouse-divorced",
            Self::Spouse(SpouseStatus::Widowed) => "spouse-widowed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RelationshipKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathHop {
    pub from: String,
    pub to: String,
    pub relationship: RelationshipKind,
}

/// Breadth-first search over parent, child and spouse edges.
///
/// Returns the ids from `start` to `end` inclusive, `[start]` when both are equal, and an empty
/// list when either id is unknown or no connection exists. Among equally short paths the one
/// reached first in parents-children-spouses neighbor order wins.
pub fn find_path(graph: &KinGraph, start: &str, end: &str) -> Vec<String> {
    if start == end {
        return vec![start.to_string()];
    }
    let (Some(from), Some(to)) = (graph.index_of(start), graph.index_of(end)) else {
        return Vec::new();
    };

    let mut prev: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    visited[from] = true;
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        if node == to {
            break;
        }
        for next in graph.neighbors(node) {
            if !visited[next] {
                visited[next] = true;
                prev[next] = Some(node);
                queue.push_back(next);
            }
        }
    }

    if !visited[to] {
        return Vec::new();
    }

    let mut path = vec![to];
    let mut cur = to;
    while let Some(p) = prev[cur] {
        path.push(p);
        cur = p;
    }
    path.reverse();
    path.into_iter().map(|n| graph.id(n).to_string()).collect()
}

/// Checks, in order, whether `to` is a parent, a child, or a spouse of `from`.
pub fn relationship_type(graph: &KinGraph, from: &str, to: &str) -> RelationshipKind {
    let (Some(a), Some(b)) = (graph.index_of(from), graph.index_of(to)) else {
        return RelationshipKind::Unknown;
    };
    if graph.parents(a).contains(&b) {
        RelationshipKind::Parent
    } else if graph.children(a).contains(&b) {
        RelationshipKind::Child
    } else if let Some(edge) = graph.spouse_edge(a, b) {
        RelationshipKind::Spouse(edge.status)
    } else {
        RelationshipKind::Unknown
    }
}

/// [`find_path`] with every hop labelled by [`relationship_type`].
pub fn labelled_path(graph: &KinGraph, start: &str, end: &str) -> Vec<PathHop> {
    find_path(graph, start, end)
        .windows(2)
        .map(|pair| PathHop {
            relationship: relationship_type(graph, &pair[0], &pair[1]),
            from: pair[0].clone(),
            to: pair[1].clone(),
        })
        .collect()
}
