//! Snapshot statistics — counts, density, connectivity and degree rankings
//!
//! Works on an exported `GraphSnapshot`, so it runs the same against
//! `EmbeddedClient` and `RemoteClient`. The snapshot is read as a simple
//! directed graph: parallel edges with the same `From`/`To` collapse into
//! one link, and an edge endpoint missing from `nodes` still counts as a
//! node.

use edgeline::{GraphSnapshot, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Number of entries kept in each degree ranking by default
pub const DEFAULT_TOP: usize = 10;

/// A node and its degree in one direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeEntry {
    pub id: NodeId,
    pub degree: usize,
}

/// Summary statistics for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAnalysis {
    /// Distinct nodes, including endpoints only named by edges
    pub nodes: usize,
    /// Distinct directed links (parallel edges counted once)
    pub edges: usize,
    /// `edges / (nodes * (nodes - 1))`; 0 with fewer than two nodes
    pub density: f64,
    /// Every node reachable from every other ignoring direction
    pub weakly_connected: bool,
    pub top_in_degree: Vec<DegreeEntry>,
    pub top_out_degree: Vec<DegreeEntry>,
}

impl GraphAnalysis {
    /// Analyze `snapshot`, keeping at most `top` entries per ranking
    pub fn from_snapshot(snapshot: &GraphSnapshot, top: usize) -> Self {
        let mut ids: BTreeSet<&NodeId> = snapshot.nodes.keys().collect();
        let mut links: BTreeSet<(&NodeId, &NodeId)> = BTreeSet::new();
        for edge in &snapshot.edges {
            ids.insert(&edge.from);
            ids.insert(&edge.to);
            links.insert((&edge.from, &edge.to));
        }

        let mut in_degree: BTreeMap<&NodeId, usize> = ids.iter().map(|id| (*id, 0)).collect();
        let mut out_degree = in_degree.clone();
        for (from, to) in &links {
            *out_degree.entry(*from).or_default() += 1;
            *in_degree.entry(*to).or_default() += 1;
        }

        let nodes = ids.len();
        let edges = links.len();
        let density = if nodes < 2 {
            0.0
        } else {
            edges as f64 / (nodes as f64 * (nodes as f64 - 1.0))
        };

        GraphAnalysis {
            nodes,
            edges,
            density,
            weakly_connected: is_weakly_connected(&ids, &links),
            top_in_degree: rank(&in_degree, top),
            top_out_degree: rank(&out_degree, top),
        }
    }
}

/// Highest degree first; ties broken by id so output is stable
fn rank(degrees: &BTreeMap<&NodeId, usize>, top: usize) -> Vec<DegreeEntry> {
    let mut entries: Vec<DegreeEntry> = degrees
        .iter()
        .map(|(id, degree)| DegreeEntry {
            id: (*id).clone(),
            degree: *degree,
        })
        .collect();
    entries.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.id.cmp(&b.id)));
    entries.truncate(top);
    entries
}

/// Union-find over undirected links; an empty graph is not connected
fn is_weakly_connected(ids: &BTreeSet<&NodeId>, links: &BTreeSet<(&NodeId, &NodeId)>) -> bool {
    if ids.is_empty() {
        return false;
    }

    let index: BTreeMap<&NodeId, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let mut parent: Vec<usize> = (0..ids.len()).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let mut components = ids.len();
    for (from, to) in links {
        let a = find(&mut parent, index[from]);
        let b = find(&mut parent, index[to]);
        if a != b {
            parent[a] = b;
            components -= 1;
        }
    }
    components == 1
}
