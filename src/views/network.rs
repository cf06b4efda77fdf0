//! Co-occurrence network over topics, sectors and regions
//!
//! Nodes are keyed by bare name across all three dimensions and receive
//! dense ids in first-seen order. Each admissible record links its topic to
//! its sector and, when the region is known, its sector to its region.
//! Topics are never linked to regions directly.

use crate::record::{is_known, Record};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical dimension a node was first seen in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Topic,
    Sector,
    Region,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Topic => "topic",
            Dimension::Sector => "sector",
            Dimension::Region => "region",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named entity and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: Dimension,
    pub value: u64,
}

/// Weighted link between two node ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: u64,
    pub target: u64,
    pub value: u64,
}

/// Nodes and links in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    #[serde(rename = "links")]
    pub edges: Vec<GraphEdge>,
}

impl NetworkGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Find the edge joining two names, in either storage direction
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&GraphEdge> {
        let a = self.node(a)?.id;
        let b = self.node(b)?.id;
        self.edges
            .iter()
            .find(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
    }
}

/// Incremental builder backing [`build_graph`]
#[derive(Debug, Default)]
struct GraphBuilder<'a> {
    ids: FxHashMap<&'a str, usize>,
    nodes: Vec<GraphNode>,
    /// Unordered pair -> edge with the orientation it was first seen in
    edges: IndexMap<(u64, u64), GraphEdge, FxBuildHasher>,
}

impl<'a> GraphBuilder<'a> {
    /// Return the id for `name`, allocating it on first sight and counting
    /// the occurrence either way.
    fn touch(&mut self, name: &'a str, dimension: Dimension) -> u64 {
        if let Some(&index) = self.ids.get(name) {
            let node = &mut self.nodes[index];
            node.value += 1;
            return node.id;
        }

        let index = self.nodes.len();
        let id = index as u64;
        self.nodes.push(GraphNode {
            id,
            name: name.to_string(),
            node_type: dimension,
            value: 1,
        });
        self.ids.insert(name, index);
        id
    }

    fn link(&mut self, source: u64, target: u64) {
        let key = (source.min(target), source.max(target));
        self.edges
            .entry(key)
            .or_insert(GraphEdge { source, target, value: 0 })
            .value += 1;
    }

    fn finish(self) -> NetworkGraph {
        NetworkGraph {
            nodes: self.nodes,
            edges: self.edges.into_values().collect(),
        }
    }
}

/// Build the topic/sector/region co-occurrence network.
///
/// Records without a known topic or sector are skipped entirely.
pub fn build_graph(records: &[Record]) -> NetworkGraph {
    let mut builder = GraphBuilder::default();

    for record in records {
        if !is_known(&record.topic) || !is_known(&record.sector) {
            continue;
        }

        let topic = builder.touch(&record.topic, Dimension::Topic);
        let sector = builder.touch(&record.sector, Dimension::Sector);
        builder.link(topic, sector);

        if is_known(&record.region) {
            let region = builder.touch(&record.region, Dimension::Region);
            builder.link(sector, region);
        }
    }

    builder.finish()
}
