//! Sector → topic → pestle count tree

use crate::record::{is_known, Record, UNKNOWN};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label of the synthetic root node
pub const HIERARCHY_ROOT: &str = "All Sectors";

/// A node of the count tree. Leaves sit at the pestle level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HierarchyNode {
    Branch {
        name: String,
        children: Vec<HierarchyNode>,
    },
    Leaf {
        name: String,
        value: u64,
    },
}

impl HierarchyNode {
    pub fn name(&self) -> &str {
        match self {
            HierarchyNode::Branch { name, .. } | HierarchyNode::Leaf { name, .. } => name,
        }
    }

    /// Children of a branch; empty for a leaf
    pub fn children(&self) -> &[HierarchyNode] {
        match self {
            HierarchyNode::Branch { children, .. } => children,
            HierarchyNode::Leaf { .. } => &[],
        }
    }

    pub fn child(&self, name: &str) -> Option<&HierarchyNode> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Sum of all leaf values below (or at) this node
    pub fn total(&self) -> u64 {
        match self {
            HierarchyNode::Branch { children, .. } => children.iter().map(HierarchyNode::total).sum(),
            HierarchyNode::Leaf { value, .. } => *value,
        }
    }
}

type PestleCounts<'a> = IndexMap<&'a str, u64>;
type TopicTree<'a> = IndexMap<&'a str, PestleCounts<'a>>;

fn label(value: &str) -> &str {
    if is_known(value) {
        value
    } else {
        UNKNOWN
    }
}

/// Count every (sector, topic, pestle) combination and nest the counts
/// under [`HIERARCHY_ROOT`]. Unknown levels appear as literal `"Unknown"`
/// nodes; a record is dropped only when all three are unknown. Children keep
/// first-seen order at every level.
pub fn build_hierarchy(records: &[Record]) -> HierarchyNode {
    let mut sectors: IndexMap<&str, TopicTree> = IndexMap::new();

    for record in records {
        let sector = label(&record.sector);
        let topic = label(&record.topic);
        let pestle = label(&record.pestle);

        if sector == UNKNOWN && topic == UNKNOWN && pestle == UNKNOWN {
            continue;
        }

        *sectors
            .entry(sector)
            .or_default()
            .entry(topic)
            .or_default()
            .entry(pestle)
            .or_insert(0) += 1;
    }

    let children = sectors
        .into_iter()
        .map(|(sector, topics)| HierarchyNode::Branch {
            name: sector.to_string(),
            children: topics
                .into_iter()
                .map(|(topic, pestles)| HierarchyNode::Branch {
                    name: topic.to_string(),
                    children: pestles
                        .into_iter()
                        .map(|(pestle, value)| HierarchyNode::Leaf {
                            name: pestle.to_string(),
                            value,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    HierarchyNode::Branch {
        name: HIERARCHY_ROOT.to_string(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sector: &str, topic: &str, pestle: &str) -> Record {
        Record {
            sector: sector.to_string(),
            topic: topic.to_string(),
            pestle: pestle.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_empty_tree() {
        let root = build_hierarchy(&[]);
        assert_eq!(root.name(), HIERARCHY_ROOT);
        assert!(root.children().is_empty());
        assert_eq!(root.total(), 0);
    }

    #[test]
    fn test_counts_combinations() {
        let root = build_hierarchy(&[
            record("Energy", "oil", "Economic"),
            record("Energy", "oil", "Economic"),
            record("Energy", "oil", "Political"),
            record("Energy", "gas", "Economic"),
        ]);

        let energy = root.child("Energy").unwrap();
        let oil = energy.child("oil").unwrap();
        assert_eq!(oil.child("Economic").unwrap().total(), 2);
        assert_eq!(oil.child("Political").unwrap().total(), 1);
        assert_eq!(energy.total(), 4);
    }

    #[test]
    fn test_first_seen_order() {
        let root = build_hierarchy(&[
            record("Retail", "z-topic", "Social"),
            record("Energy", "a-topic", "Economic"),
            record("Retail", "b-topic", "Social"),
        ]);

        let sectors: Vec<&str> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(sectors, vec!["Retail", "Energy"]);
        let topics: Vec<&str> = root.child("Retail").unwrap().children().iter().map(|c| c.name()).collect();
        assert_eq!(topics, vec!["z-topic", "b-topic"]);
    }

    #[test]
    fn test_partial_unknowns_kept() {
        let root = build_hierarchy(&[
            record(UNKNOWN, "oil", ""),
            record(UNKNOWN, UNKNOWN, UNKNOWN),
            record("", "", ""),
        ]);

        assert_eq!(root.total(), 1);
        let leaf = root.child(UNKNOWN).unwrap().child("oil").unwrap().child(UNKNOWN).unwrap();
        assert_eq!(leaf.total(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let root = build_hierarchy(&[record("Energy", "oil", "Economic")]);
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["name"], HIERARCHY_ROOT);
        assert_eq!(json["children"][0]["children"][0]["children"][0]["value"], 1);
        assert!(json["children"][0]["children"][0]["children"][0].get("children").is_none());
    }
}
