use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A node in the module dependency graph derived from a bundler build.
///
/// The graph itself is produced by an upstream collaborator; this crate only
/// copies these fields into the augmented output and never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleGraphNode {
    /// Unique module name, also the graph key
    pub name: String,

    /// Module size in bytes
    pub size: u64,

    /// Chunk groups this module contributes to
    pub named_chunk_groups: Vec<String>,

    /// Structural parent names (orthogonal to the reason relation)
    pub parents: Vec<String>,
}

/// Module graph as supplied by the caller.
///
/// No iteration order is assumed from this map; the augmenter sorts module
/// names itself.
pub type ModuleGraph = HashMap<String, ModuleGraphNode>;

/// A graph node plus explicit reason edges in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AugmentedModuleNode {
    /// Unique module name, also the graph key
    pub name: String,

    /// Module size in bytes
    pub size: u64,

    /// Chunk groups this module contributes to
    pub named_chunk_groups: Vec<String>,

    /// Structural parent names (orthogonal to the reason relation)
    pub parents: Vec<String>,

    /// Modules whose inclusion caused this module to be included,
    /// deduplicated and sorted ascending
    pub reasons: Vec<String>,

    /// Modules this module caused to be included,
    /// deduplicated and sorted ascending
    pub reason_children: Vec<String>,
}

impl AugmentedModuleNode {
    /// Structural copy of a graph node with empty reason edges.
    pub(crate) fn from_node(node: &ModuleGraphNode) -> Self {
        Self {
            name: node.name.clone(),
            size: node.size,
            named_chunk_groups: node.named_chunk_groups.clone(),
            parents: node.parents.clone(),
            reasons: Vec::new(),
            reason_children: Vec::new(),
        }
    }
}

/// Augmented module graph handed back to the caller.
///
/// An ordered map so downstream consumers iterate it deterministically.
pub type AugmentedGraph = BTreeMap<String, AugmentedModuleNode>;
