use std::collections::btree_map::Entry;

use tracing::debug;

use super::{is_causal_reason, ModuleIndex, ReasonNormalizer};
use crate::error::{BundlegraphError, Result};
use crate::graph::{AugmentedGraph, AugmentedModuleNode, ModuleGraph};
use crate::stats::{BuildStats, Reason};

/// Copies a module graph and attaches explicit reason edges from build stats.
///
/// The input graph is never touched; the output is a structurally independent
/// copy where every node carries deduplicated, sorted `reasons` and
/// `reason_children` lists. Augmentation is all-or-nothing: any malformed
/// reason or graph/stats disagreement fails the whole call.
pub struct GraphAugmenter {
    normalizer: ReasonNormalizer,
}

impl GraphAugmenter {
    pub fn new() -> Self {
        Self {
            normalizer: ReasonNormalizer::new(),
        }
    }

    /// Produce the augmented copy of `graph` using reason data from `stats`.
    pub fn augment(&self, graph: &ModuleGraph, stats: &BuildStats) -> Result<AugmentedGraph> {
        let stats_modules = stats
            .modules
            .as_deref()
            .ok_or(BundlegraphError::MissingStatsModules)?;

        let index = ModuleIndex::build(stats_modules);
        debug!(
            "augmenting graph of {} modules against {} stats records",
            graph.len(),
            index.len()
        );

        let mut augmented = AugmentedGraph::new();

        // Sorted names are the sole source of determinism; the input map's
        // native iteration order is not trusted.
        let mut module_names: Vec<&str> = graph.keys().map(String::as_str).collect();
        module_names.sort_unstable();

        for module_name in module_names {
            ensure_node(&mut augmented, graph, module_name)?;

            let record = index.get(module_name).ok_or_else(|| {
                BundlegraphError::GraphStatsMismatch(format!(
                    "module `{module_name}` not in stats modules"
                ))
            })?;

            let mut reasons: Vec<&Reason> =
                record.reasons.as_deref().unwrap_or(&[]).iter().collect();
            // Stable by moduleName; unnamed entries keep their relative order.
            reasons.sort_by(|a, b| match (&a.module_name, &b.module_name) {
                (Some(a), Some(b)) => a.cmp(b),
                _ => std::cmp::Ordering::Equal,
            });

            for reason in reasons {
                if !is_causal_reason(reason) {
                    continue;
                }
                let parent_name = self.normalizer.normalize(record, reason)?;

                ensure_node(&mut augmented, graph, &parent_name)?
                    .reason_children
                    .push(module_name.to_string());
                ensure_node(&mut augmented, graph, module_name)?
                    .reasons
                    .push(parent_name);
            }
        }

        for node in augmented.values_mut() {
            node.reasons.sort_unstable();
            node.reasons.dedup();
            node.reason_children.sort_unstable();
            node.reason_children.dedup();
        }

        debug!("augmented graph has {} modules", augmented.len());
        Ok(augmented)
    }
}

impl Default for GraphAugmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup-or-insert on the output map: returns the node for `name`, copying
/// it from the input graph on first access. A name absent from the input
/// graph means the graph and stats come from different builds.
fn ensure_node<'a>(
    augmented: &'a mut AugmentedGraph,
    graph: &ModuleGraph,
    name: &str,
) -> Result<&'a mut AugmentedModuleNode> {
    match augmented.entry(name.to_string()) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let node = graph.get(name).ok_or_else(|| {
                BundlegraphError::GraphStatsMismatch(format!("module `{name}` not in graph"))
            })?;
            Ok(entry.insert(AugmentedModuleNode::from_node(node)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ModuleGraphNode;
    use crate::stats::StatsModule;

    fn graph_node(name: &str) -> ModuleGraphNode {
        ModuleGraphNode {
            name: name.to_string(),
            size: 10,
            named_chunk_groups: vec!["Main".to_string()],
            parents: vec![],
        }
    }

    fn graph_of(names: &[&str]) -> ModuleGraph {
        names
            .iter()
            .map(|name| (name.to_string(), graph_node(name)))
            .collect()
    }

    fn stats_module(name: &str, reason_names: &[&str]) -> StatsModule {
        StatsModule {
            name: name.to_string(),
            reasons: Some(
                reason_names
                    .iter()
                    .map(|parent| Reason {
                        module_name: Some(parent.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn stats_of(modules: Vec<StatsModule>) -> BuildStats {
        BuildStats {
            modules: Some(modules),
        }
    }

    #[test]
    fn test_missing_stats_modules_fails() {
        let graph = graph_of(&["lib/a"]);
        let err = GraphAugmenter::new()
            .augment(&graph, &BuildStats::default())
            .unwrap_err();
        assert!(matches!(err, BundlegraphError::MissingStatsModules));
    }

    #[test]
    fn test_graph_module_missing_from_stats_fails() {
        let graph = graph_of(&["lib/a", "lib/b"]);
        let stats = stats_of(vec![stats_module("lib/a", &[])]);
        let err = GraphAugmenter::new().augment(&graph, &stats).unwrap_err();
        assert!(matches!(err, BundlegraphError::GraphStatsMismatch(_)));
    }

    #[test]
    fn test_reason_referencing_unknown_module_fails() {
        let graph = graph_of(&["lib/a"]);
        let stats = stats_of(vec![stats_module("lib/a", &["lib/phantom"])]);
        let err = GraphAugmenter::new().augment(&graph, &stats).unwrap_err();
        assert!(matches!(err, BundlegraphError::GraphStatsMismatch(_)));
    }

    #[test]
    fn test_reason_without_module_name_fails() {
        let graph = graph_of(&["lib/a"]);
        let stats = stats_of(vec![StatsModule {
            name: "lib/a".to_string(),
            reasons: Some(vec![Reason::default()]),
            ..Default::default()
        }]);
        let err = GraphAugmenter::new().augment(&graph, &stats).unwrap_err();
        assert!(matches!(err, BundlegraphError::UnresolvedReason(_)));
    }

    #[test]
    fn test_output_covers_exactly_the_input_graph() {
        let graph = graph_of(&["lib/a", "lib/b"]);
        let stats = stats_of(vec![stats_module("lib/a", &[]), stats_module("lib/b", &["lib/a"])]);
        let augmented = GraphAugmenter::new().augment(&graph, &stats).unwrap();

        let mut expected: Vec<&str> = graph.keys().map(String::as_str).collect();
        expected.sort_unstable();
        let actual: Vec<&str> = augmented.keys().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_copied_fields_match_input_nodes() {
        let graph = graph_of(&["lib/a"]);
        let stats = stats_of(vec![stats_module("lib/a", &[])]);
        let augmented = GraphAugmenter::new().augment(&graph, &stats).unwrap();

        let node = &augmented["lib/a"];
        assert_eq!(node.name, "lib/a");
        assert_eq!(node.size, 10);
        assert_eq!(node.named_chunk_groups, vec!["Main".to_string()]);
        assert!(node.parents.is_empty());
        assert!(node.reasons.is_empty());
        assert!(node.reason_children.is_empty());
    }
}
