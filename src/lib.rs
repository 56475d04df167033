//! bundlegraph: reason-edge augmentation for bundler module graphs
//!
//! Given a module dependency graph derived from a bundler build and the raw
//! build-statistics export it came from, this crate produces an augmented
//! copy of the graph in which every module carries explicit, deduplicated,
//! sorted lists of the modules that caused its inclusion (`reasons`) and the
//! modules it in turn causes to be included (`reason_children`).
//!
//! Bundler-reported reasons are irregular: entry points get synthetic
//! bootstrap reasons, library builds get export markers, and scope hoisting
//! collapses whole chains of modules into single records with labels like
//! `lib/parent + 42 modules`. The pipeline here normalizes all of that into
//! a clean, symmetric edge set:
//!
//! - [`ModuleIndex`]: name → stats record lookup, including the constituents
//!   of concatenated records
//! - [`is_causal_reason`]: drops entry-bootstrap and library-export reasons
//! - [`ReasonNormalizer`]: resolves concatenated labels to real module names
//! - [`GraphAugmenter`]: orchestrates one deterministic pass over the graph
//!
//! ```
//! use bundlegraph::{BuildStats, GraphAugmenter, ModuleGraph};
//!
//! # fn run(graph: ModuleGraph, stats: BuildStats) -> bundlegraph::Result<()> {
//! let augmented = GraphAugmenter::new().augment(&graph, &stats)?;
//! for (name, node) in &augmented {
//!     println!("{name}: included because of {:?}", node.reasons);
//! }
//! # Ok(())
//! # }
//! ```

mod core;
mod error;
mod graph;
mod stats;

pub use crate::core::{is_causal_reason, GraphAugmenter, ModuleIndex, ReasonNormalizer};
pub use error::{BundlegraphError, Result};
pub use graph::{AugmentedGraph, AugmentedModuleNode, ModuleGraph, ModuleGraphNode};
pub use stats::{BuildStats, IssuerPathEntry, Reason, StatsModule};
