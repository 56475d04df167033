//! Build-statistics data model.
//!
//! Mirrors the JSON shape of a bundler's stats export. Every field except a
//! module's `name` is optional because the exact shape drifts across bundler
//! versions; unknown fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Top-level build statistics object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// All modules in the build, in bundler-native order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<StatsModule>>,
}

/// A single module record from the stats export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsModule {
    /// Module name, the only field every bundler version guarantees
    pub name: String,

    /// Why this module was included in the build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<Reason>>,

    /// Chain of including modules from the build root down to this module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_path: Option<Vec<IssuerPathEntry>>,

    /// Constituent records, present when the bundler concatenated several
    /// source modules into this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<StatsModule>>,
}

/// A bundler-reported cause for a module's inclusion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    /// Name of the module understood to have caused the inclusion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// Bundler-internal module id; a number or a string depending on version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<serde_json::Value>,

    /// Reason kind, e.g. "harmony import" or the entry-point markers
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub reason_type: Option<String>,

    /// Free-text explanation; a known sentinel marks library-export reasons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Canonical module name the bundler resolved this reason to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_module: Option<String>,
}

/// One ancestor in a module's issuer path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerPathEntry {
    pub name: String,
}
