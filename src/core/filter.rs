use crate::stats::Reason;

/// Reason types bundlers attach to entry-point bootstrapping. The spelling
/// varies across bundler versions, so all known variants are matched.
const ENTRY_REASON_TYPES: &[&str] = &["entry", "multi entry", "single entry"];

/// Explanation sentinel on synthetic reasons attached to entry modules
/// exported as a library; these carry no real causing module.
const LIBRARY_EXPORT_EXPLANATION: &str = "used as library export";

/// Whether a raw reason denotes a real causal edge.
///
/// Entry bootstrapping and library-export markers are synthetic and excluded.
/// Reasons with no `type` at all occur for preprocessing-loader chains and
/// are causal.
pub fn is_causal_reason(reason: &Reason) -> bool {
    if let Some(reason_type) = &reason.reason_type {
        if ENTRY_REASON_TYPES.contains(&reason_type.as_str()) {
            return false;
        }
    }

    if reason.explanation.as_deref() == Some(LIBRARY_EXPORT_EXPLANATION) {
        return false;
    }

    true
}
