use regex::Regex;

use crate::error::{BundlegraphError, Result};
use crate::stats::{Reason, StatsModule};

/// Resolves the canonical parent module name behind a raw reason entry.
///
/// Scope hoisting collapses a chain of modules into one stats record with a
/// synthetic label like `lib/parent + 42 modules`. A reason pointing at such
/// a label names no real module; the actual includer is the deepest entry of
/// the explained module's issuer path, with the reason's `resolvedModule` as
/// a fallback.
pub struct ReasonNormalizer {
    concatenated: Regex,
}

impl ReasonNormalizer {
    pub fn new() -> Self {
        Self {
            concatenated: Regex::new(r" \+ \d+ modules$").expect("invalid regex pattern"),
        }
    }

    /// Canonical name of the module a reason points at.
    pub fn normalize(&self, module: &StatsModule, reason: &Reason) -> Result<String> {
        let module_name = reason.module_name.as_deref().ok_or_else(|| {
            BundlegraphError::UnresolvedReason(format!(
                "reason for module `{}` has no moduleName",
                module.name
            ))
        })?;

        if !self.concatenated.is_match(module_name) {
            return Ok(module_name.to_string());
        }

        if let Some(issuer) = module.issuer_path.as_ref().and_then(|path| path.last()) {
            return Ok(issuer.name.clone());
        }

        if let Some(resolved) = &reason.resolved_module {
            return Ok(resolved.clone());
        }

        Err(BundlegraphError::UnresolvedReason(format!(
            "concatenated-module reason `{}` for module `{}` has no issuer path or resolved module",
            module_name, module.name
        )))
    }
}

impl Default for ReasonNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
