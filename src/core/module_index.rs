use std::collections::HashMap;

use tracing::warn;

use crate::stats::StatsModule;

/// Lookup from module name to its stats record.
///
/// Concatenated records carry their constituents in a nested `modules` list,
/// so those are indexed by their own names too and lookups by any constituent
/// name succeed.
pub struct ModuleIndex<'a> {
    by_name: HashMap<&'a str, &'a StatsModule>,
}

impl<'a> ModuleIndex<'a> {
    /// Index every module record, including nested concatenated ones.
    pub fn build(modules: &'a [StatsModule]) -> Self {
        let mut by_name = HashMap::new();
        Self::index_all(modules, &mut by_name);
        Self { by_name }
    }

    fn index_all(modules: &'a [StatsModule], by_name: &mut HashMap<&'a str, &'a StatsModule>) {
        for module in modules {
            if by_name.insert(module.name.as_str(), module).is_some() {
                // Bundlers do emit duplicate names; keep the later record.
                warn!("duplicate module name in stats: {}", module.name);
            }
            if let Some(nested) = &module.modules {
                Self::index_all(nested, by_name);
            }
        }
    }

    /// Look up a stats record by module name.
    pub fn get(&self, name: &str) -> Option<&'a StatsModule> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct module names indexed.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
