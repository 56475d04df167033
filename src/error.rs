use thiserror::Error;

/// Main error type for bundlegraph operations
#[derive(Error, Debug)]
pub enum BundlegraphError {
    /// The build stats export carries no module list at all.
    #[error("no modules in provided build stats")]
    MissingStatsModules,

    /// The module graph and the build stats disagree about which modules
    /// exist, which means they were derived from different builds.
    #[error("graph/stats mismatch: {0}")]
    GraphStatsMismatch(String),

    /// A causal reason could not be resolved to a real module name.
    #[error("unresolved reason: {0}")]
    UnresolvedReason(String),
}

pub type Result<T> = std::result::Result<T, BundlegraphError>;
