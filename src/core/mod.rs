mod augmenter;
mod filter;
mod module_index;
mod normalizer;

pub use augmenter::GraphAugmenter;
pub use filter::is_causal_reason;
pub use module_index::ModuleIndex;
pub use normalizer::ReasonNormalizer;
