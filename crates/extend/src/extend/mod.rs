pub use extension::{ExtendId, ExtendIds, Extension};
pub use finder::ExtendFinder;
pub use matcher::{element_values_equal, find_match, ExtendMatch};
pub use paths::RulesetPaths;
pub use processor::ExtendProcessor;
pub use rewrite::extend_selector;

mod chain;
mod extension;
mod finder;
mod matcher;
mod paths;
mod processor;
mod rewrite;
