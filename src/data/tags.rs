//! Distinct tag derivation for the project filter.

use super::ProjectEntry;
use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// Every tag used by any project, deduplicated in first-seen order.
pub fn tags_in_order(projects: &[ProjectEntry]) -> Vec<CompactString> {
    let mut seen = FxHashSet::default();
    projects
        .iter()
        .flat_map(|project| project.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// The filter selector's option list: distinct tags, sorted.
pub fn distinct_tags(projects: &[ProjectEntry]) -> Vec<CompactString> {
    let mut tags = tags_in_order(projects);
    tags.sort_unstable();
    tags
}
