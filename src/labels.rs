//! Provisioning of the fixed label set before any issue is imported.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::Label;
use crate::tracker::Tracker;

/// Labels from `requested` whose names are not in `existing`, in request order.
pub fn missing_labels(requested: &[Label], existing: &BTreeSet<String>) -> Vec<Label> {
    let mut seen = BTreeSet::new();
    requested
        .iter()
        .copied()
        .filter(|label| !existing.contains(label.as_str()) && seen.insert(*label))
        .collect()
}

/// Make sure every requested label exists in the tracker.
///
/// Returns the names known to exist afterwards. Any failure to list or create
/// labels is returned as-is; the caller treats it as fatal.
pub fn ensure_labels(tracker: &dyn Tracker, requested: &[Label]) -> Result<BTreeSet<String>> {
    let mut known: BTreeSet<String> = tracker
        .list_labels()?
        .into_iter()
        .map(|label| label.name)
        .collect();
    tracing::debug!(count = known.len(), "Loaded existing labels");

    for label in missing_labels(requested, &known) {
        tracker.create_label(label.as_str(), label.description())?;
        known.insert(label.to_string());
    }

    Ok(known)
}
