use log::debug;

use crate::core::{Dataset, NormalizedRow};

/// Subtract the baseline from every comparison row, keeping input order.
///
/// The baseline's `cycles_min` is the reference for both cycle bounds.
pub fn normalize(dataset: &Dataset) -> Vec<NormalizedRow> {
    let base_size = dataset.base_size();
    let base_cycles = dataset.base_cycles();

    dataset
        .comparisons()
        .iter()
        .map(|row| {
            let normalized = NormalizedRow {
                name: row.name().to_string(),
                library_tag: row.library_tag().map(str::to_string),
                delta_size: delta(row.size_bytes(), base_size),
                delta_cycles_min: delta(row.cycles_min(), base_cycles),
                delta_cycles_max: delta(row.cycles_max(), base_cycles),
            };
            debug!(
                "{} [{}]: size {:+}, cycles {:+}..{:+}",
                normalized.name,
                normalized.library_tag.as_deref().unwrap_or("-"),
                normalized.delta_size,
                normalized.delta_cycles_min,
                normalized.delta_cycles_max
            );
            normalized
        })
        .collect()
}

fn delta(value: u64, base: u64) -> i64 {
    value as i64 - base as i64
}
