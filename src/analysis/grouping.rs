use crate::core::NormalizedRow;
use crate::core::constants::measurements::UNTAGGED;

/// Normalized rows laid out per library tag, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedSeries {
    categories: Vec<String>,
    groups: Vec<(String, Vec<NormalizedRow>)>,
}

impl GroupedSeries {
    /// Group rows by library tag; untagged rows share the `-` group
    pub fn from_rows(rows: &[NormalizedRow]) -> Self {
        let mut series = Self::default();

        for row in rows {
            if !series.categories.iter().any(|name| *name == row.name) {
                series.categories.push(row.name.clone());
            }

            let tag = row.library_tag.as_deref().unwrap_or(UNTAGGED);
            match series.groups.iter_mut().find(|(key, _)| key == tag) {
                Some((_, members)) => members.push(row.clone()),
                None => series.groups.push((tag.to_string(), vec![row.clone()])),
            }
        }

        series
    }

    /// Distinct row names in first-appearance order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Position of a row name on the category axis
    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|category| category == name)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[NormalizedRow])> {
        self.groups
            .iter()
            .map(|(tag, rows)| (tag.as_str(), rows.as_slice()))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
