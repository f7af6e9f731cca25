//! Measurement rows and the dataset they form

use serde::Deserialize;

use crate::core::constants::measurements;
use crate::core::error::{ReportError, Result};

/// One benchmark measurement: flash size and cycle range of a formatting case
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RowRecord")]
pub struct MeasurementRow {
    name: String,
    library_tag: Option<String>,
    size_bytes: u64,
    cycles_min: u64,
    cycles_max: u64,
}

impl MeasurementRow {
    /// Create a validated measurement row
    pub fn new(
        name: impl Into<String>,
        library_tag: Option<&str>,
        size_bytes: u64,
        cycles_min: u64,
        cycles_max: u64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ReportError::InvalidRow(
                "Row name cannot be empty".to_string(),
            ));
        }
        if let Some(tag) = library_tag
            && tag.trim().is_empty()
        {
            return Err(ReportError::InvalidRow(format!(
                "Row '{name}' has an empty library tag"
            )));
        }
        for (field, value) in [
            ("size_bytes", size_bytes),
            ("cycles_min", cycles_min),
            ("cycles_max", cycles_max),
        ] {
            if i64::try_from(value).is_err() {
                return Err(ReportError::InvalidRow(format!(
                    "Row '{name}' has {field} ({value}) above {}",
                    i64::MAX
                )));
            }
        }
        if cycles_min > cycles_max {
            return Err(ReportError::InvalidRow(format!(
                "Row '{name}' has cycles_min ({cycles_min}) greater than cycles_max ({cycles_max})"
            )));
        }

        Ok(Self {
            name,
            library_tag: library_tag.map(str::to_string),
            size_bytes,
            cycles_min,
            cycles_max,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn library_tag(&self) -> Option<&str> {
        self.library_tag.as_deref()
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn cycles_min(&self) -> u64 {
        self.cycles_min
    }

    pub fn cycles_max(&self) -> u64 {
        self.cycles_max
    }
}

/// Raw row shape as written in a TOML config
#[derive(Debug, Deserialize)]
pub struct RowRecord {
    name: String,
    #[serde(default, alias = "crate")]
    library: Option<String>,
    size_bytes: u64,
    cycles_min: u64,
    cycles_max: u64,
}

impl TryFrom<RowRecord> for MeasurementRow {
    type Error = ReportError;

    fn try_from(record: RowRecord) -> Result<Self> {
        let tag = record
            .library
            .as_deref()
            .filter(|tag| *tag != measurements::UNTAGGED);
        MeasurementRow::new(
            record.name,
            tag,
            record.size_bytes,
            record.cycles_min,
            record.cycles_max,
        )
    }
}

/// Build the rows of the embedded tfmt vs core::fmt benchmark
pub fn embedded_rows() -> Result<Vec<MeasurementRow>> {
    measurements::TFMT_VS_FMT
        .iter()
        .map(|&(name, tag, size, min, max)| {
            let tag = (tag != measurements::UNTAGGED).then_some(tag);
            MeasurementRow::new(name, tag, size, min, max)
        })
        .collect()
}

/// Ordered measurements whose first row is the baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<MeasurementRow>,
}

impl Dataset {
    /// Build a dataset, rejecting empty input and mixed tagged/untagged rows
    pub fn new(rows: Vec<MeasurementRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ReportError::InvalidDataset(
                "At least one row (the baseline) is required".to_string(),
            ));
        }

        let comparisons = &rows[1..];
        let tagged = comparisons
            .iter()
            .filter(|row| row.library_tag().is_some())
            .count();
        if tagged != 0 && tagged != comparisons.len() {
            return Err(ReportError::InvalidDataset(format!(
                "Either all or none of the rows after the baseline must carry a library tag ({tagged} of {} do)",
                comparisons.len()
            )));
        }

        Ok(Self { rows })
    }

    pub fn baseline(&self) -> &MeasurementRow {
        &self.rows[0]
    }

    /// Rows measured against the baseline, in input order
    pub fn comparisons(&self) -> &[MeasurementRow] {
        &self.rows[1..]
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    /// Whether the comparison rows carry a library dimension
    pub fn is_tagged(&self) -> bool {
        self.comparisons()
            .first()
            .is_some_and(|row| row.library_tag().is_some())
    }

    pub fn base_size(&self) -> u64 {
        self.baseline().size_bytes()
    }

    /// Baseline cycle reference; the baseline's minimum is used for both bounds
    pub fn base_cycles(&self) -> u64 {
        self.baseline().cycles_min()
    }
}

/// A measurement expressed relative to the baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub name: String,
    pub library_tag: Option<String>,
    pub delta_size: i64,
    pub delta_cycles_min: i64,
    pub delta_cycles_max: i64,
}

impl NormalizedRow {
    /// Height of the worst-case band above the best case
    pub fn delta_cycles_spread(&self) -> i64 {
        self.delta_cycles_max - self.delta_cycles_min
    }
}
