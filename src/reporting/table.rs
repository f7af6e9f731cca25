use std::io::{self, Write};

use crate::core::constants::table::{
    CRATE_HEADER, CRATE_WIDTH, CYCLES_MAX_HEADER, CYCLES_MIN_HEADER, NAME_HEADER, NAME_WIDTH,
    SIZE_HEADER, VALUE_WIDTH,
};
use crate::core::{Dataset, NormalizedRow};

/// Column set of the text table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Name, crate, size, cycles_min, cycles_max
    Tagged,
    /// Name, size, cycles_min, cycles_max
    Untagged,
}

impl TableLayout {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        if dataset.is_tagged() {
            TableLayout::Tagged
        } else {
            TableLayout::Untagged
        }
    }
}

/// Prints normalized rows as a pipe-delimited, column-aligned table
#[derive(Debug, Clone, Copy)]
pub struct TableReporter {
    layout: TableLayout,
}

impl TableReporter {
    pub fn new(layout: TableLayout) -> Self {
        Self { layout }
    }

    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(TableLayout::for_dataset(dataset))
    }

    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    pub fn header(&self) -> String {
        self.line(
            NAME_HEADER,
            CRATE_HEADER,
            SIZE_HEADER,
            CYCLES_MIN_HEADER,
            CYCLES_MAX_HEADER,
        )
    }

    pub fn separator(&self) -> String {
        let value = "-".repeat(VALUE_WIDTH + 2);
        let name = "-".repeat(NAME_WIDTH + 2);
        match self.layout {
            TableLayout::Tagged => {
                let tag = "-".repeat(CRATE_WIDTH + 2);
                format!("|{name}|{tag}|{value}|{value}|{value}|")
            }
            TableLayout::Untagged => format!("|{name}|{value}|{value}|{value}|"),
        }
    }

    pub fn row(&self, row: &NormalizedRow) -> String {
        self.line(
            &row.name,
            row.library_tag.as_deref().unwrap_or("-"),
            &row.delta_size.to_string(),
            &row.delta_cycles_min.to_string(),
            &row.delta_cycles_max.to_string(),
        )
    }

    /// Header, separator and one line per row, each terminated by a newline
    pub fn render(&self, rows: &[NormalizedRow]) -> String {
        let mut table = String::new();
        table.push_str(&self.header());
        table.push('\n');
        table.push_str(&self.separator());
        table.push('\n');
        for row in rows {
            table.push_str(&self.row(row));
            table.push('\n');
        }
        table
    }

    pub fn write_to<W: Write>(&self, rows: &[NormalizedRow], out: &mut W) -> io::Result<()> {
        out.write_all(self.render(rows).as_bytes())?;
        out.flush()
    }

    fn line(&self, name: &str, tag: &str, size: &str, min: &str, max: &str) -> String {
        match self.layout {
            TableLayout::Tagged => format!(
                "| {name:<NAME_WIDTH$} | {tag:>CRATE_WIDTH$} | {size:>VALUE_WIDTH$} | {min:>VALUE_WIDTH$} | {max:>VALUE_WIDTH$} |"
            ),
            TableLayout::Untagged => format!(
                "| {name:<NAME_WIDTH$} | {size:>VALUE_WIDTH$} | {min:>VALUE_WIDTH$} | {max:>VALUE_WIDTH$} |"
            ),
        }
    }
}
