//! Table element

use std::io::Read;

use super::inline::escape_cell;
use super::Markdownable;

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment marker
    #[default]
    None,
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(align: pulldown_cmark::Alignment) -> Self {
        match align {
            pulldown_cmark::Alignment::None => Alignment::None,
            pulldown_cmark::Alignment::Left => Alignment::Left,
            pulldown_cmark::Alignment::Center => Alignment::Center,
            pulldown_cmark::Alignment::Right => Alignment::Right,
        }
    }
}

impl Alignment {
    fn separator(self) -> &'static str {
        match self {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
            Alignment::None => "---",
        }
    }
}

/// A pipe table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header cells
    pub headers: Vec<String>,
    /// Per-column alignment; missing entries mean [`Alignment::None`]
    pub alignments: Vec<Alignment>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table without explicit alignment
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            alignments: Vec::new(),
            rows,
        }
    }

    /// Set column alignments
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Load a table from CSV data; the first record is the header row
    ///
    /// # Returns
    /// * `Ok(Table)` - Parsed table
    /// * `Err(csv::Error)` - Error reading or parsing the CSV data
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::new(headers, rows))
    }

    /// Number of columns (header width)
    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    fn write_row(output: &mut String, cells: &[String], columns: usize) {
        output.push('|');
        for i in 0..columns {
            let cell = cells.get(i).map(|c| escape_cell(c)).unwrap_or_default();
            output.push_str(&format!(" {} |", cell));
        }
    }
}

impl Markdownable for Table {
    fn to_markdown(&self) -> String {
        let columns = self.columns();
        if columns == 0 {
            return String::new();
        }

        let mut output = String::new();
        Self::write_row(&mut output, &self.headers, columns);
        output.push('\n');

        output.push('|');
        for i in 0..columns {
            let align = self.alignments.get(i).copied().unwrap_or_default();
            output.push_str(&format!(" {} |", align.separator()));
        }

        for row in &self.rows {
            output.push('\n');
            Self::write_row(&mut output, row, columns);
        }

        output
    }
}
