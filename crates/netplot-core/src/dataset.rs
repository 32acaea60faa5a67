// File: crates/netplot-core/src/dataset.rs
// Summary: Column-oriented numeric data loaded from whitespace- or comma-delimited text.
// Notes:
// - Columns are 1-indexed, matching how series refer to them.
// - Blank lines and `#` comment lines are ignored; no header row is stripped.
// - A blank line does not split a series; each column pair is one point sequence.
// - Invalid UTF-8 is decoded lossily, so bad bytes surface as a malformed field.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, Result};

/// One data line: its 1-based line number in the source and its numeric fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<f64>,
}

impl Row {
    /// Field at 1-based `column`, if the row is long enough.
    pub fn get(&self, column: usize) -> Option<f64> {
        column.checked_sub(1).and_then(|i| self.fields.get(i)).copied()
    }
}

/// Points extracted for one (x, y) column pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnPair {
    pub points: Vec<(f64, f64)>,
    /// Line numbers of rows too short to supply both columns.
    pub skipped_lines: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load `path`; a `.csv` extension selects comma-delimited parsing,
    /// anything else is whitespace-delimited.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let not_found = |source| PlotError::InputNotFound { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(not_found)?;

        let data = if is_csv(path) {
            Self::from_csv_reader(file)?
        } else {
            Self::from_reader(BufReader::new(file)).map_err(|e| match e {
                PlotError::InputNotFound { source, .. } => not_found(source),
                other => other,
            })?
        };
        debug!(rows = data.len(), columns = data.max_columns(), path = %path.display(), "loaded dataset");
        Ok(data)
    }

    /// Parse whitespace-delimited rows (spaces or tabs, any run length).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut rows = Vec::new();
        for (idx, line) in reader.split(b'\n').enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| PlotError::InputNotFound { path: "<reader>".into(), source })?;
            let line = String::from_utf8_lossy(&line);
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields = parse_fields(line_no, trimmed.split_whitespace())?;
            rows.push(Row { line: line_no, fields });
        }
        Ok(Self { rows })
    }

    /// Parse comma-delimited rows without a header; rows may differ in length.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for rec in rdr.byte_records() {
            let rec = rec?;
            let line_no = rec.position().map(|p| p.line() as usize).unwrap_or(rows.len() + 1);
            let tokens: Vec<Cow<'_, str>> = rec.iter().map(String::from_utf8_lossy).collect();
            // Trailing empty fields (e.g. "1,2,") shorten the row rather than fail it.
            let used = tokens.iter().rposition(|f| !f.is_empty()).map_or(0, |i| i + 1);
            if used == 0 {
                continue;
            }
            let fields = parse_fields(line_no, tokens[..used].iter().map(|t| &**t))?;
            rows.push(Row { line: line_no, fields });
        }
        Ok(Self { rows })
    }

    /// Convenience for inline data (tests, benches).
    pub fn parse_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Widest row, in fields.
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(|r| r.fields.len()).max().unwrap_or(0)
    }

    /// Collect `(x, y)` from 1-based columns; rows lacking either are skipped and recorded.
    pub fn column_pair(&self, x_column: usize, y_column: usize) -> ColumnPair {
        let mut out = ColumnPair::default();
        for row in &self.rows {
            match (row.get(x_column), row.get(y_column)) {
                (Some(x), Some(y)) => out.points.push((x, y)),
                _ => out.skipped_lines.push(row.line),
            }
        }
        out
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn parse_fields<'a>(line: usize, tokens: impl Iterator<Item = &'a str>) -> Result<Vec<f64>> {
    tokens
        .enumerate()
        .map(|(i, tok)| match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(PlotError::MalformedRow { line, column: i + 1, token: tok.to_string() }),
        })
        .collect()
}
