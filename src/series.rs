use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};

pub const COL_CONTENTION: &str = "contention_index";
pub const COL_THROUGHPUT: &str = "throughput_tps";

/// One benchmark sweep: `(contention_index, throughput_tps)` pairs in input
/// row order. Both columns always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    contention: Vec<f64>,
    throughput: Vec<f64>,
}

impl DataSeries {
    #[must_use]
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (contention, throughput) = points.iter().copied().unzip();
        Self {
            contention,
            throughput,
        }
    }

    /// Loads a series from a CSV file with a header row.
    ///
    /// The header must contain `contention_index` and `throughput_tps`
    /// (case-sensitive, any column order); additional columns are ignored.
    /// Every data row must carry a float-parseable value in both columns —
    /// a malformed or missing cell fails the whole load, no row is skipped.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let csv_err = |source| PlotError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;

        let headers = reader.headers().map_err(csv_err)?;
        let contention_col = find_column(headers, COL_CONTENTION, path)?;
        let throughput_col = find_column(headers, COL_THROUGHPUT, path)?;

        let mut contention = Vec::new();
        let mut throughput = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(csv_err)?;
            // Data rows start on line 2, after the header.
            let line = row + 2;
            contention.push(parse_cell(&record, contention_col, COL_CONTENTION, line, path)?);
            throughput.push(parse_cell(&record, throughput_col, COL_THROUGHPUT, line, path)?);
        }

        Ok(Self {
            contention,
            throughput,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contention.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contention.is_empty()
    }

    #[must_use]
    pub fn contention(&self) -> &[f64] {
        &self.contention
    }

    #[must_use]
    pub fn throughput(&self) -> &[f64] {
        &self.throughput
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.contention
            .iter()
            .copied()
            .zip(self.throughput.iter().copied())
    }
}

fn find_column(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PlotError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

fn parse_cell(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    line: usize,
    path: &Path,
) -> Result<f64> {
    // A row too short to reach the column is treated like an empty cell.
    let cell = record.get(index).unwrap_or("");
    cell.trim()
        .parse::<f64>()
        .map_err(|source| PlotError::InvalidValue {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
            source,
        })
}

/// The three input files derived from an output prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub baseline: PathBuf,
    pub variant: PathBuf,
    pub variant_optimized: PathBuf,
}

impl InputSet {
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            baseline: PathBuf::from(format!("{prefix}_2pl.csv")),
            variant: PathBuf::from(format!("{prefix}_vll.csv")),
            variant_optimized: PathBuf::from(format!("{prefix}_vll_sca.csv")),
        }
    }

    #[must_use]
    pub fn paths(&self) -> [&Path; 3] {
        [&self.baseline, &self.variant, &self.variant_optimized]
    }

    /// Checks that all three input files exist before any of them is read.
    pub fn ensure_present(&self) -> Result<()> {
        for path in self.paths() {
            if !path.exists() {
                return Err(PlotError::MissingInput {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

/// The three named protocol series consumed by both renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolResultSet {
    /// 2PL, the locking baseline.
    pub baseline: DataSeries,
    /// VLL, the partitioned protocol.
    pub variant: DataSeries,
    /// VLL with the SCA optimization.
    pub variant_optimized: DataSeries,
}

impl ProtocolResultSet {
    pub fn load(inputs: &InputSet) -> Result<Self> {
        Ok(Self {
            baseline: DataSeries::from_csv_path(&inputs.baseline)?,
            variant: DataSeries::from_csv_path(&inputs.variant)?,
            variant_optimized: DataSeries::from_csv_path(&inputs.variant_optimized)?,
        })
    }

    /// Checks that both variant series are positionally aligned with the
    /// baseline. The bar chart reads all three series at baseline-derived
    /// positions, so a shorter series would otherwise index out of range.
    pub fn ensure_aligned(&self) -> Result<()> {
        let expected = self.baseline.len();
        for (name, series) in [
            ("variant", &self.variant),
            ("variant_optimized", &self.variant_optimized),
        ] {
            if series.len() != expected {
                return Err(PlotError::SeriesLengthMismatch {
                    series: name.to_string(),
                    expected,
                    actual: series.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
