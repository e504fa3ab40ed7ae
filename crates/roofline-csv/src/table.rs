// Roofline - Classical Performance Modeling
//
// Copyright (c) 2025 Roofline contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The in-memory measurement table.

use crate::error::{MeasurementError, Result};

/// One record of a measurement file: a flat list of string cells.
///
/// No schema is enforced; cells hold whatever the benchmark producer wrote,
/// and the caller decides what to parse out of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementRow {
    /// Cell values in header order.
    pub cells: Vec<String>,
}

impl MeasurementRow {
    /// The cell at `index`, or `None` when the row is shorter.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A fully materialized measurement file: one header row plus data rows.
///
/// # Examples
///
/// ```
/// use roofline_csv::from_reader;
///
/// let table = from_reader("bytes,time\n4.0,0.5\n8.0,1.0\n".as_bytes())?;
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.numeric_column("time")?, vec![0.5, 1.0]);
/// # Ok::<(), roofline_csv::MeasurementError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementTable {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Data rows, header excluded.
    pub rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, or `None` when absent.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of a named column, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::MissingColumn`] when the header row has
    /// no such column. Rows shorter than the header contribute an empty
    /// cell.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| MeasurementError::MissingColumn(name.to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).unwrap_or(""))
            .collect())
    }

    /// A named column parsed as `f64`, for feeding the model formulas.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::MissingColumn`] when the column is
    /// absent, and [`MeasurementError::TypeMismatch`] on the first cell
    /// that does not parse as a number.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)?
            .into_iter()
            .map(|cell| {
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| MeasurementError::TypeMismatch {
                        column: name.to_string(),
                        value: cell.to_string(),
                    })
            })
            .collect()
    }
}
