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

//! Error types for measurement loading.

use thiserror::Error;

/// Measurement-file error types.
///
/// Loading performs no schema validation; the variants beyond I/O and CSV
/// parsing only fire from the column accessors, when a caller asks for a
/// column the file does not have or for a numeric view of a non-numeric
/// cell.
///
/// # Examples
///
/// ```
/// use roofline_csv::MeasurementError;
///
/// let err = MeasurementError::MissingColumn("time".to_string());
/// assert_eq!(err.to_string(), "missing column: time");
/// ```
#[derive(Debug, Error)]
pub enum MeasurementError {
    /// I/O error while opening or reading the file.
    ///
    /// A nonexistent path surfaces here with
    /// [`std::io::ErrorKind::NotFound`] preserved.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// A requested column is not in the header row.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as the requested numeric type.
    ///
    /// # Examples
    ///
    /// ```
    /// use roofline_csv::MeasurementError;
    ///
    /// let err = MeasurementError::TypeMismatch {
    ///     column: "time".to_string(),
    ///     value: "fast".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "type mismatch in column 'time': expected a number, got 'fast'"
    /// );
    /// ```
    #[error("type mismatch in column '{column}': expected a number, got '{value}'")]
    TypeMismatch {
        /// Column name where the mismatch occurred.
        column: String,
        /// The cell value that failed to parse.
        value: String,
    },
}

/// Convenience type alias for `Result` with [`MeasurementError`].
pub type Result<T> = std::result::Result<T, MeasurementError>;
