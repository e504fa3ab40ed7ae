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

//! Measurement-file loaders.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::table::{MeasurementRow, MeasurementTable};

/// Default path of the convenience loader, [`load_test_data`].
pub const DEFAULT_MEASUREMENT_PATH: &str = "test_data.txt";

/// Load a comma-separated measurement file from `path`.
///
/// The whole file is materialized in one blocking read; the file handle is
/// released when the call returns. A header row is required and becomes
/// [`MeasurementTable::headers`].
///
/// # Errors
///
/// Returns [`MeasurementError::Io`](crate::MeasurementError::Io) when the
/// file cannot be opened (a missing file keeps
/// [`std::io::ErrorKind::NotFound`]), and
/// [`MeasurementError::CsvLib`](crate::MeasurementError::CsvLib) on
/// malformed CSV content.
pub fn load_measurements<P: AsRef<Path>>(path: P) -> Result<MeasurementTable> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Load the fixed default measurement file, `test_data.txt`, from the
/// current directory.
pub fn load_test_data() -> Result<MeasurementTable> {
    load_measurements(DEFAULT_MEASUREMENT_PATH)
}

/// Read comma-separated measurements from any [`Read`] implementor.
///
/// Both path-taking loaders funnel through here.
///
/// # Examples
///
/// ```
/// use roofline_csv::from_reader;
///
/// let table = from_reader("bytes,time\n4.0,0.5\n".as_bytes())?;
/// assert_eq!(table.headers, vec!["bytes", "time"]);
/// assert_eq!(table.len(), 1);
/// # Ok::<(), roofline_csv::MeasurementError>(())
/// ```
pub fn from_reader<R: Read>(reader: R) -> Result<MeasurementTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(MeasurementRow {
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(MeasurementTable { headers, rows })
}
