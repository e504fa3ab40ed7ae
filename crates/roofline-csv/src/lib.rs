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

//! Benchmark measurement loading.
//!
//! This crate reads a delimited text file of benchmark measurements into a
//! flat [`MeasurementTable`]. The file is comma-separated with a required
//! header row; beyond that, no schema is imposed — the columns are whatever
//! the benchmark producer wrote, and cells stay strings until a caller asks
//! for a numeric view.
//!
//! # Examples
//!
//! ## Loading a measurement file
//!
//! ```no_run
//! use roofline_csv::load_measurements;
//!
//! let table = load_measurements("runs/stream_triad.csv")?;
//! let bytes = table.numeric_column("bytes")?;
//! let times = table.numeric_column("time")?;
//! assert_eq!(bytes.len(), times.len());
//! # Ok::<(), roofline_csv::MeasurementError>(())
//! ```
//!
//! ## The fixed default file
//!
//! ```no_run
//! use roofline_csv::load_test_data;
//!
//! // Reads `test_data.txt` from the current directory.
//! let table = load_test_data()?;
//! println!("{} runs", table.len());
//! # Ok::<(), roofline_csv::MeasurementError>(())
//! ```

mod error;
mod load;
mod table;

// Re-export public API
pub use error::{MeasurementError, Result};
pub use load::{from_reader, load_measurements, load_test_data, DEFAULT_MEASUREMENT_PATH};
pub use table::{MeasurementRow, MeasurementTable};
