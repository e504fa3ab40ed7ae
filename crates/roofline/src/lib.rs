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

//! # Roofline - Classical Performance Modeling
//!
//! A small numeric formula library for classical performance modeling:
//! effective bandwidth, FLOPS/s, arithmetic intensity, the roofline
//! attainable-performance bound, and Amdahl's and Gustafson's scaling
//! laws, computed from caller-supplied hardware and workload parameters.
//! It is meant to feed a plotting or reporting layer; nothing here draws,
//! logs, or persists.
//!
//! ## Quick Start
//!
//! ```rust
//! use roofline::{
//!     amdahl_law, attainable_performance, memory_peak,
//!     operational_intensity, performance_peak, roofing_ridge,
//! };
//!
//! // Compute ceiling: 8 cores at 2.5 GHz, 16 flops per cycle.
//! let peak = performance_peak(8, 2.5, 16);
//! assert_eq!(peak, 320.0);
//!
//! // Roofline bound for a kernel doing 6 GFLOP over 4 GB of traffic.
//! let oi = operational_intensity(6.0, 4.0).unwrap();
//! let bound = attainable_performance(memory_peak(), oi, peak);
//! assert!(bound <= peak);
//!
//! // Strong scaling of a 95%-parallel workload on 64 cores.
//! let speedup = amdahl_law(0.95, 64).unwrap();
//! assert!(speedup < 64.0);
//!
//! // Ridge point of the plot.
//! let ridge = roofing_ridge(peak, memory_peak()).unwrap();
//! assert!(ridge > 0.0);
//! ```
//!
//! ## Units
//!
//! There is no runtime unit system; each quantity is a plain number whose
//! unit is fixed by contract: bandwidth in GB/s, throughput in GFLOPS/s,
//! clock speed in GHz, scaling-law outputs are dimensionless speedups.
//!
//! ## Optional measurement loading (feature-gated)
//!
//! With `feature = "csv"`, the [`measurements`] module loads benchmark runs
//! from a comma-separated file with a header row:
//!
//! ```no_run
//! # #[cfg(feature = "csv")] {
//! use roofline::measurements::load_measurements;
//!
//! let runs = load_measurements("test_data.txt").unwrap();
//! let times = runs.numeric_column("time").unwrap();
//! # }
//! ```

// Re-export the core model surface
pub use roofline_core::{
    // Formulas
    amdahl_law,
    arithmetic_intensity,
    attainable_performance,
    effective_bandwidth,
    flopss,
    gustafson_law,
    memory_peak,
    operational_intensity,
    performance_peak,
    roofing_ridge,
    // Errors
    ModelError,
    Result,
    // Hardware constants
    SystemConstants,
};

// Re-export measurement loading
#[cfg(feature = "csv")]
pub mod measurements {
    //! Benchmark measurement loading (comma-separated, header row required)
    pub use roofline_csv::{
        from_reader, load_measurements, load_test_data, MeasurementError, MeasurementRow,
        MeasurementTable, DEFAULT_MEASUREMENT_PATH,
    };
}
