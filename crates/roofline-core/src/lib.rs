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

//! Core roofline and scaling-law formulas.
//!
//! This crate is the numeric heart of the library: effective bandwidth,
//! FLOPS/s, arithmetic/operational intensity, the roofline attainable
//! performance bound, and Amdahl's and Gustafson's scaling laws, plus the
//! fixed [`SystemConstants`] profile from which the peak theoretical
//! memory bandwidth is derived.
//!
//! Everything here is pure computation over caller-supplied values and is
//! meant to feed an external plotting or reporting layer. There is no
//! state, no I/O (measurement-file loading lives in `roofline-csv`), and
//! no unit system: each quantity is a plain number whose unit is fixed by
//! the documented contract (GB/s, GHz, GFLOPS/s, dimensionless speedups).
//!
//! # Quick Start
//!
//! ```
//! use roofline_core::{
//!     attainable_performance, memory_peak, operational_intensity,
//!     performance_peak, roofing_ridge,
//! };
//!
//! // 8 cores at 2.5 GHz, 16 flops per cycle.
//! let peak = performance_peak(8, 2.5, 16);
//! assert_eq!(peak, 320.0);
//!
//! // A kernel doing 6 GFLOP over 4 GB of traffic.
//! let oi = operational_intensity(6.0, 4.0)?;
//! let bound = attainable_performance(memory_peak(), oi, peak);
//! assert!(bound <= peak);
//!
//! // Where the two roofline regions meet.
//! let ridge = roofing_ridge(peak, memory_peak())?;
//! assert!(ridge > 0.0);
//! # Ok::<(), roofline_core::ModelError>(())
//! ```

mod constants;
mod error;
mod model;

pub use constants::SystemConstants;
pub use error::{ModelError, Result};
pub use model::{
    amdahl_law, arithmetic_intensity, attainable_performance, effective_bandwidth, flopss,
    gustafson_law, memory_peak, operational_intensity, performance_peak, roofing_ridge,
};
