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

//! The performance-model formulas.
//!
//! Every function here is a single-step pure computation over value
//! arguments; the only state touched anywhere is the immutable
//! [`SystemConstants::HOST`] profile read by [`memory_peak`]. All functions
//! are safe to call concurrently without locking.
//!
//! Units are fixed by convention, not by a runtime unit system: bandwidth
//! in GB/s, throughput in GFLOPS/s, clock speed in GHz, scaling-law outputs
//! are dimensionless speedup ratios.

use crate::constants::SystemConstants;
use crate::error::{ModelError, Result};

/// Effective bandwidth of a measured transfer, in the units of
/// `bytes_moved` per unit of `time` (GB/s when those are GB and seconds).
///
/// When `read_and_write` is set, traffic is modeled as twice the one-way
/// byte count, since every element crosses the bus in both directions.
///
/// # Errors
///
/// Returns [`ModelError::DivisionByZero`] when `time` is zero.
pub fn effective_bandwidth(bytes_moved: f64, time: f64, read_and_write: bool) -> Result<f64> {
    if time == 0.0 {
        return Err(ModelError::DivisionByZero { denominator: "time" });
    }
    if read_and_write {
        Ok(bytes_moved / time * 2.0)
    } else {
        Ok(bytes_moved / time)
    }
}

/// Floating-point operations per second.
///
/// # Errors
///
/// Returns [`ModelError::DivisionByZero`] when `time` is zero.
pub fn flopss(total_flops: f64, time: f64) -> Result<f64> {
    if time == 0.0 {
        return Err(ModelError::DivisionByZero { denominator: "time" });
    }
    Ok(total_flops / time)
}

/// Arithmetic intensity: the ratio of flops to bytes moved.
///
/// A high value means a lot of computation happens per load; a low value
/// means the algorithm is often waiting on data before it can do anything
/// (memory bound).
///
/// # Errors
///
/// Returns [`ModelError::DivisionByZero`] when `bytes_moved` is zero.
pub fn arithmetic_intensity(flops: f64, bytes_moved: f64) -> Result<f64> {
    if bytes_moved == 0.0 {
        return Err(ModelError::DivisionByZero {
            denominator: "bytes_moved",
        });
    }
    Ok(flops / bytes_moved)
}

/// Operational intensity: flops per byte of traffic, as used on the x axis
/// of a roofline plot.
///
/// The formula is identical to [`arithmetic_intensity`]; the two names are
/// kept distinct so call sites can state which framing they mean
/// (memory-bound analysis vs compute-bound analysis).
///
/// # Errors
///
/// Returns [`ModelError::DivisionByZero`] when `bytes_moved` is zero.
pub fn operational_intensity(flops: f64, bytes_moved: f64) -> Result<f64> {
    if bytes_moved == 0.0 {
        return Err(ModelError::DivisionByZero {
            denominator: "bytes_moved",
        });
    }
    Ok(flops / bytes_moved)
}

/// The roofline bound: the lesser of the memory-bound ceiling
/// (`memory_peak_bw * operational_intensity`) and the compute-bound ceiling
/// (`performance_peak`), in GFLOPS/s.
pub fn attainable_performance(
    memory_peak_bw: f64,
    operational_intensity: f64,
    performance_peak: f64,
) -> f64 {
    f64::min(memory_peak_bw * operational_intensity, performance_peak)
}

/// Peak compute throughput of a processor, in GFLOPS/s given a GHz clock.
///
/// The inputs come from OS introspection, outside this library:
///
/// - core count: `lscpu` (threads per core x cores per socket x sockets)
/// - clock speed in GHz: `lscpu | grep MHz`
/// - flops per cycle: per-microarchitecture, see
///   <https://en.wikipedia.org/wiki/Floating_point_operations_per_second>
pub fn performance_peak(core_count: u32, clock_speed: f64, flops_per_cycle: u32) -> f64 {
    core_count as f64 * clock_speed * flops_per_cycle as f64
}

/// Peak theoretical memory bandwidth of the host profile, in GB/s.
///
/// Reads [`SystemConstants::HOST`]; see [`crate::constants`] for how the
/// profile is maintained.
pub fn memory_peak() -> f64 {
    SystemConstants::HOST.peak_theoretical_bandwidth()
}

/// The ridge point: the operational intensity at which the memory-bound and
/// compute-bound regions of a roofline plot meet.
///
/// # Errors
///
/// Returns [`ModelError::DivisionByZero`] when `memory_peak` is zero.
pub fn roofing_ridge(performance_peak: f64, memory_peak: f64) -> Result<f64> {
    if memory_peak == 0.0 {
        return Err(ModelError::DivisionByZero {
            denominator: "memory_peak",
        });
    }
    Ok(performance_peak / memory_peak)
}

/// Amdahl's law: the maximum speedup from parallelizing a computation while
/// holding the total problem size fixed (strong scaling).
///
/// `parallelizable_fraction` is the fraction of the single-processor
/// execution time that can be parallelized.
///
/// # Errors
///
/// Returns [`ModelError::FractionOutOfRange`] when
/// `parallelizable_fraction` falls outside `[0, 1]`, and
/// [`ModelError::DivisionByZero`] when `core_count` is zero.
///
/// # Examples
///
/// ```
/// use roofline_core::amdahl_law;
///
/// // Fully serial work never speeds up.
/// assert_eq!(amdahl_law(0.0, 64).unwrap(), 1.0);
/// // Fully parallel work scales linearly.
/// assert_eq!(amdahl_law(1.0, 64).unwrap(), 64.0);
/// ```
pub fn amdahl_law(parallelizable_fraction: f64, core_count: u32) -> Result<f64> {
    if !(0.0..=1.0).contains(&parallelizable_fraction) {
        return Err(ModelError::FractionOutOfRange {
            name: "parallelizable_fraction",
            value: parallelizable_fraction,
        });
    }
    if core_count == 0 {
        return Err(ModelError::DivisionByZero {
            denominator: "core_count",
        });
    }
    let p = parallelizable_fraction;
    Ok(1.0 / ((1.0 - p) + p / core_count as f64))
}

/// Gustafson's law: the maximum speedup from parallelizing a computation
/// while holding the per-processor problem size fixed (weak scaling; the
/// total problem grows with the processor count).
///
/// `alpha` is the serial fraction of the execution time on a single
/// processor: `gustafson_law(0.0, n)` is `n`, `gustafson_law(1.0, n)` is 1.
pub fn gustafson_law(alpha: f64, core_count: u32) -> f64 {
    let n = core_count as f64;
    n + (1.0 - n) * alpha
}
