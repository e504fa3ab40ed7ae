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

//! Fixed hardware constants of one memory subsystem.
//!
//! The values are literals, hand-edited per deployment. They are read once
//! from OS introspection tools and then frozen:
//!
//! - memory clock rate: `sudo dmidecode --type 17 | grep "Configured Memory Speed"`
//! - bus width: `sudo lshw -C display | grep width`
//! - transfer rate: 2 for DDR memory
//!
//! Running those commands is the operator's job, not this library's.

/// One mebibyte, used to scale a memory clock quoted in mega-transfers.
const MEGABYTE: f64 = (1024 * 1024) as f64;

/// Fixed physical parameters of a memory subsystem.
///
/// All fields are set at construction and never mutated;
/// [`peak_theoretical_bandwidth`](SystemConstants::peak_theoretical_bandwidth)
/// is a pure derived value and comes out identical on every read.
///
/// # Examples
///
/// ```
/// use roofline_core::SystemConstants;
///
/// let host = SystemConstants::HOST;
/// assert_eq!(host.peak_theoretical_bandwidth(), 42.94967296);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemConstants {
    /// Memory clock rate in transfers per second.
    pub memory_clock_rate: f64,
    /// Memory bus width in bits.
    pub bus_width: u32,
    /// Transfers per clock cycle (2 for double-data-rate memory).
    pub transfer_rate: u32,
}

impl SystemConstants {
    /// The process-wide memory profile read by
    /// [`memory_peak`](crate::memory_peak).
    ///
    /// Seeded with a 3200 MT/s dual-rate DDR module on a 64-bit bus.
    /// Edit these literals to match the deployment host.
    pub const HOST: SystemConstants = SystemConstants {
        memory_clock_rate: 3200.0 * MEGABYTE,
        bus_width: 64,
        transfer_rate: 2,
    };

    /// Create a profile from raw hardware parameters.
    pub const fn new(memory_clock_rate: f64, bus_width: u32, transfer_rate: u32) -> Self {
        SystemConstants {
            memory_clock_rate,
            bus_width,
            transfer_rate,
        }
    }

    /// Peak theoretical memory bandwidth in GB/s.
    ///
    /// Computed as `memory_clock_rate * bus_width * transfer_rate / 1e10`.
    /// The `1e10` divisor reproduces the DDR dual-channel-rate formula this
    /// library standardizes on; it is not generalized to other memory
    /// technologies.
    pub fn peak_theoretical_bandwidth(&self) -> f64 {
        self.memory_clock_rate * self.bus_width as f64 * self.transfer_rate as f64 / 1.0e10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_peak_bandwidth_exact() {
        // 3200 * 1024 * 1024 * 64 * 2 / 1e10
        assert_eq!(SystemConstants::HOST.peak_theoretical_bandwidth(), 42.94967296);
    }

    #[test]
    fn test_derivation_is_stable() {
        let host = SystemConstants::HOST;
        assert_eq!(
            host.peak_theoretical_bandwidth(),
            host.peak_theoretical_bandwidth()
        );
    }

    #[test]
    fn test_custom_profile() {
        // Single-rate memory on a 32-bit bus at 1e9 T/s.
        let constants = SystemConstants::new(1.0e9, 32, 1);
        assert_eq!(constants.peak_theoretical_bandwidth(), 3.2);
    }

    #[test]
    fn test_copy_semantics() {
        let a = SystemConstants::HOST;
        let b = a;
        assert_eq!(a, b);
    }
}
