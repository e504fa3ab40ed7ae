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

//! Property-based tests for the model formulas.
//!
//! These verify the algebraic invariants of the formulas across randomly
//! generated inputs rather than spot values.

use proptest::prelude::*;
use roofline::{
    amdahl_law, arithmetic_intensity, attainable_performance, effective_bandwidth, flopss,
    operational_intensity, roofing_ridge,
};

/// Positive magnitudes in a range where the formulas stay well-conditioned.
fn arb_positive() -> impl Strategy<Value = f64> {
    1.0e-6..1.0e12f64
}

proptest! {
    /// Property: flopss is exactly total_flops / time
    #[test]
    fn prop_flopss_is_a_quotient(f in arb_positive(), t in arb_positive()) {
        prop_assert_eq!(flopss(f, t).unwrap(), f / t);
    }

    /// Property: for fixed work, more time means lower throughput
    #[test]
    fn prop_flopss_decreasing_in_time(f in arb_positive(), t in arb_positive()) {
        let faster = flopss(f, t).unwrap();
        let slower = flopss(f, t * 2.0).unwrap();
        prop_assert!(slower < faster);
    }

    /// Property: read+write traffic doubles the one-way bandwidth
    #[test]
    fn prop_effective_bandwidth_doubles(d in arb_positive(), t in arb_positive()) {
        let one_way = effective_bandwidth(d, t, false).unwrap();
        let both = effective_bandwidth(d, t, true).unwrap();
        prop_assert_eq!(both, 2.0 * one_way);
    }

    /// Property: the two intensity framings compute the same ratio
    #[test]
    fn prop_intensities_agree(f in arb_positive(), d in arb_positive()) {
        prop_assert_eq!(
            arithmetic_intensity(f, d).unwrap(),
            operational_intensity(f, d).unwrap()
        );
    }

    /// Property: the roofline bound never exceeds either ceiling
    #[test]
    fn prop_roofline_is_a_minimum(
        mp in arb_positive(),
        oi in arb_positive(),
        pp in arb_positive(),
    ) {
        let bound = attainable_performance(mp, oi, pp);
        prop_assert!(bound <= pp);
        prop_assert!(bound <= mp * oi);
    }

    /// Property: Amdahl speedup stays within [1, core_count]
    #[test]
    fn prop_amdahl_bounded(p in 0.0..=1.0f64, n in 1u32..4096) {
        let speedup = amdahl_law(p, n).unwrap();
        prop_assert!(speedup >= 1.0 - 1e-12);
        prop_assert!(speedup <= n as f64 + 1e-9);
    }

    /// Property: the ridge point is the plain quotient of the two peaks
    #[test]
    fn prop_ridge_is_a_quotient(pp in arb_positive(), mp in arb_positive()) {
        prop_assert_eq!(roofing_ridge(pp, mp).unwrap(), pp / mp);
    }
}
