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

//! Emit roofline plot points for a measurement file.
//!
//! This is the shape of the collaboration the library is built for: a
//! plotting layer calls the formulas and draws the result. Run with:
//!
//! ```bash
//! cargo run --example roofline_points --features csv -- runs.csv
//! ```
//!
//! The file needs `bytes`, `time`, and `flops` columns (GB, seconds, GFLOP).

use roofline::measurements::load_measurements;
use roofline::{
    attainable_performance, effective_bandwidth, flopss, memory_peak, operational_intensity,
    performance_peak, roofing_ridge,
};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| roofline::measurements::DEFAULT_MEASUREMENT_PATH.to_string());

    let runs = load_measurements(&path).expect("failed to load measurements");
    let bytes = runs.numeric_column("bytes").expect("missing 'bytes' column");
    let times = runs.numeric_column("time").expect("missing 'time' column");
    let flops = runs.numeric_column("flops").expect("missing 'flops' column");

    // Hardware parameters are caller-supplied configuration; edit to taste.
    let peak = performance_peak(8, 2.5, 16);
    let mem_peak = memory_peak();
    let ridge = roofing_ridge(peak, mem_peak).unwrap();

    println!("compute peak: {peak} GFLOPS/s");
    println!("memory peak:  {mem_peak} GB/s");
    println!("ridge point:  {ridge} FLOP/byte");
    println!();
    println!("run,oi,flopss,bandwidth,roof");

    for i in 0..runs.len() {
        let oi = operational_intensity(flops[i], bytes[i]).unwrap();
        let throughput = flopss(flops[i], times[i]).unwrap();
        let bw = effective_bandwidth(bytes[i], times[i], false).unwrap();
        let roof = attainable_performance(mem_peak, oi, peak);
        println!("{i},{oi},{throughput},{bw},{roof}");
    }
}
