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

//! Integration tests for loading measurement files from disk.

use std::io::Write;

use roofline_csv::{load_measurements, MeasurementError};
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_well_formed_file() {
    let file = write_file("name,bytes,time,flops\nsaxpy,4.0,0.5,2.0\ngemm,8.0,1.0,16.0\n");
    let table = load_measurements(file.path()).unwrap();

    // Row count equals data lines, header excluded.
    assert_eq!(table.len(), 2);
    assert_eq!(table.headers, vec!["name", "bytes", "time", "flops"]);
    assert_eq!(table.column("name").unwrap(), vec!["saxpy", "gemm"]);
    assert_eq!(table.numeric_column("flops").unwrap(), vec![2.0, 16.0]);
}

#[test]
fn test_load_header_only_file() {
    let file = write_file("name,bytes,time\n");
    let table = load_measurements(file.path()).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.headers.len(), 3);
}

#[test]
fn test_load_nonexistent_path() {
    let err = load_measurements("no_such_directory/test_data.txt").unwrap_err();
    match err {
        MeasurementError::Io(io_err) => {
            assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_load_imposes_no_schema() {
    // Arbitrary columns load fine; only the numeric view can fail.
    let file = write_file("run,comment\n1,warmup pass\n2,steady state\n");
    let table = load_measurements(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.column("comment").unwrap(),
        vec!["warmup pass", "steady state"]
    );
    assert!(matches!(
        table.numeric_column("comment").unwrap_err(),
        MeasurementError::TypeMismatch { .. }
    ));
}

#[test]
fn test_load_crlf_line_endings() {
    let file = write_file("bytes,time\r\n4.0,0.5\r\n8.0,1.0\r\n");
    let table = load_measurements(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.numeric_column("time").unwrap(), vec![0.5, 1.0]);
}
