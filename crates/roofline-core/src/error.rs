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

//! Error types for the model formulas.

use thiserror::Error;

/// Arithmetic domain error raised by a model formula.
///
/// Every formula is a single-step pure computation; the only failure modes
/// are a zero denominator and an out-of-range fraction argument. Nothing is
/// retried or recovered here — errors propagate directly to the caller.
///
/// # Examples
///
/// ```
/// use roofline_core::ModelError;
///
/// let err = ModelError::DivisionByZero { denominator: "time" };
/// assert_eq!(err.to_string(), "division by zero: time must be non-zero");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A formula denominator was zero.
    #[error("division by zero: {denominator} must be non-zero")]
    DivisionByZero {
        /// Name of the argument used as the denominator.
        denominator: &'static str,
    },

    /// A fraction argument fell outside `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roofline_core::ModelError;
    ///
    /// let err = ModelError::FractionOutOfRange {
    ///     name: "parallelizable_fraction",
    ///     value: 1.5,
    /// };
    /// assert!(err.to_string().contains("[0, 1]"));
    /// ```
    #[error("fraction out of range: {name} must be within [0, 1], got {value}")]
    FractionOutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: f64,
    },
}

/// Convenience type alias for `Result` with [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;
