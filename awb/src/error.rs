// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;

use crate::form::LineKind;

/// Errors raised when an editing action is rejected.
///
/// Computing aggregates or rendering the preview never fails. Only actions
/// that address something that doesn't exist or that would violate the line
/// limits are rejected, in which case the form is left unchanged.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A line can't be added since the collection is full.
    LineLimitReached { kind: LineKind, limit: usize },
    /// The last remaining line of a collection can't be removed.
    LastLine { kind: LineKind },
    /// No line exists at the index.
    LineNotFound { kind: LineKind, index: usize },
    /// The field key doesn't name an editable field.
    UnknownField(String),
    /// The value is not one of the options of a select field.
    InvalidValue { field: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineLimitReached { kind, limit } => {
                write!(f, "maximum {limit} {kind} line(s) allowed")
            }
            Self::LastLine { kind } => {
                write!(f, "at least one {kind} line is required")
            }
            Self::LineNotFound { kind, index } => {
                write!(f, "no {kind} line at index {index}")
            }
            Self::UnknownField(key) => write!(f, "unknown field: {key}"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: \"{value}\"")
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
