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

//! Raw form inputs and their lenient numeric reading.

use std::fmt;
use std::str::FromStr;

use log::trace;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw text of a form input as typed by the user.
///
/// Inputs are stored verbatim and only interpreted when read for a
/// computation. Reading a number never fails: blank or unparseable text reads
/// as zero, the way a number input that is still being typed is treated.
///
/// # Examples
///
/// ```
/// # use awb::Input;
/// # use rust_decimal::Decimal;
/// let weight = Input::from("10.5");
/// assert_eq!(weight.as_decimal(), Decimal::new(105, 1));
///
/// // a number followed by garbage reads as the leading number
/// assert_eq!(Input::from("12kg").as_count(), 12);
///
/// // anything else reads as zero
/// assert_eq!(Input::from("abc").as_decimal(), Decimal::ZERO);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Input(String);

impl Input {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// Returns the input as typed.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the input is empty or contains only whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the input or the `placeholder` if the input is blank.
    pub fn or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.is_blank() {
            placeholder
        } else {
            self.as_str()
        }
    }

    pub fn set<S: Into<String>>(&mut self, s: S) {
        self.0 = s.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Reads the input as a number of pieces.
    ///
    /// Only the leading digits are read. Blank, unparseable or negative input
    /// reads as `0` and counts beyond `u32::MAX` saturate.
    pub fn as_count(&self) -> u32 {
        match leading_number(&self.0, false) {
            // only digits are left, so parsing fails on overflow only
            Some(s) => u64::from_str(s)
                .ok()
                .and_then(|count| u32::try_from(count).ok())
                .unwrap_or(u32::MAX),
            None => {
                if !self.is_blank() {
                    trace!("reading {:?} as count 0", self.0);
                }
                0
            }
        }
    }

    /// Reads the input as a decimal number or returns `None` if the input
    /// doesn't start with a number.
    ///
    /// Numbers may be written in exponent notation like `1.5e2`.
    pub fn try_decimal(&self) -> Option<Decimal> {
        let s = leading_number(&self.0, true)?;
        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };

        let (sign, digits) = match mantissa.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };
        // normalize ".5" and "5." which are valid number inputs
        let digits = digits.trim_end_matches('.');
        let zero = if digits.starts_with('.') { "0" } else { "" };

        let value = match exponent {
            Some(exponent) => {
                let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
                Decimal::from_scientific(&format!("{sign}{zero}{digits}e{exponent}"))
            }
            None => Decimal::from_str(&format!("{sign}{zero}{digits}")),
        };

        match value {
            Ok(value) => Some(value),
            Err(e) => {
                trace!("can't read {:?} as decimal: {e}", self.0);
                None
            }
        }
    }

    /// Reads the input as a decimal number.
    ///
    /// Blank or unparseable input reads as `0`.
    pub fn as_decimal(&self) -> Decimal {
        self.try_decimal().unwrap_or_else(|| {
            if !self.is_blank() {
                trace!("reading {:?} as decimal 0", self.0);
            }
            Decimal::ZERO
        })
    }
}

/// Returns the leading number of `s` ignoring leading whitespace.
///
/// A count is read as optional sign followed by digits whereas a decimal may
/// contain a single decimal point and an exponent. Returns `None` if no digit
/// is found or a count is negative.
fn leading_number(s: &str, fraction: bool) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if let Some(b'+' | b'-') = bytes.first() {
        if !fraction && bytes[0] == b'-' {
            return None;
        }
        end += 1;
    }

    let mut digits = 0;
    let mut point = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if fraction && !point => point = true,
            _ => break,
        }
        end += 1;
    }

    if digits == 0 {
        return None;
    }

    if fraction {
        end += exponent_len(&bytes[end..]);
    }

    Some(&s[..end])
}

/// Returns the length of a leading `[eE][+-]?digits` exponent or `0` if
/// there is none.
fn exponent_len(bytes: &[u8]) -> usize {
    let mut len = match bytes.first() {
        Some(b'e' | b'E') => 1,
        _ => return 0,
    };

    if let Some(b'+' | b'-') = bytes.get(len) {
        len += 1;
    }

    let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        len + digits
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Self(s)
    }
}
