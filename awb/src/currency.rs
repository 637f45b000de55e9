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

//! Currencies and their display symbols.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The symbol shown for currency codes that aren't known.
pub const DEFAULT_SYMBOL: &str = "$";

/// Currencies the form knows a display symbol for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Currency {
    Usd,
    Eur,
    Sgd,
    Inr,
    Lkr,
    Gbp,
    Jpy,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Self::Usd,
        Self::Eur,
        Self::Sgd,
        Self::Inr,
        Self::Lkr,
        Self::Gbp,
        Self::Jpy,
        Self::Aud,
        Self::Cad,
    ];

    /// The ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Sgd => "SGD",
            Self::Inr => "INR",
            Self::Lkr => "LKR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Sgd => "S$",
            Self::Inr => "₹",
            Self::Lkr => "Rs",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Aud => "A$",
            Self::Cad => "C$",
        }
    }
}

/// Returns the display symbol of the currency `code`.
///
/// Codes are matched case-insensitively and unknown codes fall back to the
/// [`DEFAULT_SYMBOL`].
///
/// ```
/// # use awb::currency::symbol;
/// assert_eq!(symbol("LKR"), "Rs");
/// assert_eq!(symbol("XXX"), "$");
/// ```
pub fn symbol(code: &str) -> &'static str {
    code.parse::<Currency>()
        .map(|currency| currency.symbol())
        .unwrap_or(DEFAULT_SYMBOL)
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::InvalidValue {
                field: "currency",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_symbols() {
        assert_eq!(symbol("USD"), "$");
        assert_eq!(symbol("EUR"), "€");
        assert_eq!(symbol("LKR"), "Rs");
        assert_eq!(symbol("lkr"), "Rs");
        assert_eq!(symbol("INR"), "₹");
    }

    #[test]
    fn unknown_code_falls_back_to_default_symbol() {
        assert_eq!(symbol("XXX"), DEFAULT_SYMBOL);
        assert_eq!(symbol(""), DEFAULT_SYMBOL);
    }

    #[test]
    fn codes_round_trip() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
    }
}
