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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Line, LineKind};
use crate::error::Error;
use crate::field::Input;

/// Maximum length of a commodity item number.
pub const COMMODITY_LENGTH: usize = 4;

/// Unit of the gross weight.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightUnit {
    /// Kilograms, coded `K`.
    #[default]
    Kilograms,
    /// Pounds, coded `L`.
    Pounds,
}

impl WeightUnit {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Kilograms => "K",
            Self::Pounds => "L",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "K" | "k" => Ok(Self::Kilograms),
            "L" | "l" => Ok(Self::Pounds),
            _ => Err(Error::InvalidValue {
                field: "weight unit",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// The IATA rate class of a rate line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RateClass {
    /// Specific commodity rate.
    #[default]
    C,
    /// Minimum charge.
    M,
    /// Normal rate (under 45 kg).
    N,
    /// Quantity rate.
    Q,
    /// Class rate reduction.
    R,
    /// Class rate surcharge.
    S,
}

impl RateClass {
    pub fn code(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::M => "M",
            Self::N => "N",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
        }
    }
}

impl FromStr for RateClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Self::C),
            "M" => Ok(Self::M),
            "N" => Ok(Self::N),
            "Q" => Ok(Self::Q),
            "R" => Ok(Self::R),
            "S" => Ok(Self::S),
            _ => Err(Error::InvalidValue {
                field: "rate class",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// A line of the rate description.
///
/// The line total is not part of the line but computed by the
/// [aggregator](crate::aggregate::rate_line_total).
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateLine {
    pub pieces: Input,
    pub weight: Input,
    pub unit: WeightUnit,
    pub rate_class: RateClass,
    pub(super) commodity: Input,
    pub chargeable_weight: Input,
    pub rate: Input,
}

impl RateLine {
    /// The commodity item number.
    pub fn commodity(&self) -> &Input {
        &self.commodity
    }

    /// Sets the commodity item number, truncated to four characters.
    pub fn set_commodity(&mut self, commodity: &str) {
        self.commodity
            .set(commodity.chars().take(COMMODITY_LENGTH).collect::<String>());
    }
}

impl Default for RateLine {
    fn default() -> Self {
        Self {
            pieces: Input::from("0"),
            weight: Input::from("0"),
            unit: WeightUnit::default(),
            rate_class: RateClass::default(),
            commodity: Input::default(),
            chargeable_weight: Input::from("0"),
            rate: Input::from("0"),
        }
    }
}

impl Line for RateLine {
    const KIND: LineKind = LineKind::Rate;

    fn clear(&mut self) {
        self.pieces.clear();
        self.weight.clear();
        self.commodity.clear();
        self.chargeable_weight.clear();
        self.rate.clear();
    }
}

/// A line of the dimensions with its measures in centimeters.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionLine {
    pub pieces: Input,
    pub length: Input,
    pub width: Input,
    pub height: Input,
}

impl Default for DimensionLine {
    fn default() -> Self {
        Self {
            pieces: Input::from("0"),
            length: Input::from("0"),
            width: Input::from("0"),
            height: Input::from("0"),
        }
    }
}

impl Line for DimensionLine {
    const KIND: LineKind = LineKind::Dimension;

    fn clear(&mut self) {
        self.pieces.clear();
        self.length.clear();
        self.width.clear();
        self.height.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_commodity() {
        let mut line = RateLine::default();
        line.set_commodity("123456");
        assert_eq!(line.commodity().as_str(), "1234");
    }

    #[test]
    fn parses_select_options() {
        assert_eq!("L".parse::<WeightUnit>(), Ok(WeightUnit::Pounds));
        assert_eq!("q".parse::<RateClass>(), Ok(RateClass::Q));
        assert!("X".parse::<RateClass>().is_err());
        assert!("G".parse::<WeightUnit>().is_err());
    }
}
