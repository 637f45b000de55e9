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

use crate::error::Error;

/// Which charge sections are printed on the waybill.
///
/// The view is switched only by an explicit selection and doesn't depend on
/// which charges are filled in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaymentView {
    #[default]
    Prepaid,
    Collection,
    Both,
}

impl PaymentView {
    pub fn shows_prepaid(&self) -> bool {
        matches!(self, Self::Prepaid | Self::Both)
    }

    pub fn shows_collection(&self) -> bool {
        matches!(self, Self::Collection | Self::Both)
    }

    /// The payment type code printed on the waybill.
    pub fn payment_type(&self) -> &'static str {
        match (self.shows_prepaid(), self.shows_collection()) {
            (true, true) => "PP/CC",
            (true, false) => "PP",
            (false, true) => "CC",
            (false, false) => "",
        }
    }
}

impl FromStr for PaymentView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prepaid" | "pp" => Ok(Self::Prepaid),
            "collection" | "cc" => Ok(Self::Collection),
            "both" | "pp/cc" => Ok(Self::Both),
            _ => Err(Error::InvalidValue {
                field: "payment view",
                value: s.to_string(),
            }),
        }
    }
}

/// The tabs of the form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tab {
    /// AWB number, airports, carrier and flight.
    Shipment,
    /// Shipper, consignee and issuing agent.
    Parties,
    Routing,
    /// Rate and dimension lines, goods description, declared values and
    /// handling information.
    Goods,
    /// Prepaid and collection charges and the currency conversion.
    Charges,
}

impl Tab {
    /// The tabs in the order they appear in the form.
    pub const ALL: [Tab; 5] = [
        Self::Shipment,
        Self::Parties,
        Self::Routing,
        Self::Goods,
        Self::Charges,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Shipment => "shipment",
            Self::Parties => "parties",
            Self::Routing => "routing",
            Self::Goods => "goods",
            Self::Charges => "charges",
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_end_matches("-tab");
        Self::ALL
            .into_iter()
            .find(|tab| tab.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidValue {
                field: "tab",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_sets_both_flags() {
        let cases = [
            (PaymentView::Prepaid, true, false, "PP"),
            (PaymentView::Collection, false, true, "CC"),
            (PaymentView::Both, true, true, "PP/CC"),
        ];

        for (view, prepaid, collection, code) in cases {
            assert_eq!(view.shows_prepaid(), prepaid);
            assert_eq!(view.shows_collection(), collection);
            assert_eq!(view.payment_type(), code);
        }
    }

    #[test]
    fn parses_tab_ids() {
        assert_eq!("charges-tab".parse::<Tab>(), Ok(Tab::Charges));
        assert_eq!("Goods".parse::<Tab>(), Ok(Tab::Goods));
        assert!("print".parse::<Tab>().is_err());
    }
}
