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

//! FWB message skeleton.
//!
//! Only the message header and the AWB consignment line are written. The
//! weight is given in the unit of the first rate line.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregates, WEIGHT_DP};
use crate::form::ShipmentForm;
use crate::preview::format::fixed;

/// Message type and version of the header line.
pub const MESSAGE_HEADER: &str = "FWB/16";

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fwb {
    header: String,
    consignment: String,
}

impl Fwb {
    /// Creates the message of the form.
    ///
    /// ```
    /// # use awb::aggregate::recompute;
    /// # use awb::form::ShipmentForm;
    /// # use awb::fwb::Fwb;
    /// let mut form = ShipmentForm::default();
    /// form.identifiers.prefix.set("618");
    /// form.identifiers.serial.set("12345675");
    /// form.identifiers.origin.set("SIN");
    /// form.identifiers.destination.set("CMB");
    ///
    /// let fwb = Fwb::new(&form, &recompute(&form));
    /// assert_eq!(fwb.to_string(), "FWB/16\n618-12345675SINCMB/T0K0.0");
    /// ```
    pub fn new(form: &ShipmentForm, aggregates: &Aggregates) -> Self {
        let ids = &form.identifiers;
        let unit = form
            .goods
            .rate_lines
            .get(0)
            .map(|line| line.unit)
            .unwrap_or_default();
        let consignment = format!(
            "{}-{}{}{}/T{}{}{}",
            ids.prefix.as_str().trim(),
            ids.serial.as_str().trim(),
            ids.origin.as_str().trim(),
            ids.destination.as_str().trim(),
            aggregates.goods.pieces,
            unit.code(),
            fixed(aggregates.goods.weight, WEIGHT_DP),
        );

        Self {
            header: MESSAGE_HEADER.to_string(),
            consignment,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// The AWB consignment line.
    pub fn consignment(&self) -> &str {
        &self.consignment
    }
}

impl fmt::Display for Fwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header, self.consignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::recompute;
    use crate::form::WeightUnit;

    #[test]
    fn writes_consignment_line() {
        let mut form = ShipmentForm::default();
        form.identifiers.prefix.set("176");
        form.identifiers.serial.set(" 00011122 ");
        form.identifiers.origin.set("DXB");
        form.identifiers.destination.set("CMB");
        let line = form.goods.rate_lines.get_mut(0).expect("line should exist");
        line.pieces.set("12");
        line.weight.set("250.25");

        let fwb = Fwb::new(&form, &recompute(&form));

        assert_eq!(fwb.header(), "FWB/16");
        assert_eq!(fwb.consignment(), "176-00011122DXBCMB/T12K250.3");
    }

    #[test]
    fn writes_weight_unit_of_rate_line() {
        let mut form = ShipmentForm::default();
        form.identifiers.prefix.set("176");
        form.identifiers.serial.set("00011122");
        form.identifiers.origin.set("JFK");
        form.identifiers.destination.set("CMB");
        let line = form.goods.rate_lines.get_mut(0).expect("line should exist");
        line.pieces.set("3");
        line.weight.set("551.2");
        line.unit = WeightUnit::Pounds;

        let fwb = Fwb::new(&form, &recompute(&form));

        assert_eq!(fwb.consignment(), "176-00011122JFKCMB/T3L551.2");
    }
}
