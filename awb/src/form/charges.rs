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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::Input;

/// Value restored into charge inputs when they are reset.
pub const DEFAULT_CHARGE: &str = "0.00";

/// The five charges shared by the prepaid and collection sections.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargeGroup {
    pub weight_charge: Input,
    pub valuation_charge: Input,
    pub tax: Input,
    /// Total other charges due agent.
    pub other_agent: Input,
    /// Total other charges due carrier.
    pub other_carrier: Input,
}

impl ChargeGroup {
    /// Returns the charges in the order they appear on the waybill.
    pub fn inputs(&self) -> [&Input; 5] {
        [
            &self.weight_charge,
            &self.valuation_charge,
            &self.tax,
            &self.other_agent,
            &self.other_carrier,
        ]
    }

    fn inputs_mut(&mut self) -> [&mut Input; 5] {
        [
            &mut self.weight_charge,
            &mut self.valuation_charge,
            &mut self.tax,
            &mut self.other_agent,
            &mut self.other_carrier,
        ]
    }

    pub fn clear(&mut self) {
        self.inputs_mut().into_iter().for_each(Input::clear);
    }

    /// Resets every charge to `0.00`.
    pub fn reset(&mut self) {
        self.inputs_mut()
            .into_iter()
            .for_each(|input| input.set(DEFAULT_CHARGE));
    }
}

/// The charges collected at destination.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollectionCharges {
    pub charges: ChargeGroup,
    /// Charges at destination, in destination currency.
    pub at_destination: Input,
    /// CC charges in destination currency.
    pub cc_at_destination: Input,
}

impl CollectionCharges {
    pub fn clear(&mut self) {
        self.charges.clear();
        self.at_destination.clear();
        self.cc_at_destination.clear();
    }

    /// Resets every charge to `0.00`.
    pub fn reset(&mut self) {
        self.charges.reset();
        self.at_destination.set(DEFAULT_CHARGE);
        self.cc_at_destination.set(DEFAULT_CHARGE);
    }
}

/// Sections whose charges are replaced by "AS AGREED".
///
/// The flags are independent of each other.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsAgreed {
    pub prepaid: bool,
    pub collection: bool,
    pub conversion: bool,
}
