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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::form::{ChargeField, FieldKey, RateField};

/// Identifies a slot of the waybill layout.
///
/// Slots display as the name of the layout position they are printed at.
/// Line and routing numbers are 1-based. The AWB number is printed twice more
/// at the copy positions `0` and `1`.
///
/// ```
/// # use awb::preview::SlotId;
/// # use awb::form::{ChargeField, RateField};
/// assert_eq!(SlotId::AwbPrefix.to_string(), "field-1a");
/// assert_eq!(SlotId::AwbSerialCopy(1).to_string(), "field-1b-copy-1");
/// assert_eq!(SlotId::Rate(1, RateField::ChargeableWeight).to_string(), "rate-charge-weight-1");
/// assert_eq!(SlotId::Prepaid(ChargeField::Tax).to_string(), "field-tax-pp");
/// assert_eq!(SlotId::Dimension(3).to_string(), "dim-line-preview-3");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlotId {
    AwbPrefix,
    AwbSerial,
    Origin,
    Destination,
    AwbPrefixCopy(usize),
    Hyphen(usize),
    AwbSerialCopy(usize),
    Shipper,
    ShipperAccount,
    Consignee,
    ConsigneeAccount,
    AgentName,
    AgentIata,
    AgentAccount,
    AccountingInfo,
    RoutingTo(usize),
    RoutingBy(usize),
    FlightDate,
    Flight,
    TotalPieces,
    TotalWeight,
    TotalCharge,
    Rate(usize, RateField),
    RateTotal(usize),
    Dimension(usize),
    TotalVolume,
    GoodsDescription,
    Currency,
    PaymentType,
    ValueForCarriage,
    ValueForCustoms,
    Prepaid(ChargeField),
    TotalPrepaid,
    Collection(ChargeField),
    CcCharges,
    DestinationCharges,
    TotalCollection,
    TotalCollectCharges,
    ConversionRate,
    ConvertedAmount,
    HandlingInfo,
}

fn charge_name(field: &ChargeField) -> &'static str {
    match field {
        ChargeField::WeightCharge => "weight-charge",
        ChargeField::ValuationCharge => "valuation-charge",
        ChargeField::Tax => "tax",
        ChargeField::OtherAgent => "other-agent",
        ChargeField::OtherCarrier => "other-carrier",
    }
}

/// Writes the name of a repeated position which is unnumbered the first time.
fn write_copy(f: &mut fmt::Formatter<'_>, name: &str, n: usize) -> fmt::Result {
    match n {
        0 => f.write_str(name),
        n => write!(f, "{name}-{n}"),
    }
}

/// Writes the routing position where every leg takes two letters starting at
/// `a` for the first airport.
fn write_routing(f: &mut fmt::Formatter<'_>, n: usize, offset: u8) -> fmt::Result {
    let letter = n
        .checked_sub(1)
        .and_then(|i| u8::try_from(i * 2).ok())
        .and_then(|i| i.checked_add(b'a' + offset))
        .filter(u8::is_ascii_lowercase)
        .map(char::from);

    match letter {
        Some(letter) => write!(f, "field-11{letter}"),
        None => write!(f, "field-11-{n}"),
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwbPrefix => f.write_str("field-1a"),
            Self::AwbSerial => f.write_str("field-1b"),
            Self::Origin => f.write_str("field-1"),
            Self::Destination => f.write_str("field-18"),
            Self::AwbPrefixCopy(n) => write_copy(f, "field-1a-copy", *n),
            Self::Hyphen(n) => write_copy(f, "field-hyphen", *n),
            Self::AwbSerialCopy(n) => write_copy(f, "field-1b-copy", *n),
            Self::Shipper => f.write_str("field-3"),
            Self::ShipperAccount => f.write_str("field-3a"),
            Self::Consignee => f.write_str("field-5"),
            Self::ConsigneeAccount => f.write_str("field-5a"),
            Self::AgentName => f.write_str("field-6"),
            Self::AgentIata => f.write_str("field-7"),
            Self::AgentAccount => f.write_str("field-8"),
            Self::AccountingInfo => f.write_str("field-10"),
            Self::RoutingTo(n) => write_routing(f, *n, 0),
            Self::RoutingBy(n) => write_routing(f, *n, 1),
            Self::FlightDate => f.write_str("field-19a"),
            Self::Flight => f.write_str("field-19b"),
            Self::TotalPieces => f.write_str("field-22j"),
            Self::TotalWeight => f.write_str("field-22k"),
            Self::TotalCharge => f.write_str("field-22l"),
            // rate slots are named like the inputs they show
            Self::Rate(n, field) => fmt::Display::fmt(&FieldKey::Rate(*n, *field), f),
            Self::RateTotal(n) => write!(f, "rate-total-{n}"),
            Self::Dimension(n) => write!(f, "dim-line-preview-{n}"),
            Self::TotalVolume => f.write_str("dimension-total-display"),
            Self::GoodsDescription => f.write_str("field-22i"),
            Self::Currency => f.write_str("field-currency"),
            Self::PaymentType => f.write_str("field-payment-type"),
            Self::ValueForCarriage => f.write_str("field-13a"),
            Self::ValueForCustoms => f.write_str("field-13b"),
            Self::Prepaid(field) => write!(f, "field-{}-pp", charge_name(field)),
            Self::TotalPrepaid => f.write_str("field-total-prepaid"),
            Self::Collection(field) => write!(f, "field-{}-col", charge_name(field)),
            Self::CcCharges => f.write_str("field-cc-charges"),
            Self::DestinationCharges => f.write_str("field-dest-charges"),
            Self::TotalCollection => f.write_str("field-total-collection"),
            Self::TotalCollectCharges => f.write_str("field-total-collect-charges"),
            Self::ConversionRate => f.write_str("field-conversion-rate"),
            Self::ConvertedAmount => f.write_str("field-converted-amount"),
            Self::HandlingInfo => f.write_str("field-15"),
        }
    }
}
