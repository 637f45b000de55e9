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

use super::Tab;
use crate::error::Error;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartyField {
    Name,
    Address,
    City,
    Country,
    Account,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChargeField {
    WeightCharge,
    ValuationCharge,
    Tax,
    OtherAgent,
    OtherCarrier,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RateField {
    Pieces,
    Weight,
    Unit,
    RateClass,
    Commodity,
    ChargeableWeight,
    Rate,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DimensionField {
    Pieces,
    Length,
    Width,
    Height,
}

/// Key of an editable field of the [`ShipmentForm`].
///
/// Keys are written the way the form's inputs are named, e.g.
/// `"shipper-name"` or `"weight-charge-pp"`. Fields of a line carry the
/// 1-based line number: `"rate-pieces-1"` or `"dim-length-2"`.
///
/// ```
/// # use awb::form::{FieldKey, PartyField, DimensionField};
/// let key: FieldKey = "shipper-city".parse()?;
/// assert_eq!(key, FieldKey::Shipper(PartyField::City));
///
/// let key: FieldKey = "dim-height-3".parse()?;
/// assert_eq!(key, FieldKey::Dimension(3, DimensionField::Height));
/// assert_eq!(key.to_string(), "dim-height-3");
/// # Ok::<(), awb::Error>(())
/// ```
///
/// [`ShipmentForm`]: super::ShipmentForm
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldKey {
    AwbPrefix,
    AwbSerial,
    Origin,
    Destination,
    Carrier,
    FlightNumber,
    FlightDate,
    Shipper(PartyField),
    Consignee(PartyField),
    AgentName,
    AgentIata,
    AgentAccount,
    AccountingInfo,
    /// Airport of the 1-based routing leg.
    RoutingTo(usize),
    /// Carrier of the 1-based routing leg.
    RoutingBy(usize),
    GoodsDescription,
    ValueForCarriage,
    ValueForCustoms,
    HandlingInfo,
    Prepaid(ChargeField),
    Collection(ChargeField),
    ChargesAtDestination,
    CcChargesAtDestination,
    OriginCurrency,
    DestinationCurrency,
    ConversionRate,
    Rate(usize, RateField),
    Dimension(usize, DimensionField),
}

use FieldKey::*;

const NAMED_KEYS: &[(&str, FieldKey)] = &[
    ("awb-number-1a", AwbPrefix),
    ("awb-number-1b", AwbSerial),
    ("origin-iata", Origin),
    ("destination-iata", Destination),
    ("carrier-code", Carrier),
    ("flight-number", FlightNumber),
    ("flight-date", FlightDate),
    ("shipper-name", Shipper(PartyField::Name)),
    ("shipper-address", Shipper(PartyField::Address)),
    ("shipper-city", Shipper(PartyField::City)),
    ("shipper-country", Shipper(PartyField::Country)),
    ("shipper-account", Shipper(PartyField::Account)),
    ("consignee-name", Consignee(PartyField::Name)),
    ("consignee-address", Consignee(PartyField::Address)),
    ("consignee-city", Consignee(PartyField::City)),
    ("consignee-country", Consignee(PartyField::Country)),
    ("consignee-account", Consignee(PartyField::Account)),
    ("agent-name", AgentName),
    ("agent-iata", AgentIata),
    ("agent-account", AgentAccount),
    ("accounting-info", AccountingInfo),
    ("routing-to1", RoutingTo(1)),
    ("routing-by1", RoutingBy(1)),
    ("routing-to2", RoutingTo(2)),
    ("routing-by2", RoutingBy(2)),
    ("routing-to3", RoutingTo(3)),
    ("routing-by3", RoutingBy(3)),
    ("goods-description", GoodsDescription),
    ("value-carriage", ValueForCarriage),
    ("value-customs", ValueForCustoms),
    ("handling-info", HandlingInfo),
    ("weight-charge-pp", Prepaid(ChargeField::WeightCharge)),
    ("valuation-charge-pp", Prepaid(ChargeField::ValuationCharge)),
    ("tax-pp", Prepaid(ChargeField::Tax)),
    ("other-charges-agent-pp", Prepaid(ChargeField::OtherAgent)),
    ("other-charges-carrier-pp", Prepaid(ChargeField::OtherCarrier)),
    ("weight-charge-col", Collection(ChargeField::WeightCharge)),
    ("valuation-charge-col", Collection(ChargeField::ValuationCharge)),
    ("tax-col", Collection(ChargeField::Tax)),
    ("other-charges-agent-col", Collection(ChargeField::OtherAgent)),
    ("other-charges-carrier-col", Collection(ChargeField::OtherCarrier)),
    ("charges-at-destination", ChargesAtDestination),
    ("cc-charges-dest", CcChargesAtDestination),
    ("currency-code", OriginCurrency),
    ("destination-currency", DestinationCurrency),
    ("conversion-rate", ConversionRate),
];

const RATE_FIELDS: [(&str, RateField); 7] = [
    ("pieces", RateField::Pieces),
    ("weight", RateField::Weight),
    ("unit", RateField::Unit),
    ("class", RateField::RateClass),
    ("commodity", RateField::Commodity),
    ("charge-weight", RateField::ChargeableWeight),
    ("charge", RateField::Rate),
];

const DIMENSION_FIELDS: [(&str, DimensionField); 4] = [
    ("pieces", DimensionField::Pieces),
    ("length", DimensionField::Length),
    ("width", DimensionField::Width),
    ("height", DimensionField::Height),
];

impl FieldKey {
    /// Returns all keys that are not part of a line.
    pub fn named() -> impl Iterator<Item = FieldKey> {
        NAMED_KEYS.iter().map(|(_, key)| *key)
    }

    /// The tab on which the field is edited.
    pub fn tab(&self) -> Tab {
        match self {
            AwbPrefix | AwbSerial | Origin | Destination | Carrier | FlightNumber
            | FlightDate => Tab::Shipment,
            Shipper(_) | Consignee(_) | AgentName | AgentIata | AgentAccount
            | AccountingInfo => Tab::Parties,
            RoutingTo(_) | RoutingBy(_) => Tab::Routing,
            GoodsDescription | ValueForCarriage | ValueForCustoms | HandlingInfo | Rate(..)
            | Dimension(..) => Tab::Goods,
            Prepaid(_)
            | Collection(_)
            | ChargesAtDestination
            | CcChargesAtDestination
            | OriginCurrency
            | DestinationCurrency
            | ConversionRate => Tab::Charges,
        }
    }
}

/// Splits `"charge-weight-12"` into the field name and the 1-based line
/// number.
fn split_line_number(s: &str) -> Option<(&str, usize)> {
    let (name, number) = s.rsplit_once('-')?;
    let number: usize = number.parse().ok()?;
    (number > 0).then_some((name, number))
}

fn find<T: Copy>(fields: &[(&str, T)], name: &str) -> Option<T> {
    fields.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

fn name_of<T: PartialEq>(fields: &[(&'static str, T)], field: &T) -> &'static str {
    fields
        .iter()
        .find(|(_, f)| f == field)
        .map(|(n, _)| *n)
        .unwrap_or_default()
}

impl FromStr for FieldKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();

        if let Some(key) = find(NAMED_KEYS, key) {
            return Ok(key);
        }

        let line_key = if let Some(rest) = key.strip_prefix("rate-") {
            split_line_number(rest)
                .and_then(|(name, n)| find(&RATE_FIELDS, name).map(|field| Rate(n, field)))
        } else if let Some(rest) = key.strip_prefix("dim-") {
            split_line_number(rest).and_then(|(name, n)| {
                find(&DIMENSION_FIELDS, name).map(|field| Dimension(n, field))
            })
        } else {
            None
        };

        line_key.ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate(n, field) => write!(f, "rate-{}-{n}", name_of(&RATE_FIELDS, field)),
            Dimension(n, field) => write!(f, "dim-{}-{n}", name_of(&DIMENSION_FIELDS, field)),
            key => f.write_str(name_of(NAMED_KEYS, key)),
        }
    }
}
