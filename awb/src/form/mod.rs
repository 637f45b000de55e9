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

//! The editable state of an Air Waybill.
//!
//! A [`ShipmentForm`] holds every input of the form as the raw text the user
//! typed. Nothing derived is stored here: totals, volumes and the converted
//! amount are computed by the [aggregator] and the printed waybill is rendered
//! by the [preview].
//!
//! [aggregator]: crate::aggregate
//! [preview]: crate::preview

use chrono::NaiveDate;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::{Error, Result};
use crate::field::Input;

mod charges;
mod collection;
mod key;
mod line;
mod view;

pub use charges::*;
pub use collection::{Line, LineCollection, LineKind};
pub use key::*;
pub use line::*;
pub use view::{PaymentView, Tab};

/// Number of routing legs on the waybill.
pub const ROUTING_LEGS: usize = 3;

/// Format of the flight date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// AWB number, airports and the flight.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identifiers {
    /// The 3-digit airline prefix.
    pub prefix: Input,
    /// The 8-digit serial number.
    pub serial: Input,
    /// IATA code of the airport of departure.
    pub origin: Input,
    /// IATA code of the airport of destination.
    pub destination: Input,
    pub carrier: Input,
    pub flight_number: Input,
    /// The flight date as ISO calendar date (`YYYY-MM-DD`).
    pub flight_date: Input,
}

/// Shipper or consignee.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Party {
    pub name: Input,
    pub address: Input,
    pub city: Input,
    pub country: Input,
    pub account: Input,
}

/// The issuing carrier's agent.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Agent {
    pub name: Input,
    pub iata_code: Input,
    pub account: Input,
    pub accounting_info: Input,
}

/// A routing leg to an airport by a carrier.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutingLeg {
    pub to: Input,
    pub by: Input,
}

/// Everything on the goods tab except the dimensions.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Goods {
    pub rate_lines: LineCollection<RateLine>,
    pub description: Input,
    pub value_for_carriage: Input,
    pub value_for_customs: Input,
    pub handling_info: Input,
}

/// Currencies of the charges and the conversion into destination currency.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencySettings {
    /// Currency code of the charges.
    pub origin: Input,
    /// Currency code at destination.
    pub destination: Input,
    pub conversion_rate: Input,
}

/// Value restored into the conversion rate when it is reset.
pub const DEFAULT_CONVERSION_RATE: &str = "1.00";

/// Resolves the text input addressed by a key as shared or mutable
/// reference.
///
/// Lines are looked up with `$get` (`get` or `get_mut`). Select fields have no
/// text input and resolve to an error.
macro_rules! resolve_input {
    ($form:ident, $key:expr, $get:ident $(, $m:tt)?) => {{
        let key: FieldKey = $key;
        let unknown = || Error::UnknownField(key.to_string());

        let input = match key {
            FieldKey::AwbPrefix => &$($m)? $form.identifiers.prefix,
            FieldKey::AwbSerial => &$($m)? $form.identifiers.serial,
            FieldKey::Origin => &$($m)? $form.identifiers.origin,
            FieldKey::Destination => &$($m)? $form.identifiers.destination,
            FieldKey::Carrier => &$($m)? $form.identifiers.carrier,
            FieldKey::FlightNumber => &$($m)? $form.identifiers.flight_number,
            FieldKey::FlightDate => &$($m)? $form.identifiers.flight_date,
            FieldKey::Shipper(field) | FieldKey::Consignee(field) => {
                let party = match key {
                    FieldKey::Shipper(_) => &$($m)? $form.shipper,
                    _ => &$($m)? $form.consignee,
                };
                match field {
                    PartyField::Name => &$($m)? party.name,
                    PartyField::Address => &$($m)? party.address,
                    PartyField::City => &$($m)? party.city,
                    PartyField::Country => &$($m)? party.country,
                    PartyField::Account => &$($m)? party.account,
                }
            }
            FieldKey::AgentName => &$($m)? $form.agent.name,
            FieldKey::AgentIata => &$($m)? $form.agent.iata_code,
            FieldKey::AgentAccount => &$($m)? $form.agent.account,
            FieldKey::AccountingInfo => &$($m)? $form.agent.accounting_info,
            FieldKey::RoutingTo(n) | FieldKey::RoutingBy(n) => {
                let leg = match n.checked_sub(1) {
                    Some(index) => $form.routing.$get(index).ok_or_else(unknown)?,
                    None => return Err(unknown()),
                };
                match key {
                    FieldKey::RoutingTo(_) => &$($m)? leg.to,
                    _ => &$($m)? leg.by,
                }
            }
            FieldKey::GoodsDescription => &$($m)? $form.goods.description,
            FieldKey::ValueForCarriage => &$($m)? $form.goods.value_for_carriage,
            FieldKey::ValueForCustoms => &$($m)? $form.goods.value_for_customs,
            FieldKey::HandlingInfo => &$($m)? $form.goods.handling_info,
            FieldKey::Prepaid(field) | FieldKey::Collection(field) => {
                let group = match key {
                    FieldKey::Prepaid(_) => &$($m)? $form.prepaid,
                    _ => &$($m)? $form.collection.charges,
                };
                match field {
                    ChargeField::WeightCharge => &$($m)? group.weight_charge,
                    ChargeField::ValuationCharge => &$($m)? group.valuation_charge,
                    ChargeField::Tax => &$($m)? group.tax,
                    ChargeField::OtherAgent => &$($m)? group.other_agent,
                    ChargeField::OtherCarrier => &$($m)? group.other_carrier,
                }
            }
            FieldKey::ChargesAtDestination => &$($m)? $form.collection.at_destination,
            FieldKey::CcChargesAtDestination => &$($m)? $form.collection.cc_at_destination,
            FieldKey::OriginCurrency => &$($m)? $form.currency.origin,
            FieldKey::DestinationCurrency => &$($m)? $form.currency.destination,
            FieldKey::ConversionRate => &$($m)? $form.currency.conversion_rate,
            FieldKey::Rate(n, field) => {
                let index = line_index(n, LineKind::Rate)?;
                let line = $form
                    .goods
                    .rate_lines
                    .$get(index)
                    .ok_or(Error::LineNotFound { kind: LineKind::Rate, index })?;
                match field {
                    RateField::Pieces => &$($m)? line.pieces,
                    RateField::Weight => &$($m)? line.weight,
                    RateField::Commodity => &$($m)? line.commodity,
                    RateField::ChargeableWeight => &$($m)? line.chargeable_weight,
                    RateField::Rate => &$($m)? line.rate,
                    RateField::Unit | RateField::RateClass => return Err(unknown()),
                }
            }
            FieldKey::Dimension(n, field) => {
                let index = line_index(n, LineKind::Dimension)?;
                let line = $form
                    .dimensions
                    .$get(index)
                    .ok_or(Error::LineNotFound { kind: LineKind::Dimension, index })?;
                match field {
                    DimensionField::Pieces => &$($m)? line.pieces,
                    DimensionField::Length => &$($m)? line.length,
                    DimensionField::Width => &$($m)? line.width,
                    DimensionField::Height => &$($m)? line.height,
                }
            }
        };

        Ok(input)
    }};
}

/// The complete editable state of an Air Waybill.
///
/// See the [module documentation](self) for details.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentForm {
    pub identifiers: Identifiers,
    pub shipper: Party,
    pub consignee: Party,
    pub agent: Agent,
    pub routing: [RoutingLeg; ROUTING_LEGS],
    pub goods: Goods,
    pub dimensions: LineCollection<DimensionLine>,
    pub prepaid: ChargeGroup,
    pub collection: CollectionCharges,
    pub currency: CurrencySettings,
    pub as_agreed: AsAgreed,
    pub view: PaymentView,
}

impl ShipmentForm {
    /// Creates an empty form with one rate and one dimension line.
    ///
    /// The line limits are taken from the `config`. Default values are only
    /// filled in by [`seed_defaults`](Self::seed_defaults).
    pub fn new(config: &FormConfig) -> Self {
        Self {
            identifiers: Identifiers::default(),
            shipper: Party::default(),
            consignee: Party::default(),
            agent: Agent::default(),
            routing: Default::default(),
            goods: Goods {
                rate_lines: LineCollection::new(config.rate_line_limit()),
                description: Input::default(),
                value_for_carriage: Input::default(),
                value_for_customs: Input::default(),
                handling_info: Input::default(),
            },
            dimensions: LineCollection::new(config.dimension_line_limit()),
            prepaid: ChargeGroup::default(),
            collection: CollectionCharges::default(),
            currency: CurrencySettings::default(),
            as_agreed: AsAgreed::default(),
            view: PaymentView::default(),
        }
    }

    /// Fills in the values a new form starts with.
    ///
    /// The flight date is set to `today`, declared values and currencies are
    /// taken from the `config`, charges are set to `0.00` and the conversion
    /// rate to `1.00`.
    pub fn seed_defaults(&mut self, config: &FormConfig, today: NaiveDate) {
        debug!("seeding form defaults (flight date {today})");
        self.seed_date_and_declared_values(config, today);
        self.currency.origin.set(config.origin_currency());
        self.currency.destination.set(config.destination_currency());
        self.reset_charges();
    }

    /// Seeds the flight date and declared values.
    pub(crate) fn seed_date_and_declared_values(&mut self, config: &FormConfig, today: NaiveDate) {
        self.identifiers
            .flight_date
            .set(today.format(DATE_FORMAT).to_string());
        self.goods.value_for_carriage.set(config.value_for_carriage());
        self.goods.value_for_customs.set(config.value_for_customs());
    }

    /// Resets the AS AGREED modes, all charges to `0.00` and the conversion
    /// rate to `1.00`.
    pub(crate) fn reset_charges(&mut self) {
        self.as_agreed = AsAgreed::default();
        self.prepaid.reset();
        self.collection.reset();
        self.currency.conversion_rate.set(DEFAULT_CONVERSION_RATE);
    }

    /// Sets the AS AGREED mode of the prepaid charges.
    ///
    /// Switching the mode on clears the prepaid charges whereas switching it
    /// off resets them to `0.00`.
    pub fn set_as_agreed_prepaid(&mut self, on: bool) {
        self.as_agreed.prepaid = on;
        if on {
            self.prepaid.clear();
        } else {
            self.prepaid.reset();
        }
    }

    /// Sets the AS AGREED mode of the collection charges.
    ///
    /// Switching the mode on clears the collection charges whereas switching
    /// it off resets them to `0.00`.
    pub fn set_as_agreed_collection(&mut self, on: bool) {
        self.as_agreed.collection = on;
        if on {
            self.collection.clear();
        } else {
            self.collection.reset();
        }
    }

    /// Sets the AS AGREED mode of the currency conversion.
    ///
    /// Switching the mode on clears the conversion rate whereas switching it
    /// off resets it to `1.00`.
    pub fn set_as_agreed_conversion(&mut self, on: bool) {
        self.as_agreed.conversion = on;
        if on {
            self.currency.conversion_rate.clear();
        } else {
            self.currency.conversion_rate.set(DEFAULT_CONVERSION_RATE);
        }
    }

    /// Returns the value of the field.
    ///
    /// Select fields return their option code.
    pub fn get(&self, key: FieldKey) -> Result<String> {
        match key {
            FieldKey::Rate(n, RateField::Unit) => Ok(self.rate_line(n)?.unit.to_string()),
            FieldKey::Rate(n, RateField::RateClass) => {
                Ok(self.rate_line(n)?.rate_class.to_string())
            }
            key => Ok(self.input(key)?.to_string()),
        }
    }

    /// Sets the field to the `value`.
    ///
    /// Returns an error if the key addresses a line that doesn't exist or if
    /// the value is not an option of a select field.
    pub fn set(&mut self, key: FieldKey, value: &str) -> Result<()> {
        trace!("set {key} = {value:?}");

        match key {
            FieldKey::Rate(n, RateField::Unit) => {
                self.rate_line_mut(n)?.unit = value.parse()?;
            }
            FieldKey::Rate(n, RateField::RateClass) => {
                self.rate_line_mut(n)?.rate_class = value.parse()?;
            }
            FieldKey::Rate(n, RateField::Commodity) => {
                self.rate_line_mut(n)?.set_commodity(value);
            }
            key => self.input_mut(key)?.set(value),
        }

        Ok(())
    }

    /// Clears every input of the `tab`.
    ///
    /// Lines are kept but their inputs are cleared. Select fields keep their
    /// option.
    pub fn clear_tab(&mut self, tab: Tab) {
        debug!("clearing {tab} tab");

        for key in FieldKey::named().filter(|key| key.tab() == tab) {
            if let Ok(input) = self.input_mut(key) {
                input.clear();
            }
        }

        if tab == Tab::Goods {
            self.goods.rate_lines.clear();
            self.dimensions.clear();
        }
    }

    fn rate_line(&self, n: usize) -> Result<&RateLine> {
        let index = line_index(n, LineKind::Rate)?;
        self.goods.rate_lines.get(index).ok_or(Error::LineNotFound {
            kind: LineKind::Rate,
            index,
        })
    }

    fn rate_line_mut(&mut self, n: usize) -> Result<&mut RateLine> {
        self.goods
            .rate_lines
            .try_get_mut(line_index(n, LineKind::Rate)?)
    }

    fn input(&self, key: FieldKey) -> Result<&Input> {
        resolve_input!(self, key, get)
    }

    fn input_mut(&mut self, key: FieldKey) -> Result<&mut Input> {
        resolve_input!(self, key, get_mut, mut)
    }
}

impl Default for ShipmentForm {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

/// Converts a 1-based line number into an index.
fn line_index(n: usize, kind: LineKind) -> Result<usize> {
    n.checked_sub(1)
        .ok_or(Error::LineNotFound { kind, index: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).expect("date should be valid")
    }

    fn seeded() -> ShipmentForm {
        let config = FormConfig::default();
        let mut form = ShipmentForm::new(&config);
        form.seed_defaults(&config, today());
        form
    }

    #[test]
    fn seeds_defaults() {
        let form = seeded();

        assert_eq!(form.identifiers.flight_date.as_str(), "2026-03-14");
        assert_eq!(form.goods.value_for_carriage.as_str(), "NVD");
        assert_eq!(form.goods.value_for_customs.as_str(), "NCV");
        assert_eq!(form.currency.origin.as_str(), "USD");
        assert_eq!(form.currency.destination.as_str(), "LKR");
        assert_eq!(form.currency.conversion_rate.as_str(), "1.00");
        assert_eq!(form.prepaid.tax.as_str(), "0.00");
        assert_eq!(form.collection.cc_at_destination.as_str(), "0.00");
        assert_eq!(form.goods.rate_lines.len(), 1);
        assert_eq!(form.dimensions.len(), 1);
    }

    #[test]
    fn sets_and_gets_fields_by_key() -> Result<()> {
        let mut form = seeded();

        form.set("shipper-name".parse()?, "ACME Exports")?;
        form.set("routing-by2".parse()?, "EK")?;
        form.set("other-charges-carrier-col".parse()?, "12.5")?;
        form.set("rate-class-1".parse()?, "Q")?;
        form.set("rate-commodity-1".parse()?, "999999")?;
        form.set("dim-width-1".parse()?, "30")?;

        assert_eq!(form.shipper.name.as_str(), "ACME Exports");
        assert_eq!(form.routing[1].by.as_str(), "EK");
        assert_eq!(form.collection.charges.other_carrier.as_str(), "12.5");
        assert_eq!(form.get("rate-class-1".parse()?)?, "Q");
        assert_eq!(form.get("rate-commodity-1".parse()?)?, "9999");
        assert_eq!(form.get("dim-width-1".parse()?)?, "30");
        Ok(())
    }

    #[test]
    fn rejects_missing_lines_and_bad_options() {
        let mut form = seeded();

        assert_eq!(
            form.set(FieldKey::Dimension(2, DimensionField::Pieces), "1"),
            Err(Error::LineNotFound {
                kind: LineKind::Dimension,
                index: 1
            })
        );
        assert!(form.set(FieldKey::Rate(1, RateField::Unit), "T").is_err());
        assert_eq!(form.goods.rate_lines.get(0).map(|l| l.unit), Some(WeightUnit::Kilograms));
    }

    #[test]
    fn as_agreed_clears_and_restores_charges() {
        let mut form = seeded();
        form.prepaid.weight_charge.set("52.50");

        form.set_as_agreed_prepaid(true);
        assert!(form.as_agreed.prepaid);
        assert!(form.prepaid.inputs().iter().all(|input| input.is_blank()));

        form.set_as_agreed_prepaid(false);
        assert!(!form.as_agreed.prepaid);
        assert!(form.prepaid.inputs().iter().all(|input| input.as_str() == "0.00"));

        form.set_as_agreed_conversion(true);
        assert!(form.currency.conversion_rate.is_blank());
        form.set_as_agreed_conversion(false);
        assert_eq!(form.currency.conversion_rate.as_str(), "1.00");
    }

    #[test]
    fn clears_only_the_tab() {
        let mut form = seeded();
        form.shipper.name.set("ACME Exports");
        form.goods.description.set("SPARE PARTS");

        form.clear_tab(Tab::Goods);

        assert!(form.goods.description.is_blank());
        assert!(form.goods.value_for_carriage.is_blank());
        assert_eq!(form.goods.rate_lines.len(), 1);
        assert_eq!(form.shipper.name.as_str(), "ACME Exports");
    }

    #[test]
    fn clears_every_field_of_the_tab() -> Result<()> {
        for tab in Tab::ALL {
            let mut form = seeded();
            for key in FieldKey::named() {
                form.set(key, "X")?;
            }

            form.clear_tab(tab);

            for key in FieldKey::named() {
                let expected = if key.tab() == tab { "" } else { "X" };
                assert_eq!(form.get(key)?, expected, "{key} after clearing {tab}");
            }
        }
        Ok(())
    }
}
