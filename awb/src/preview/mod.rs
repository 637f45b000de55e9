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

//! Print preview of the waybill.
//!
//! The preview is a projection of a [`ShipmentForm`] and its [`Aggregates`]
//! onto the positions of the paper layout. Every position is a [`Slot`] that
//! is identified by a [`SlotId`] and holds the text printed at it. The
//! preview is always rendered as a whole and holds no state of its own.
//!
//! Charges are shown for the sections of the form's [`PaymentView`]. A
//! section in AS AGREED mode replaces every of its slots, including the
//! totals, by `AS AGREED`.
//!
//! [`PaymentView`]: crate::form::PaymentView

use std::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregates, CHARGE_DP, VOLUME_DP, WEIGHT_DP};
use crate::config::FormConfig;
use crate::currency;
use crate::form::{ChargeField, ChargeGroup, RateField, ShipmentForm, DEFAULT_CHARGE};

pub mod format;
mod slot;

pub use slot::SlotId;

use format::{amount, fixed};

/// Text of every slot whose section is in AS AGREED mode.
pub const AS_AGREED: &str = "AS AGREED";

const PREFIX_PLACEHOLDER: &str = "618";
const SERIAL_PLACEHOLDER: &str = "12345675";
const ORIGIN_PLACEHOLDER: &str = "ORG";
const DESTINATION_PLACEHOLDER: &str = "DST";
const SHIPPER_PLACEHOLDER: &str = "Shipper Name and Address";
const CONSIGNEE_PLACEHOLDER: &str = "Consignee Name and Address";
const RATE_PLACEHOLDER: &str = "1.00";

/// Number of times the AWB number is repeated besides the header.
const AWB_NUMBER_COPIES: usize = 2;

const CHARGE_FIELDS: [ChargeField; 5] = [
    ChargeField::WeightCharge,
    ChargeField::ValuationCharge,
    ChargeField::Tax,
    ChargeField::OtherAgent,
    ChargeField::OtherCarrier,
];

/// A position of the waybill and its printed text.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub id: SlotId,
    pub content: String,
    /// Whether the content is replaced because the section is AS AGREED.
    pub as_agreed: bool,
}

/// The rendered preview.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preview {
    slots: Vec<Slot>,
}

impl Preview {
    /// Returns the slot if it's part of the preview.
    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// Returns the text of the slot.
    ///
    /// ```
    /// # use awb::aggregate::recompute;
    /// # use awb::form::ShipmentForm;
    /// # use awb::preview::{render, SlotId};
    /// let form = ShipmentForm::default();
    /// let preview = render(&form, &recompute(&form));
    ///
    /// assert_eq!(preview.content(SlotId::AwbPrefix), Some("618"));
    /// assert_eq!(preview.content(SlotId::TotalVolume), Some("0.000 CBM"));
    /// ```
    pub fn content(&self, id: SlotId) -> Option<&str> {
        self.get(id).map(|slot| slot.content.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn push<S: Into<String>>(&mut self, id: SlotId, content: S) {
        self.slots.push(Slot {
            id,
            content: content.into(),
            as_agreed: false,
        });
    }

    fn push_as_agreed(&mut self, id: SlotId) {
        self.slots.push(Slot {
            id,
            content: AS_AGREED.to_string(),
            as_agreed: true,
        });
    }
}

impl<'a> IntoIterator for &'a Preview {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            writeln!(f, "{}: {}", slot.id, slot.content.escape_debug())?;
        }
        Ok(())
    }
}

/// Renders the preview with the display limits of the default configuration.
pub fn render(form: &ShipmentForm, aggregates: &Aggregates) -> Preview {
    render_with(&FormConfig::default(), form, aggregates)
}

/// Renders the preview of the form.
///
/// Only the first lines up to the `config`'s display limits are printed.
/// Totals are always those of all lines.
pub fn render_with(config: &FormConfig, form: &ShipmentForm, aggregates: &Aggregates) -> Preview {
    let mut preview = Preview::default();

    let origin_symbol = currency::symbol(form.currency.origin.as_str().trim());
    let destination_symbol = currency::symbol(form.currency.destination.as_str().trim());

    // header
    let ids = &form.identifiers;
    let prefix = ids.prefix.or(PREFIX_PLACEHOLDER);
    let serial = ids.serial.or(SERIAL_PLACEHOLDER);
    preview.push(SlotId::AwbPrefix, prefix);
    preview.push(SlotId::AwbSerial, serial);
    preview.push(SlotId::Origin, ids.origin.or(ORIGIN_PLACEHOLDER));
    preview.push(SlotId::Destination, ids.destination.or(DESTINATION_PLACEHOLDER));

    for n in 0..AWB_NUMBER_COPIES {
        preview.push(SlotId::AwbPrefixCopy(n), prefix);
        preview.push(SlotId::Hyphen(n), "-");
        preview.push(SlotId::AwbSerialCopy(n), serial);
    }

    // parties
    preview.push(SlotId::Shipper, format::party_block(&form.shipper, SHIPPER_PLACEHOLDER));
    preview.push(SlotId::ShipperAccount, form.shipper.account.as_str());
    preview.push(
        SlotId::Consignee,
        format::party_block(&form.consignee, CONSIGNEE_PLACEHOLDER),
    );
    preview.push(SlotId::ConsigneeAccount, form.consignee.account.as_str());
    preview.push(SlotId::AgentName, form.agent.name.as_str());
    preview.push(SlotId::AgentIata, form.agent.iata_code.as_str());
    preview.push(SlotId::AgentAccount, form.agent.account.as_str());
    preview.push(SlotId::AccountingInfo, form.agent.accounting_info.as_str());

    for (n, leg) in (1..).zip(&form.routing) {
        preview.push(SlotId::RoutingTo(n), leg.to.as_str());
        preview.push(SlotId::RoutingBy(n), leg.by.as_str());
    }

    preview.push(SlotId::FlightDate, format::flight_date(&ids.flight_date));
    preview.push(
        SlotId::Flight,
        format!("{}{}", ids.carrier.as_str().trim(), ids.flight_number.as_str().trim()),
    );

    // goods
    preview.push(SlotId::TotalPieces, aggregates.goods.pieces.to_string());
    preview.push(SlotId::TotalWeight, fixed(aggregates.goods.weight, WEIGHT_DP));
    preview.push(SlotId::TotalCharge, fixed(aggregates.goods.charge, CHARGE_DP));

    let rate_lines = form.goods.rate_lines.iter().enumerate();
    for (i, line) in rate_lines.take(config.rate_line_display()) {
        let n = i + 1;
        let total = aggregates.line_totals.get(i).copied().unwrap_or_default();
        preview.push(SlotId::Rate(n, RateField::Pieces), line.pieces.or("0"));
        preview.push(SlotId::Rate(n, RateField::Weight), line.weight.or("0.0"));
        preview.push(SlotId::Rate(n, RateField::Unit), line.unit.code());
        preview.push(SlotId::Rate(n, RateField::RateClass), line.rate_class.code());
        preview.push(SlotId::Rate(n, RateField::Commodity), line.commodity().as_str());
        preview.push(
            SlotId::Rate(n, RateField::ChargeableWeight),
            line.chargeable_weight.or("0.0"),
        );
        preview.push(SlotId::Rate(n, RateField::Rate), line.rate.or("0.00"));
        preview.push(SlotId::RateTotal(n), fixed(total, CHARGE_DP));
    }

    let dimension_lines = form.dimensions.iter().enumerate();
    for (i, line) in dimension_lines.take(config.dimension_line_display()) {
        preview.push(
            SlotId::Dimension(i + 1),
            format!(
                "{}x{}x{}cm = {} pcs,",
                line.length.or("0.0"),
                line.width.or("0.0"),
                line.height.or("0.0"),
                line.pieces.or("0"),
            ),
        );
    }
    preview.push(
        SlotId::TotalVolume,
        format!("{} CBM", fixed(aggregates.total_volume, VOLUME_DP)),
    );

    preview.push(SlotId::GoodsDescription, form.goods.description.as_str());
    preview.push(SlotId::Currency, form.currency.origin.as_str());
    preview.push(SlotId::PaymentType, form.view.payment_type());
    preview.push(
        SlotId::ValueForCarriage,
        form.goods.value_for_carriage.or(config.value_for_carriage()),
    );
    preview.push(
        SlotId::ValueForCustoms,
        form.goods.value_for_customs.or(config.value_for_customs()),
    );

    // charges
    if form.view.shows_prepaid() {
        if form.as_agreed.prepaid {
            CHARGE_FIELDS
                .into_iter()
                .map(SlotId::Prepaid)
                .chain([SlotId::TotalPrepaid])
                .for_each(|id| preview.push_as_agreed(id));
        } else {
            push_charges(&mut preview, SlotId::Prepaid, &form.prepaid, origin_symbol);
            preview.push(
                SlotId::TotalPrepaid,
                amount(origin_symbol, fixed(aggregates.total_prepaid, CHARGE_DP)),
            );
        }
    }

    if form.view.shows_collection() {
        let collection = &form.collection;
        if form.as_agreed.collection {
            CHARGE_FIELDS
                .into_iter()
                .map(SlotId::Collection)
                .chain([
                    SlotId::CcCharges,
                    SlotId::DestinationCharges,
                    SlotId::TotalCollection,
                    SlotId::TotalCollectCharges,
                ])
                .for_each(|id| preview.push_as_agreed(id));
        } else {
            push_charges(&mut preview, SlotId::Collection, &collection.charges, origin_symbol);
            preview.push(
                SlotId::CcCharges,
                amount(destination_symbol, collection.cc_at_destination.or(DEFAULT_CHARGE)),
            );
            preview.push(
                SlotId::DestinationCharges,
                amount(destination_symbol, collection.at_destination.or(DEFAULT_CHARGE)),
            );
            preview.push(
                SlotId::TotalCollection,
                amount(origin_symbol, fixed(aggregates.total_collection, CHARGE_DP)),
            );
            preview.push(
                SlotId::TotalCollectCharges,
                amount(origin_symbol, fixed(aggregates.total_collect_charges, CHARGE_DP)),
            );
        }
    }

    if form.as_agreed.conversion {
        preview.push_as_agreed(SlotId::ConversionRate);
        preview.push_as_agreed(SlotId::ConvertedAmount);
    } else {
        preview.push(
            SlotId::ConversionRate,
            amount(origin_symbol, form.currency.conversion_rate.or(RATE_PLACEHOLDER)),
        );
        preview.push(
            SlotId::ConvertedAmount,
            amount(destination_symbol, fixed(aggregates.converted_amount, CHARGE_DP)),
        );
    }

    preview.push(SlotId::HandlingInfo, form.goods.handling_info.as_str());

    debug!("rendered {} preview slots", preview.len());
    preview
}

fn push_charges<F>(preview: &mut Preview, id: F, charges: &ChargeGroup, symbol: &str)
where
    F: Fn(ChargeField) -> SlotId,
{
    for (field, input) in CHARGE_FIELDS.into_iter().zip(charges.inputs()) {
        preview.push(id(field), amount(symbol, input.or(DEFAULT_CHARGE)));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::aggregate::recompute;
    use crate::form::{FieldKey, PaymentView};

    fn seeded_form() -> ShipmentForm {
        let config = FormConfig::default();
        let mut form = ShipmentForm::new(&config);
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).expect("date should be valid");
        form.seed_defaults(&config, today);
        form
    }

    fn preview_of(form: &ShipmentForm) -> Preview {
        render(form, &recompute(form))
    }

    #[test]
    fn renders_placeholders() {
        let preview = preview_of(&ShipmentForm::default());

        assert_eq!(preview.content(SlotId::AwbPrefix), Some("618"));
        assert_eq!(preview.content(SlotId::AwbSerialCopy(1)), Some("12345675"));
        assert_eq!(preview.content(SlotId::Hyphen(0)), Some("-"));
        assert_eq!(preview.content(SlotId::Origin), Some("ORG"));
        assert_eq!(preview.content(SlotId::Destination), Some("DST"));
        assert_eq!(preview.content(SlotId::Shipper), Some("Shipper Name and Address"));
        assert_eq!(preview.content(SlotId::Consignee), Some("Consignee Name and Address"));
        assert_eq!(preview.content(SlotId::FlightDate), Some(""));
        assert_eq!(preview.content(SlotId::ValueForCarriage), Some("NVD"));
        assert_eq!(preview.content(SlotId::ValueForCustoms), Some("NCV"));
        assert_eq!(preview.content(SlotId::Rate(1, RateField::Pieces)), Some("0"));
        assert_eq!(preview.content(SlotId::Rate(1, RateField::Unit)), Some("K"));
        assert_eq!(preview.content(SlotId::Rate(1, RateField::RateClass)), Some("C"));
        assert_eq!(preview.content(SlotId::Prepaid(ChargeField::Tax)), Some("$ 0.00"));
        assert_eq!(preview.content(SlotId::ConversionRate), Some("$ 1.00"));
    }

    #[test]
    fn renders_seeded_form() {
        let mut form = seeded_form();
        form.set(FieldKey::Shipper(crate::form::PartyField::Name), "ACME")
            .expect("field should be set");
        form.identifiers.carrier.set("UL");
        form.identifiers.flight_number.set("503");

        let preview = preview_of(&form);

        assert_eq!(preview.content(SlotId::FlightDate), Some("140326"));
        assert_eq!(preview.content(SlotId::Flight), Some("UL503"));
        assert_eq!(preview.content(SlotId::Shipper), Some("ACME\n\n, "));
        assert_eq!(preview.content(SlotId::Currency), Some("USD"));
        assert_eq!(preview.content(SlotId::PaymentType), Some("PP"));
        assert_eq!(preview.content(SlotId::ConvertedAmount), Some("Rs 0.00"));
    }

    #[test]
    fn renders_line_slots() {
        let mut form = seeded_form();
        let line = form.goods.rate_lines.get_mut(0).expect("line should exist");
        line.pieces.set("2");
        line.weight.set("10.5");
        line.chargeable_weight.set("10.5");
        line.rate.set("5.00");
        let dim = form.dimensions.get_mut(0).expect("line should exist");
        dim.pieces.set("3");
        dim.length.set("40");
        dim.width.set("30");
        dim.height.set("20");

        let preview = preview_of(&form);

        assert_eq!(preview.content(SlotId::RateTotal(1)), Some("52.50"));
        assert_eq!(preview.content(SlotId::TotalPieces), Some("2"));
        assert_eq!(preview.content(SlotId::TotalWeight), Some("10.5"));
        assert_eq!(preview.content(SlotId::TotalCharge), Some("52.50"));
        assert_eq!(preview.content(SlotId::Dimension(1)), Some("40x30x20cm = 3 pcs,"));
        assert_eq!(preview.content(SlotId::TotalVolume), Some("0.072 CBM"));
    }

    #[test]
    fn limits_displayed_lines() {
        let config = FormConfig::builder()
            .rate_line_limit(3)
            .dimension_line_display(2)
            .build();
        let mut form = ShipmentForm::new(&config);
        form.goods.rate_lines.add().expect("line should be added");
        for _ in 0..3 {
            form.dimensions.add().expect("line should be added");
        }

        let preview = render_with(&config, &form, &recompute(&form));

        assert!(preview.get(SlotId::RateTotal(1)).is_some());
        assert!(preview.get(SlotId::RateTotal(2)).is_none());
        assert!(preview.get(SlotId::Dimension(2)).is_some());
        assert!(preview.get(SlotId::Dimension(3)).is_none());
    }

    #[test]
    fn renders_sections_of_payment_view() {
        let mut form = seeded_form();

        let preview = preview_of(&form);
        assert!(preview.get(SlotId::TotalPrepaid).is_some());
        assert!(preview.get(SlotId::TotalCollection).is_none());

        form.view = PaymentView::Collection;
        let preview = preview_of(&form);
        assert!(preview.get(SlotId::TotalPrepaid).is_none());
        assert_eq!(preview.content(SlotId::CcCharges), Some("Rs 0.00"));
        assert_eq!(preview.content(SlotId::DestinationCharges), Some("Rs 0.00"));
        assert_eq!(preview.content(SlotId::TotalCollectCharges), Some("$ 0.00"));
        assert_eq!(preview.content(SlotId::PaymentType), Some("CC"));

        form.view = PaymentView::Both;
        let preview = preview_of(&form);
        assert!(preview.get(SlotId::TotalPrepaid).is_some());
        assert!(preview.get(SlotId::TotalCollection).is_some());
        assert_eq!(preview.content(SlotId::PaymentType), Some("PP/CC"));
    }

    #[test]
    fn renders_as_agreed_sections() {
        let mut form = seeded_form();
        form.view = PaymentView::Both;
        form.set_as_agreed_prepaid(true);
        form.set_as_agreed_conversion(true);

        let preview = preview_of(&form);

        let prepaid: Vec<&Slot> = preview
            .iter()
            .filter(|slot| matches!(slot.id, SlotId::Prepaid(_) | SlotId::TotalPrepaid))
            .collect();
        assert_eq!(prepaid.len(), 6);
        assert!(prepaid
            .iter()
            .all(|slot| slot.as_agreed && slot.content == AS_AGREED));

        assert_eq!(preview.content(SlotId::ConversionRate), Some(AS_AGREED));
        assert_eq!(preview.content(SlotId::ConvertedAmount), Some(AS_AGREED));
        assert_eq!(preview.content(SlotId::TotalCollection), Some("$ 0.00"));
        assert!(preview
            .iter()
            .filter(|slot| slot.as_agreed)
            .all(|slot| slot.content == AS_AGREED));
    }

    #[test]
    fn as_agreed_overrides_stored_charges() {
        let mut form = seeded_form();
        form.prepaid.weight_charge.set("52.50");
        form.prepaid.valuation_charge.set("10");
        form.prepaid.tax.set("7.5");
        form.prepaid.other_agent.set("3");
        form.prepaid.other_carrier.set("1.25");
        form.as_agreed.prepaid = true;

        let aggregates = recompute(&form);
        let preview = render(&form, &aggregates);

        assert_eq!(aggregates.total_prepaid, rust_decimal::Decimal::ZERO);
        let ids = CHARGE_FIELDS
            .into_iter()
            .map(SlotId::Prepaid)
            .chain([SlotId::TotalPrepaid]);
        for id in ids {
            let slot = preview.get(id).expect("prepaid slot should be rendered");
            assert_eq!(slot.content, AS_AGREED, "slot {id}");
            assert!(slot.as_agreed, "slot {id}");
        }
    }

    #[test]
    fn renders_currency_symbols() {
        let mut form = seeded_form();
        form.view = PaymentView::Both;
        form.currency.origin.set("EUR");
        form.currency.destination.set("XXX");
        form.prepaid.weight_charge.set("100.00");
        form.currency.conversion_rate.set("3.5");

        let preview = preview_of(&form);

        assert_eq!(preview.content(SlotId::Prepaid(ChargeField::WeightCharge)), Some("€ 100.00"));
        assert_eq!(preview.content(SlotId::TotalPrepaid), Some("€ 100.00"));
        assert_eq!(preview.content(SlotId::CcCharges), Some("$ 0.00"));
        assert_eq!(preview.content(SlotId::ConversionRate), Some("€ 3.5"));
        assert_eq!(preview.content(SlotId::ConvertedAmount), Some("$ 350.00"));
    }

    #[test]
    fn displays_slots_by_line() {
        let preview = preview_of(&ShipmentForm::default());
        let printed = preview.to_string();

        assert!(printed.starts_with("field-1a: 618\n"));
        assert!(printed.contains("field-3: Shipper Name and Address\n"));
        assert_eq!(printed.lines().count(), preview.len());
    }
}
