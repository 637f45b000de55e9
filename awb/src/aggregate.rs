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

//! Derived totals of a form.
//!
//! Every value in here is a pure function of the form's inputs. Totals are
//! always recomputed from scratch, nothing is accumulated across edits, and
//! no computation fails: blank or unparseable inputs read as zero (see
//! [`Input`]).
//!
//! [`Input`]: crate::Input

use log::{debug, trace};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::form::{
    ChargeGroup, CollectionCharges, DimensionLine, PaymentView, RateLine, ShipmentForm,
};

/// Decimal places of charges and amounts.
pub const CHARGE_DP: u32 = 2;
/// Decimal places of weights.
pub const WEIGHT_DP: u32 = 1;
/// Decimal places of volumes in CBM.
pub const VOLUME_DP: u32 = 3;

const CUBIC_CM_PER_CBM: i64 = 1_000_000;

/// Rounds half away from zero like the printed figures on a waybill.
pub fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the chargeable weight times the rate or charge.
///
/// ```
/// # use awb::aggregate::rate_line_total;
/// # use awb::form::RateLine;
/// # use rust_decimal::Decimal;
/// let mut line = RateLine::default();
/// line.chargeable_weight.set("10.5");
/// line.rate.set("5.00");
/// assert_eq!(rate_line_total(&line), Decimal::new(5250, 2));
/// ```
pub fn rate_line_total(line: &RateLine) -> Decimal {
    let chargeable_weight = line.chargeable_weight.as_decimal();
    let rate = line.rate.as_decimal();
    round(chargeable_weight.saturating_mul(rate), CHARGE_DP)
}

/// Totals of the rate description.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GoodsTotals {
    pub pieces: u32,
    /// Gross weight with one decimal.
    pub weight: Decimal,
    /// Sum of the line totals with two decimals.
    pub charge: Decimal,
}

/// Sums the pieces, gross weight and line totals of all rate lines.
pub fn goods_totals(lines: &[RateLine]) -> GoodsTotals {
    let totals = lines
        .iter()
        .fold(GoodsTotals::default(), |totals, line| GoodsTotals {
            pieces: totals.pieces.saturating_add(line.pieces.as_count()),
            weight: totals.weight.saturating_add(line.weight.as_decimal()),
            charge: totals.charge.saturating_add(rate_line_total(line)),
        });

    GoodsTotals {
        pieces: totals.pieces,
        weight: round(totals.weight, WEIGHT_DP),
        charge: round(totals.charge, CHARGE_DP),
    }
}

/// Returns the volume of the line in CBM.
///
/// The measures are in centimeters thus the volume is the product of the
/// measures and pieces divided by 1,000,000.
pub fn dimension_volume(line: &DimensionLine) -> Decimal {
    let cubic_cm = [&line.length, &line.width, &line.height]
        .into_iter()
        .fold(Decimal::from(line.pieces.as_count()), |product, measure| {
            product.saturating_mul(measure.as_decimal())
        });

    round(cubic_cm / Decimal::from(CUBIC_CM_PER_CBM), VOLUME_DP)
}

/// Sums the volumes of all dimension lines.
pub fn total_volume(lines: &[DimensionLine]) -> Decimal {
    let total = lines
        .iter()
        .map(dimension_volume)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    round(total, VOLUME_DP)
}

/// Sums weight charge, valuation charge, tax and the other charges due agent
/// and carrier.
pub fn charge_total(charges: &ChargeGroup) -> Decimal {
    let total = charges
        .inputs()
        .into_iter()
        .map(|input| input.as_decimal())
        .fold(Decimal::ZERO, Decimal::saturating_add);
    round(total, CHARGE_DP)
}

/// Returns the collection's charge total plus the charges at destination and
/// the CC charges.
pub fn collect_charges_total(collection: &CollectionCharges) -> Decimal {
    let total = charge_total(&collection.charges)
        .saturating_add(collection.at_destination.as_decimal())
        .saturating_add(collection.cc_at_destination.as_decimal());
    round(total, CHARGE_DP)
}

/// Converts the `base` amount with the `rate`.
pub fn converted_amount(base: Decimal, rate: Decimal) -> Decimal {
    round(base.saturating_mul(rate), CHARGE_DP)
}

/// All derived values of a form.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aggregates {
    /// Total of each rate line in the order of the lines.
    pub line_totals: Vec<Decimal>,
    pub goods: GoodsTotals,
    /// Volume of each dimension line in the order of the lines.
    pub line_volumes: Vec<Decimal>,
    pub total_volume: Decimal,
    pub total_prepaid: Decimal,
    pub total_collection: Decimal,
    /// Collection total including the charges at destination.
    pub total_collect_charges: Decimal,
    /// The rate used for the conversion.
    pub conversion_rate: Decimal,
    /// The total of the active payment view in destination currency.
    pub converted_amount: Decimal,
}

/// Returns the total that is converted into destination currency.
///
/// The prepaid total is converted unless only the collection is shown, in
/// which case the collect charges total including destination charges is
/// converted.
pub fn conversion_base(
    view: PaymentView,
    total_prepaid: Decimal,
    total_collect: Decimal,
) -> Decimal {
    match view {
        PaymentView::Collection => total_collect,
        PaymentView::Prepaid | PaymentView::Both => total_prepaid,
    }
}

/// Recomputes all derived values of the form.
///
/// Sections in AS AGREED mode total to zero regardless of their inputs. A
/// blank or unparseable conversion rate reads as `1`.
pub fn recompute(form: &ShipmentForm) -> Aggregates {
    let rate_lines = form.goods.rate_lines.lines();
    let dimension_lines = form.dimensions.lines();

    let line_totals: Vec<Decimal> = rate_lines.iter().map(rate_line_total).collect();
    let line_volumes: Vec<Decimal> = dimension_lines.iter().map(dimension_volume).collect();
    trace!("line totals {line_totals:?}, line volumes {line_volumes:?}");

    let total_prepaid = if form.as_agreed.prepaid {
        Decimal::ZERO
    } else {
        charge_total(&form.prepaid)
    };

    let (total_collection, total_collect_charges) = if form.as_agreed.collection {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            charge_total(&form.collection.charges),
            collect_charges_total(&form.collection),
        )
    };

    let conversion_rate = form
        .currency
        .conversion_rate
        .try_decimal()
        .unwrap_or(Decimal::ONE);

    let converted_amount = if form.as_agreed.conversion {
        Decimal::ZERO
    } else {
        converted_amount(
            conversion_base(form.view, total_prepaid, total_collect_charges),
            conversion_rate,
        )
    };

    let aggregates = Aggregates {
        goods: goods_totals(rate_lines),
        total_volume: total_volume(dimension_lines),
        line_totals,
        line_volumes,
        total_prepaid,
        total_collection,
        total_collect_charges,
        conversion_rate,
        converted_amount,
    };

    debug!(
        "recomputed: pieces={}, weight={}, charge={}, volume={}, \
         prepaid={}, collect={}, converted={}",
        aggregates.goods.pieces,
        aggregates.goods.weight,
        aggregates.goods.charge,
        aggregates.total_volume,
        aggregates.total_prepaid,
        aggregates.total_collect_charges,
        aggregates.converted_amount,
    );

    aggregates
}
