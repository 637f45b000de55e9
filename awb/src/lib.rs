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

//! Air Waybill form model with live totals and print preview.
//!
//! This crate provides the data entry side of an Air Waybill (AWB): a
//! [form] that holds the raw inputs of a shipment, the [aggregates] that are
//! derived from them and a [preview] that projects both onto the positions
//! of the paper waybill. Inputs are kept as typed and only read as numbers
//! when totals are computed, thus nothing the user types can fail a
//! computation.
//!
//! # Examples
//!
//! Most users will work with the [`Editor`] which evaluates the aggregates
//! and the preview after every change:
//!
//! ```
//! use awb::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let mut editor = Editor::new(FormConfig::default());
//!
//! // one rate line of 2 pieces with 10.5 kg charged at 5.00 per kg
//! editor.set("rate-pieces-1", "2")?;
//! editor.set("rate-weight-1", "10.5")?;
//! editor.set("rate-charge-weight-1", "10.5")?;
//! editor.set("rate-charge-1", "5.00")?;
//!
//! // and a dimension line of three 40x30x20 cm boxes
//! editor.set("dim-pieces-1", "3")?;
//! editor.set("dim-length-1", "40")?;
//! editor.set("dim-width-1", "30")?;
//! editor.set("dim-height-1", "20")?;
//!
//! let preview = editor.preview();
//! assert_eq!(preview.content(SlotId::TotalPieces), Some("2"));
//! assert_eq!(preview.content(SlotId::TotalWeight), Some("10.5"));
//! assert_eq!(preview.content(SlotId::TotalCharge), Some("52.50"));
//! assert_eq!(preview.content(SlotId::TotalVolume), Some("0.072 CBM"));
//! # Ok(())
//! # }
//! ```
//!
//! The form, aggregator and renderer can also be used on their own:
//!
//! ```
//! use awb::aggregate::recompute;
//! use awb::form::ShipmentForm;
//! use awb::preview::{render, SlotId};
//!
//! let mut form = ShipmentForm::default();
//! form.prepaid.weight_charge.set("100.00");
//! form.currency.conversion_rate.set("3.5");
//!
//! let aggregates = recompute(&form);
//! let preview = render(&form, &aggregates);
//!
//! assert_eq!(preview.content(SlotId::ConvertedAmount), Some("$ 350.00"));
//! ```
//!
//! [form]: crate::form
//! [aggregates]: crate::aggregate
//! [preview]: crate::preview

pub mod aggregate;
mod config;
pub mod currency;
mod editor;
mod error;
mod field;
pub mod form;
pub mod fwb;
pub mod preview;

pub use config::{FormConfig, FormConfigBuilder};
pub use editor::Editor;
pub use error::{Error, Result};
pub use field::Input;

pub mod prelude {
    pub use crate::aggregate::Aggregates;
    pub use crate::currency::Currency;
    pub use crate::form::{FieldKey, PaymentView, ShipmentForm, Tab};
    pub use crate::preview::{Preview, SlotId};
    pub use crate::{Editor, Error, FormConfig, FormConfigBuilder, Input};
}
