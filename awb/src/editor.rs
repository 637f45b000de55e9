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

//! Editing session of a waybill.
//!
//! [`Editor`] owns the form and everything derived from it. Every action
//! modifies the form and reevaluates the aggregates and the preview, whether
//! the action succeeds or not. Thus the aggregates and preview always match
//! the current form.

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::aggregate::{self, Aggregates};
use crate::config::FormConfig;
use crate::error::Result;
use crate::form::{FieldKey, PaymentView, ShipmentForm, Tab};
use crate::fwb::Fwb;
use crate::preview::{self, Preview};

/// `Editor` is the type that manages an editing session.
///
/// See the [module documentation](self) for details.
///
/// # Examples
///
/// ```
/// # use awb::prelude::*;
/// # fn main() -> Result<(), Error> {
/// let mut editor = Editor::new(FormConfig::default());
///
/// editor.set("rate-pieces-1", "2")?;
/// editor.set("rate-charge-weight-1", "10.5")?;
/// editor.set("rate-charge-1", "5.00")?;
///
/// assert_eq!(editor.preview().content(SlotId::RateTotal(1)), Some("52.50"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Editor {
    config: FormConfig,
    form: ShipmentForm,
    aggregates: Aggregates,
    preview: Preview,
    today: Option<NaiveDate>,
}

impl Editor {
    /// Creates a session with a form seeded with today's date.
    pub fn new(config: FormConfig) -> Self {
        Self::init(config, None)
    }

    /// Creates a session where `today` is used as date whenever the form is
    /// seeded.
    pub fn with_date(config: FormConfig, today: NaiveDate) -> Self {
        Self::init(config, Some(today))
    }

    fn init(config: FormConfig, today: Option<NaiveDate>) -> Self {
        let mut editor = Self {
            form: ShipmentForm::new(&config),
            config,
            aggregates: Aggregates::default(),
            preview: Preview::default(),
            today,
        };

        let today = editor.today();
        info!("new AWB editor session (flight date {today})");
        editor.form.seed_defaults(&editor.config, today);
        EvalPipeline::default().eval(&mut editor);
        editor
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn form(&self) -> &ShipmentForm {
        &self.form
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Returns the FWB message of the current form.
    pub fn fwb(&self) -> Fwb {
        Fwb::new(&self.form, &self.aggregates)
    }

    /// Modifies the [`ShipmentForm`].
    ///
    /// The form is reevaluated even if `f` fails.
    pub fn modify<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ShipmentForm) -> Result<T>,
    {
        let result = f(&mut self.form);
        EvalPipeline::default().eval(self);
        result
    }

    /// Returns the value of the field with the `key`.
    ///
    /// Returns an [`UnknownField`] error if no such field exists.
    ///
    /// [`UnknownField`]: crate::Error::UnknownField
    pub fn get(&self, key: &str) -> Result<String> {
        self.form.get(key.parse()?)
    }

    /// Sets the field with the `key` to the `value`.
    ///
    /// Returns an [`UnknownField`] error if no such field exists and an
    /// [`InvalidValue`] error if a select field has no such option.
    ///
    /// [`UnknownField`]: crate::Error::UnknownField
    /// [`InvalidValue`]: crate::Error::InvalidValue
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key: FieldKey = key.parse()?;
        self.modify(|form| form.set(key, value))
    }

    /// Adds a rate line and returns its index.
    pub fn add_rate_line(&mut self) -> Result<usize> {
        self.modify(|form| form.goods.rate_lines.add())
    }

    /// Removes the rate line at the `index`.
    pub fn remove_rate_line(&mut self, index: usize) -> Result<()> {
        self.modify(|form| form.goods.rate_lines.remove(index).map(|_| ()))
    }

    /// Adds a dimension line and returns its index.
    pub fn add_dimension_line(&mut self) -> Result<usize> {
        self.modify(|form| form.dimensions.add())
    }

    /// Removes the dimension line at the `index`.
    pub fn remove_dimension_line(&mut self, index: usize) -> Result<()> {
        self.modify(|form| form.dimensions.remove(index).map(|_| ()))
    }

    pub fn select_view(&mut self, view: PaymentView) {
        debug!("selecting {view:?} view");
        self.form.view = view;
        EvalPipeline::default().eval(self);
    }

    /// Toggles the AS AGREED mode of the prepaid charges and returns whether
    /// it's on.
    pub fn toggle_as_agreed_prepaid(&mut self) -> bool {
        let on = !self.form.as_agreed.prepaid;
        self.form.set_as_agreed_prepaid(on);
        EvalPipeline::default().eval(self);
        on
    }

    /// Toggles the AS AGREED mode of the collection charges and returns
    /// whether it's on.
    pub fn toggle_as_agreed_collection(&mut self) -> bool {
        let on = !self.form.as_agreed.collection;
        self.form.set_as_agreed_collection(on);
        EvalPipeline::default().eval(self);
        on
    }

    /// Toggles the AS AGREED mode of the conversion and returns whether it's
    /// on.
    pub fn toggle_as_agreed_conversion(&mut self) -> bool {
        let on = !self.form.as_agreed.conversion;
        self.form.set_as_agreed_conversion(on);
        EvalPipeline::default().eval(self);
        on
    }

    /// Clears the inputs of the `tab`.
    ///
    /// Clearing the charges resets all AS AGREED modes and the charges to
    /// `0.00` and the conversion rate to `1.00`.
    pub fn clear_tab(&mut self, tab: Tab) {
        self.form.clear_tab(tab);
        if tab == Tab::Charges {
            self.form.reset_charges();
        }
        EvalPipeline::default().eval(self);
    }

    /// Clears the inputs of all tabs.
    ///
    /// The AS AGREED modes are reset and the flight date and declared values
    /// are seeded again. The number of lines is kept.
    pub fn clear_all(&mut self) {
        info!("clearing all tabs");
        Tab::ALL.into_iter().for_each(|tab| self.form.clear_tab(tab));
        self.form.as_agreed = Default::default();

        let today = self.today();
        self.form.seed_date_and_declared_values(&self.config, today);
        EvalPipeline::default().eval(self);
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/////////////////////////////////////////////////////////////////////////////
// Evaluation pipeline
/////////////////////////////////////////////////////////////////////////////

/// Evaluates the editor in a defined order.
///
/// The preview depends on the aggregates, thus they are always evaluated
/// first. No stage can fail.
struct EvalPipeline {
    stages: [EvalStage; 2],
}

impl EvalPipeline {
    fn eval(self, editor: &mut Editor) {
        for stage in &self.stages {
            stage.eval(editor);
        }
    }
}

impl Default for EvalPipeline {
    fn default() -> Self {
        Self {
            stages: [EvalStage::Aggregate, EvalStage::Render],
        }
    }
}

#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy)]
enum EvalStage {
    Aggregate,
    Render,
}

impl EvalStage {
    fn eval(&self, editor: &mut Editor) {
        match self {
            EvalStage::Aggregate => {
                editor.aggregates = aggregate::recompute(&editor.form);
            }
            EvalStage::Render => {
                editor.preview =
                    preview::render_with(&editor.config, &editor.form, &editor.aggregates);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::Error;
    use crate::form::LineKind;
    use crate::preview::{SlotId, AS_AGREED};

    fn editor() -> Editor {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).expect("date should be valid");
        Editor::with_date(FormConfig::default(), today)
    }

    #[test]
    fn seeds_and_renders_on_creation() {
        let editor = editor();

        assert_eq!(editor.get("flight-date"), Ok("2026-03-14".to_string()));
        assert_eq!(editor.get("value-carriage"), Ok("NVD".to_string()));
        assert_eq!(editor.get("destination-currency"), Ok("LKR".to_string()));
        assert_eq!(editor.get("conversion-rate"), Ok("1.00".to_string()));
        assert_eq!(editor.preview().content(SlotId::FlightDate), Some("140326"));
        assert_eq!(editor.form().goods.rate_lines.len(), 1);
        assert_eq!(editor.form().dimensions.len(), 1);
    }

    #[test]
    fn reevaluates_after_edit() -> Result<()> {
        let mut editor = editor();

        editor.set("weight-charge-pp", "100.00")?;
        editor.set("conversion-rate", "3.5")?;

        assert_eq!(editor.aggregates().total_prepaid, Decimal::new(10000, 2));
        assert_eq!(editor.preview().content(SlotId::TotalPrepaid), Some("$ 100.00"));
        assert_eq!(editor.preview().content(SlotId::ConvertedAmount), Some("Rs 350.00"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_keys_without_changes() {
        let mut editor = editor();
        let before = editor.clone();

        assert_eq!(
            editor.set("total-prepaid", "1"),
            Err(Error::UnknownField("total-prepaid".to_string()))
        );
        assert!(matches!(
            editor.set("rate-unit-1", "X"),
            Err(Error::InvalidValue { .. })
        ));
        assert_eq!(editor, before);
    }

    #[test]
    fn enforces_line_limits() {
        let mut editor = editor();

        assert_eq!(
            editor.add_rate_line(),
            Err(Error::LineLimitReached {
                kind: LineKind::Rate,
                limit: 1
            })
        );
        assert_eq!(
            editor.remove_dimension_line(0),
            Err(Error::LastLine {
                kind: LineKind::Dimension
            })
        );

        assert_eq!(editor.add_dimension_line(), Ok(1));
        editor.set("dim-pieces-2", "3").expect("line should exist");
        assert_eq!(editor.aggregates().line_volumes.len(), 2);

        assert_eq!(editor.remove_dimension_line(0), Ok(()));
        assert_eq!(editor.get("dim-pieces-1"), Ok("3".to_string()));
        assert_eq!(editor.aggregates().line_volumes.len(), 1);
        assert!(editor.preview().get(SlotId::Dimension(2)).is_none());
    }

    #[test]
    fn toggles_as_agreed_modes() {
        let mut editor = editor();
        editor.set("tax-pp", "9.99").expect("field should be set");

        assert!(editor.toggle_as_agreed_prepaid());
        assert_eq!(editor.get("tax-pp"), Ok(String::new()));
        assert_eq!(editor.preview().content(SlotId::TotalPrepaid), Some(AS_AGREED));

        assert!(!editor.toggle_as_agreed_prepaid());
        assert_eq!(editor.get("tax-pp"), Ok("0.00".to_string()));
        assert_eq!(editor.preview().content(SlotId::TotalPrepaid), Some("$ 0.00"));

        assert!(editor.toggle_as_agreed_conversion());
        assert_eq!(editor.get("conversion-rate"), Ok(String::new()));
        assert!(!editor.toggle_as_agreed_conversion());
        assert_eq!(editor.get("conversion-rate"), Ok("1.00".to_string()));
    }

    #[test]
    fn clearing_charges_resets_modes_and_defaults() {
        let mut editor = editor();
        editor.toggle_as_agreed_collection();
        editor.set("conversion-rate", "300").expect("field should be set");

        editor.clear_tab(Tab::Charges);

        assert!(!editor.form().as_agreed.collection);
        assert_eq!(editor.get("tax-col"), Ok("0.00".to_string()));
        assert_eq!(editor.get("cc-charges-dest"), Ok("0.00".to_string()));
        assert_eq!(editor.get("conversion-rate"), Ok("1.00".to_string()));
        assert_eq!(editor.get("currency-code"), Ok(String::new()));
    }

    #[test]
    fn clears_all_and_reseeds() {
        let mut editor = editor();
        editor.set("shipper-name", "ACME").expect("field should be set");
        editor.add_dimension_line().expect("line should be added");
        editor.toggle_as_agreed_prepaid();

        editor.clear_all();

        assert_eq!(editor.get("shipper-name"), Ok(String::new()));
        assert_eq!(editor.get("flight-date"), Ok("2026-03-14".to_string()));
        assert_eq!(editor.get("value-customs"), Ok("NCV".to_string()));
        assert_eq!(editor.form().dimensions.len(), 2);
        assert!(!editor.form().as_agreed.prepaid);
        assert_eq!(
            editor.preview().content(SlotId::Shipper),
            Some("Shipper Name and Address")
        );
    }

    #[test]
    fn selects_view() {
        let mut editor = editor();
        editor.set("weight-charge-col", "40").expect("field should be set");
        editor.set("conversion-rate", "2").expect("field should be set");

        editor.select_view(PaymentView::Collection);

        assert_eq!(editor.preview().content(SlotId::PaymentType), Some("CC"));
        assert_eq!(editor.aggregates().converted_amount, Decimal::new(8000, 2));
        assert!(editor.preview().get(SlotId::TotalPrepaid).is_none());
    }
}
