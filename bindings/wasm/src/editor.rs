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

use awb::prelude::*;
use log::LevelFilter;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::logger;

/// A preview slot as read by the page.
///
/// The id is the name of the waybill position the content is printed at.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSlot<'a> {
    id: String,
    content: &'a str,
    as_agreed: bool,
}

#[wasm_bindgen(js_name = AwbEditor)]
pub struct JsEditor {
    inner: Editor,
}

#[wasm_bindgen(js_class = AwbEditor)]
impl JsEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::init(FormConfig::default())
    }

    /// Creates an editor from a partial config, e.g. `{ rate_line_limit: 5 }`.
    ///
    /// Missing values are taken from the default config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<Self, JsError> {
        let builder: FormConfigBuilder = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("invalid config: {e}")))?;
        Ok(Self::init(builder.build()))
    }

    pub fn get(&self, key: &str) -> Result<String, JsError> {
        Ok(self.inner.get(key)?)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), JsError> {
        Ok(self.inner.set(key, value)?)
    }

    #[wasm_bindgen(js_name = addRateLine)]
    pub fn add_rate_line(&mut self) -> Result<usize, JsError> {
        Ok(self.inner.add_rate_line()?)
    }

    #[wasm_bindgen(js_name = removeRateLine)]
    pub fn remove_rate_line(&mut self, index: usize) -> Result<(), JsError> {
        Ok(self.inner.remove_rate_line(index)?)
    }

    #[wasm_bindgen(js_name = addDimensionLine)]
    pub fn add_dimension_line(&mut self) -> Result<usize, JsError> {
        Ok(self.inner.add_dimension_line()?)
    }

    #[wasm_bindgen(js_name = removeDimensionLine)]
    pub fn remove_dimension_line(&mut self, index: usize) -> Result<(), JsError> {
        Ok(self.inner.remove_dimension_line(index)?)
    }

    /// Selects the payment view by name (`prepaid`, `collection` or `both`).
    #[wasm_bindgen(js_name = selectView)]
    pub fn select_view(&mut self, view: &str) -> Result<(), JsError> {
        let view: PaymentView = view.parse()?;
        self.inner.select_view(view);
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleAsAgreedPrepaid)]
    pub fn toggle_as_agreed_prepaid(&mut self) -> bool {
        self.inner.toggle_as_agreed_prepaid()
    }

    #[wasm_bindgen(js_name = toggleAsAgreedCollection)]
    pub fn toggle_as_agreed_collection(&mut self) -> bool {
        self.inner.toggle_as_agreed_collection()
    }

    #[wasm_bindgen(js_name = toggleAsAgreedConversion)]
    pub fn toggle_as_agreed_conversion(&mut self) -> bool {
        self.inner.toggle_as_agreed_conversion()
    }

    /// Clears the tab by name, e.g. `charges` or `charges-tab`.
    #[wasm_bindgen(js_name = clearTab)]
    pub fn clear_tab(&mut self, tab: &str) -> Result<(), JsError> {
        let tab: Tab = tab.parse()?;
        self.inner.clear_tab(tab);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.inner.clear_all();
    }

    /// Returns the preview as list of `{id, content, asAgreed}` slots.
    #[wasm_bindgen(getter)]
    pub fn preview(&self) -> Result<JsValue, JsValue> {
        let slots: Vec<JsSlot> = self
            .inner
            .preview()
            .iter()
            .map(|slot| JsSlot {
                id: slot.id.to_string(),
                content: &slot.content,
                as_agreed: slot.as_agreed,
            })
            .collect();

        Ok(serde_wasm_bindgen::to_value(&slots)?)
    }

    #[wasm_bindgen(getter)]
    pub fn aggregates(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.aggregates())?)
    }

    #[wasm_bindgen(getter)]
    pub fn form(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.form())?)
    }

    pub fn fwb(&self) -> String {
        self.inner.fwb().to_string()
    }
}

impl JsEditor {
    fn init(config: FormConfig) -> Self {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);

        Self {
            inner: Editor::new(config),
        }
    }
}

impl Default for JsEditor {
    fn default() -> Self {
        Self::new()
    }
}
