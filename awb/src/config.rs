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

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limits and default values of a form.
///
/// The limits bound how many lines a collection may hold whereas the display
/// limits bound how many of those lines are printed on the waybill. Create a
/// config with the [`FormConfigBuilder`] or use the [default] one.
///
/// [default]: FormConfig::default
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormConfig {
    rate_line_limit: usize,
    rate_line_display: usize,
    dimension_line_limit: usize,
    dimension_line_display: usize,
    origin_currency: String,
    destination_currency: String,
    value_for_carriage: String,
    value_for_customs: String,
}

impl FormConfig {
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::new()
    }

    /// Maximum number of rate lines.
    pub fn rate_line_limit(&self) -> usize {
        self.rate_line_limit
    }

    /// Number of rate lines shown in the preview.
    pub fn rate_line_display(&self) -> usize {
        self.rate_line_display
    }

    /// Maximum number of dimension lines.
    pub fn dimension_line_limit(&self) -> usize {
        self.dimension_line_limit
    }

    /// Number of dimension lines shown in the preview.
    pub fn dimension_line_display(&self) -> usize {
        self.dimension_line_display
    }

    pub fn origin_currency(&self) -> &str {
        &self.origin_currency
    }

    pub fn destination_currency(&self) -> &str {
        &self.destination_currency
    }

    /// Declared value for carriage, _No Value Declared_ by default.
    pub fn value_for_carriage(&self) -> &str {
        &self.value_for_carriage
    }

    /// Declared value for customs, _No Customs Value_ by default.
    pub fn value_for_customs(&self) -> &str {
        &self.value_for_customs
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            rate_line_limit: 1,
            rate_line_display: 1,
            dimension_line_limit: 25,
            dimension_line_display: 25,
            origin_currency: "USD".to_string(),
            destination_currency: "LKR".to_string(),
            value_for_carriage: "NVD".to_string(),
            value_for_customs: "NCV".to_string(),
        }
    }
}

/// Form config factory, which is used to build a [`FormConfig`].
///
/// Values that are not set are taken from the default config. With the
/// `serde` feature the builder can be deserialized from a partial config.
///
/// ```
/// # use awb::FormConfigBuilder;
/// let config = FormConfigBuilder::new()
///     .rate_line_limit(10)
///     .rate_line_display(3)
///     .build();
///
/// assert_eq!(config.rate_line_limit(), 10);
/// assert_eq!(config.dimension_line_limit(), 25);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FormConfigBuilder {
    rate_line_limit: Option<usize>,
    rate_line_display: Option<usize>,
    dimension_line_limit: Option<usize>,
    dimension_line_display: Option<usize>,
    origin_currency: Option<String>,
    destination_currency: Option<String>,
    value_for_carriage: Option<String>,
    value_for_customs: Option<String>,
}

impl FormConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> FormConfigBuilder {
        Self::default()
    }

    /// Builds the config.
    ///
    /// A collection always holds at least one line, thus limits below one are
    /// raised to one.
    pub fn build(&self) -> FormConfig {
        let default = FormConfig::default();

        FormConfig {
            rate_line_limit: at_least_one("rate line limit", self.rate_line_limit)
                .unwrap_or(default.rate_line_limit),
            rate_line_display: self.rate_line_display.unwrap_or(default.rate_line_display),
            dimension_line_limit: at_least_one("dimension line limit", self.dimension_line_limit)
                .unwrap_or(default.dimension_line_limit),
            dimension_line_display: self
                .dimension_line_display
                .unwrap_or(default.dimension_line_display),
            origin_currency: self
                .origin_currency
                .clone()
                .unwrap_or(default.origin_currency),
            destination_currency: self
                .destination_currency
                .clone()
                .unwrap_or(default.destination_currency),
            value_for_carriage: self
                .value_for_carriage
                .clone()
                .unwrap_or(default.value_for_carriage),
            value_for_customs: self
                .value_for_customs
                .clone()
                .unwrap_or(default.value_for_customs),
        }
    }

    pub fn rate_line_limit(&mut self, limit: usize) -> &mut Self {
        self.rate_line_limit = Some(limit);
        self
    }

    pub fn rate_line_display(&mut self, display: usize) -> &mut Self {
        self.rate_line_display = Some(display);
        self
    }

    pub fn dimension_line_limit(&mut self, limit: usize) -> &mut Self {
        self.dimension_line_limit = Some(limit);
        self
    }

    pub fn dimension_line_display(&mut self, display: usize) -> &mut Self {
        self.dimension_line_display = Some(display);
        self
    }

    pub fn origin_currency(&mut self, code: &str) -> &mut Self {
        self.origin_currency = Some(code.to_string());
        self
    }

    pub fn destination_currency(&mut self, code: &str) -> &mut Self {
        self.destination_currency = Some(code.to_string());
        self
    }

    pub fn value_for_carriage(&mut self, value: &str) -> &mut Self {
        self.value_for_carriage = Some(value.to_string());
        self
    }

    pub fn value_for_customs(&mut self, value: &str) -> &mut Self {
        self.value_for_customs = Some(value.to_string());
        self
    }
}

fn at_least_one(name: &str, limit: Option<usize>) -> Option<usize> {
    limit.map(|limit| {
        if limit == 0 {
            warn!("{name} of 0 raised to 1");
        }
        limit.max(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_config() {
        assert_eq!(FormConfigBuilder::new().build(), FormConfig::default());
    }

    #[test]
    fn raises_zero_limits() {
        let config = FormConfigBuilder::new()
            .rate_line_limit(0)
            .dimension_line_limit(0)
            .build();

        assert_eq!(config.rate_line_limit(), 1);
        assert_eq!(config.dimension_line_limit(), 1);
    }
}
