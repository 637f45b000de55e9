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

use chrono::NaiveDate;
use log::trace;
use rust_decimal::Decimal;

use crate::field::Input;
use crate::form::{Party, DATE_FORMAT};

/// Format of the flight date on the waybill.
pub const PRINTED_DATE_FORMAT: &str = "%d%m%y";

/// Formats the flight date as `DDMMYY`.
///
/// Returns an empty string if the date is blank or not a `YYYY-MM-DD` date.
pub fn flight_date(date: &Input) -> String {
    if date.is_blank() {
        return String::new();
    }

    match NaiveDate::parse_from_str(date.as_str().trim(), DATE_FORMAT) {
        Ok(date) => date.format(PRINTED_DATE_FORMAT).to_string(),
        Err(e) => {
            trace!("not printing flight date {date:?}: {e}");
            String::new()
        }
    }
}

/// Formats the name and address block of a party.
///
/// A party without name is printed as `placeholder`.
pub fn party_block(party: &Party, placeholder: &str) -> String {
    if party.name.is_blank() {
        return placeholder.to_string();
    }

    format!(
        "{}\n{}\n{}, {}",
        party.name, party.address, party.city, party.country
    )
}

/// Prefixes the value with the currency symbol.
pub fn amount<T: std::fmt::Display>(symbol: &str, value: T) -> String {
    format!("{symbol} {value}")
}

/// Prints the value with a fixed number of decimal places.
pub fn fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_flight_date() {
        assert_eq!(flight_date(&"2026-03-14".into()), "140326");
        assert_eq!(flight_date(&" 2025-12-01 ".into()), "011225");
        assert_eq!(flight_date(&"".into()), "");
        assert_eq!(flight_date(&"14.03.2026".into()), "");
        assert_eq!(flight_date(&"2026-02-30".into()), "");
    }

    #[test]
    fn formats_party_block() {
        let mut party = Party::default();
        assert_eq!(party_block(&party, "Shipper Name and Address"), "Shipper Name and Address");

        party.name.set("ACME Ltd");
        party.address.set("1 Main St");
        party.city.set("Colombo");
        party.country.set("LK");
        assert_eq!(party_block(&party, ""), "ACME Ltd\n1 Main St\nColombo, LK");
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(amount("Rs", "12.00"), "Rs 12.00");
        assert_eq!(fixed(Decimal::new(105, 1), 1), "10.5");
        assert_eq!(fixed(Decimal::new(5, 0), 2), "5.00");
        assert_eq!(fixed(Decimal::new(72, 3), 3), "0.072");
        assert_eq!(fixed(Decimal::ZERO, 3), "0.000");
    }
}
