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

use chrono::{DateTime, NaiveDate, Utc};

use super::{InvalidFormat, Time};

/// Date as transmitted in `ddmmyy` fields.
///
/// An empty field is legal and decodes to a value with `valid == false`.
/// The year keeps its transmitted two digits;
/// [`to_naive_date`](Date::to_naive_date) maps it into 2000..=2099.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    /// `false` if the field was not present in the sentence.
    pub valid: bool,
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl Date {
    /// Creates a present date value.
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self {
            valid: true,
            day,
            month,
            year,
        }
    }

    /// Converts to a [`NaiveDate`] in the years 2000..=2099.
    ///
    /// Returns `None` for a "not present" value or an impossible date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.valid {
            NaiveDate::from_ymd_opt(2000 + self.year as i32, self.month, self.day)
        } else {
            None
        }
    }
}

impl FromStr for Date {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ERR: InvalidFormat = InvalidFormat { expected: "ddmmyy" };

        if s.is_empty() {
            return Ok(Self::default());
        }

        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return Err(ERR);
        }

        let day = parse_digits!(u32, &bytes[0..2]).ok_or(ERR)?;
        let month = parse_digits!(u32, &bytes[2..4]).ok_or(ERR)?;
        let year = parse_digits!(u32, &bytes[4..6]).ok_or(ERR)?;

        Ok(Self::new(day, month, year))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:02}", self.day, self.month, self.year)
    }
}

/// Combines a date and a time of day into a UTC timestamp.
///
/// Returns `None` if either value is "not present" or out of range.
pub fn date_time(date: Date, time: Time) -> Option<DateTime<Utc>> {
    let date = date.to_naive_date()?;
    let time = time.to_naive_time()?;
    Some(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date() {
        let date = "111221".parse::<Date>().expect("date should parse");
        assert_eq!(date, Date::new(11, 12, 21));
    }

    #[test]
    fn empty_field_is_not_present() {
        let date = "".parse::<Date>().expect("empty field should be legal");
        assert!(!date.valid);
    }

    #[test]
    fn rejects_malformed_date() {
        for s in ["2303", "23039x", "2303944"] {
            assert!(s.parse::<Date>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn converts_to_naive_date() {
        let date = Date::new(11, 12, 21);
        assert_eq!(
            date.to_naive_date(),
            NaiveDate::from_ymd_opt(2021, 12, 11)
        );

        assert_eq!(Date::default().to_naive_date(), None);
        assert_eq!(Date::new(31, 2, 21).to_naive_date(), None);
    }

    #[test]
    fn combines_date_and_time() {
        let stamp = date_time(Date::new(11, 12, 21), Time::new(8, 53, 35, 0))
            .expect("date and time should combine");
        assert_eq!(stamp.to_rfc3339(), "2021-12-11T08:53:35+00:00");

        assert_eq!(date_time(Date::default(), Time::new(8, 53, 35, 0)), None);
        assert_eq!(date_time(Date::new(11, 12, 21), Time::default()), None);
    }
}
