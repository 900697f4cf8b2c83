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

use chrono::NaiveTime;

use super::InvalidFormat;

/// Time of day as transmitted in `hhmmss[.sss]` fields.
///
/// An empty field is legal in most sentences and decodes to a value with
/// `valid == false`. Component ranges are not checked beyond the
/// transmitted format; [`to_naive_time`](Time::to_naive_time) rejects
/// out-of-range components.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    /// `false` if the field was not present in the sentence.
    pub valid: bool,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl Time {
    /// Creates a present time value.
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            valid: true,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Converts to a [`NaiveTime`].
    ///
    /// Returns `None` for a "not present" value or out-of-range components.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if self.valid {
            NaiveTime::from_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
        } else {
            None
        }
    }
}

impl FromStr for Time {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ERR: InvalidFormat = InvalidFormat {
            expected: "hhmmss or hhmmss.sss",
        };

        if s.is_empty() {
            return Ok(Self::default());
        }

        let (hms, frac) = match s.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (s, None),
        };

        let bytes = hms.as_bytes();
        if bytes.len() != 6 {
            return Err(ERR);
        }

        let hour = parse_digits!(u32, &bytes[0..2]).ok_or(ERR)?;
        let minute = parse_digits!(u32, &bytes[2..4]).ok_or(ERR)?;
        let second = parse_digits!(u32, &bytes[4..6]).ok_or(ERR)?;

        let millisecond = match frac {
            None => 0,
            Some(frac) => {
                // Fractional digits beyond milliseconds are dropped, short
                // fractions scale up: ".5" is 500 ms.
                let digits = frac.len().min(3);
                let mut ms = parse_digits!(u32, &frac.as_bytes()[..digits]).ok_or(ERR)?;
                if digits < frac.len() {
                    parse_digits!(u32, &frac.as_bytes()[digits..]).ok_or(ERR)?;
                }
                for _ in digits..3 {
                    ms *= 10;
                }
                ms
            }
        };

        Ok(Self::new(hour, minute, second, millisecond))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}
