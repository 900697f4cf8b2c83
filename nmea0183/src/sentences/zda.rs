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

use crate::fields::Time;
use crate::{RawSentence, Sentence};

/// Time and date with local zone offset.
///
/// Format: `$--ZDA,hhmmss.ss,dd,mm,yyyy,zh,zm*hh`
#[derive(Clone, PartialEq, Debug, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[nmea(sentence = "ZDA")]
pub struct Zda {
    pub sentence: RawSentence,
    #[nmea(name = "time")]
    pub time: Time,
    #[nmea(name = "day")]
    pub day: i64,
    #[nmea(name = "month")]
    pub month: i64,
    /// Four-digit year.
    #[nmea(name = "year")]
    pub year: i64,
    /// Local zone offset from UTC in hours, negative west.
    #[nmea(name = "offset hours")]
    pub offset_hours: i64,
    #[nmea(name = "offset minutes")]
    pub offset_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_time_and_date() {
        let zda =
            Zda::try_from("$GPZDA,160012.71,11,03,2004,-1,00*7D").expect("sentence should decode");

        assert_eq!(zda.time, Time::new(16, 0, 12, 710));
        assert_eq!(zda.day, 11);
        assert_eq!(zda.month, 3);
        assert_eq!(zda.year, 2004);
        assert_eq!(zda.offset_hours, -1);
        assert_eq!(zda.offset_minutes, 0);
    }

    #[test]
    fn fails_on_malformed_time() {
        let err = Zda::try_from("$GPZDA,1234,11,03,2004,-1,00*55")
            .expect_err("time should not parse");

        assert_eq!(err.to_string(), "nmea: GPZDA invalid time: 1234");
    }
}
