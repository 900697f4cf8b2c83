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

/// Geographic position, latitude and longitude.
///
/// Format: `$--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,A*hh`
#[derive(Clone, PartialEq, Debug, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[nmea(sentence = "GLL")]
pub struct Gll {
    pub sentence: RawSentence,
    /// Latitude in decimal degrees, negative south.
    #[nmea(name = "latitude", position)]
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west.
    #[nmea(name = "longitude", position)]
    pub longitude: f64,
    #[nmea(name = "time")]
    pub time: Time,
    /// `A` when the fix is valid, `V` otherwise.
    #[nmea(name = "validity", values("A", "V"))]
    pub validity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_position() {
        let gll = Gll::try_from("$GPGLL,4916.45,N,12311.12,W,225444,A*31")
            .expect("sentence should decode");

        assert!((gll.latitude - 49.274166666666666).abs() < 1e-9);
        assert!((gll.longitude + 123.18533333333333).abs() < 1e-9);
        assert_eq!(gll.time, Time::new(22, 54, 44, 0));
        assert_eq!(gll.validity, "A");
    }

    #[test]
    fn empty_position_decodes_to_no_fix() {
        let gll = Gll::try_from("$GPGLL,,,,,225444,V*07").expect("sentence should decode");

        assert_eq!(gll.latitude, 0.0);
        assert_eq!(gll.longitude, 0.0);
        assert_eq!(gll.validity, "V");
    }

    #[test]
    fn fails_on_unknown_hemisphere() {
        let err = Gll::try_from("$GPGLL,4916.45,Q,12311.12,W,225444,A*2E")
            .expect_err("hemisphere should not parse");

        assert_eq!(err.to_string(), "nmea: GPGLL invalid latitude: 4916.45 Q");
    }
}
