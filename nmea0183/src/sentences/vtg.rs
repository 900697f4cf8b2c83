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

use crate::{RawSentence, Sentence};

/// Track made good and ground speed.
///
/// Format: `$--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh`
#[derive(Clone, PartialEq, Debug, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[nmea(sentence = "VTG")]
pub struct Vtg {
    pub sentence: RawSentence,
    /// Course over ground in degrees relative to true north.
    #[nmea(name = "true course")]
    pub course_true: f64,
    #[nmea(name = "true course reference", values("T"))]
    pub reference_true: String,
    /// Course over ground in degrees relative to magnetic north.
    #[nmea(name = "magnetic course")]
    pub course_magnetic: f64,
    #[nmea(name = "magnetic course reference", values("M"))]
    pub reference_magnetic: String,
    /// Speed over ground in knots.
    #[nmea(name = "speed over ground knots")]
    pub speed_knots: f64,
    #[nmea(name = "speed unit knots", values("N"))]
    pub unit_knots: String,
    /// Speed over ground in kilometers per hour.
    #[nmea(name = "speed over ground kph")]
    pub speed_kph: f64,
    #[nmea(name = "speed unit kph", values("K"))]
    pub unit_kph: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_track_and_speed() {
        let vtg = Vtg::try_from("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48")
            .expect("sentence should decode");

        assert_eq!(vtg.course_true, 54.7);
        assert_eq!(vtg.course_magnetic, 34.4);
        assert_eq!(vtg.speed_knots, 5.5);
        assert_eq!(vtg.speed_kph, 10.2);
    }

    #[test]
    fn fails_on_wrong_unit() {
        let err = Vtg::try_from("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,X*5B")
            .expect_err("unit should not match");

        assert_eq!(err.to_string(), "nmea: GPVTG invalid speed unit kph: X");
    }
}
