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

use crate::fields::{Date, Time};
use crate::{Error, FieldReader, RawSentence, Sentence};

/// Recommended minimum navigation information.
///
/// Format: `$--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a*hh`
///
/// The decoder is hand-written: the magnetic variation is transmitted as a
/// magnitude with a separate east/west designator and folded into one
/// signed value.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rmc {
    pub sentence: RawSentence,
    pub time: Time,
    /// `A` when the fix is valid, `V` otherwise.
    pub validity: String,
    /// Latitude in decimal degrees, negative south.
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west.
    pub longitude: f64,
    /// Speed over ground in knots.
    pub speed: f64,
    /// Course over ground in degrees.
    pub course: f64,
    pub date: Date,
    /// Magnetic variation in degrees, negative west.
    pub variation: f64,
}

impl Sentence for Rmc {
    const TYPE: &'static str = "RMC";

    fn decode(sentence: RawSentence) -> Result<Self, Error> {
        sentence.assert_type(Self::TYPE)?;
        let mut fields = FieldReader::new(&sentence);
        let time = fields.time(0, "time");
        let validity = fields.enum_string(1, "validity", &["A", "V"]);
        let latitude = fields.lat_long(2, 3, "latitude");
        let longitude = fields.lat_long(4, 5, "longitude");
        let speed = fields.float64(6, "speed");
        let course = fields.float64(7, "course");
        let date = fields.date(8, "date");
        let mut variation = fields.float64(9, "variation");
        if fields.enum_string(10, "variation direction", &["E", "W"]) == "W" {
            variation = -variation;
        }
        fields.finish()?;
        Ok(Self {
            sentence,
            time,
            validity,
            latitude,
            longitude,
            speed,
            course,
            date,
            variation,
        })
    }
}

impl TryFrom<&str> for Rmc {
    type Error = Error;

    fn try_from(line: &str) -> Result<Self, Error> {
        RawSentence::parse(line).and_then(Self::decode)
    }
}
