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

/// Global positioning system fix data.
///
/// Format: `$--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh`
///
/// The altitude and separation unit fields are fixed to `M` and skipped.
#[derive(Clone, PartialEq, Debug, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[nmea(sentence = "GGA")]
pub struct Gga {
    pub sentence: RawSentence,
    #[nmea(name = "time")]
    pub time: Time,
    /// Latitude in decimal degrees, negative south.
    #[nmea(name = "latitude", position)]
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west.
    #[nmea(name = "longitude", position)]
    pub longitude: f64,
    /// Fix quality indicator, `0` (no fix) through `8` (simulation).
    #[nmea(name = "fix quality", values("0", "1", "2", "3", "4", "5", "6", "7", "8"))]
    pub fix_quality: String,
    #[nmea(name = "number of satellites")]
    pub num_satellites: i64,
    /// Horizontal dilution of precision.
    #[nmea(name = "hdop")]
    pub hdop: f64,
    /// Antenna altitude above mean sea level in meters.
    #[nmea(name = "altitude")]
    pub altitude: f64,
    /// Geoidal separation in meters.
    #[nmea(index = 10, name = "separation")]
    pub separation: f64,
    /// Age of the differential correction in seconds, if any.
    #[nmea(index = 12, name = "dgps age")]
    pub dgps_age: Option<f64>,
    /// Identifier of the differential reference station.
    #[nmea(name = "dgps station id")]
    pub dgps_id: String,
}
