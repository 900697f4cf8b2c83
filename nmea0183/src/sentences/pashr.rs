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

/// Proprietary RT300 roll and pitch sentence.
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_pashr_rt300_proprietary_roll_and_pitch_sentence>
///
/// Format: `$PASHR,hhmmss.sss,hhh.hh,T,rrr.rr,ppp.pp,xxx.xx,a.aaa,b.bbb,c.ccc,d,e*hh`
#[derive(Clone, PartialEq, Debug, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[nmea(sentence = "ASHR")]
pub struct Pashr {
    pub sentence: RawSentence,
    #[nmea(name = "time")]
    pub time: Time,
    /// Heading in degrees.
    #[nmea(name = "heading")]
    pub heading: f64,
    /// `T` when the heading is relative to true north.
    #[nmea(name = "true  heading", values("T", "F"))]
    pub true_heading: String,
    /// Roll in degrees, positive for starboard up.
    #[nmea(name = "roll")]
    pub roll: f64,
    /// Pitch in degrees, positive for bow up.
    #[nmea(name = "pitch")]
    pub pitch: f64,
    /// Heave in meters.
    #[nmea(name = "heave")]
    pub heave: f64,
    #[nmea(name = "roll accuracy")]
    pub roll_accuracy: f64,
    #[nmea(name = "pitch accuracy")]
    pub pitch_accuracy: f64,
    #[nmea(name = "heading accuracy")]
    pub heading_accuracy: f64,
    /// Quality of the GNSS fix; receiver vendors disagree on the exact
    /// encoding beyond `0` meaning no position.
    #[nmea(name = "gnss quality")]
    pub gnss_quality: i64,
    /// Status of the IMU alignment.
    #[nmea(name = "imu alignment status")]
    pub imu_alignment_status: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const GOOD: &str = "$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*07";

    #[test]
    fn decodes_attitude_sentence() {
        let pashr = Pashr::try_from(GOOD).expect("sentence should decode");

        assert_eq!(pashr.time, Time::new(8, 53, 35, 0));
        assert_eq!(pashr.heading, 224.19);
        assert_eq!(pashr.true_heading, "T");
        assert_eq!(pashr.roll, -1.26);
        assert_eq!(pashr.pitch, 0.83);
        assert_eq!(pashr.heave, 0.10);
        assert_eq!(pashr.roll_accuracy, 0.101);
        assert_eq!(pashr.pitch_accuracy, 0.113);
        assert_eq!(pashr.heading_accuracy, 0.267);
        assert_eq!(pashr.gnss_quality, 1);
        assert_eq!(pashr.imu_alignment_status, 0);
    }

    #[test]
    fn fails_on_checksum_mismatch() {
        let err = Pashr::try_from(
            "$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.10,0.101,0.0,0.267,1,0*07",
        )
        .expect_err("checksum should mismatch");

        assert_eq!(
            err.to_string(),
            "nmea: sentence checksum mismatch [04 != 07]"
        );
    }

    #[test]
    fn fails_on_invalid_true_heading() {
        let err = Pashr::try_from(
            "$PASHR,085335.000,224.19,X,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*0B",
        )
        .expect_err("enum should not match");

        assert_eq!(err.to_string(), "nmea: PASHR invalid true  heading: X");
        match err {
            Error::InvalidFields { prefix, errors } => {
                assert_eq!(prefix, "PASHR");
                // no other field is reported
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].index, 2);
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn checksum_failure_masks_field_errors() {
        // both a broken checksum and a bad enum field: only the checksum
        // failure is reported
        let err = Pashr::try_from(
            "$PASHR,085335.000,224.19,X,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*07",
        )
        .expect_err("checksum should mismatch");

        assert_eq!(
            err.to_string(),
            "nmea: sentence checksum mismatch [0B != 07]"
        );
    }

    #[test]
    fn reports_every_invalid_field_together() {
        let err = Pashr::try_from(
            "$PASHR,085335.000,abc,X,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*79",
        )
        .expect_err("fields should not decode");

        assert_eq!(err.to_string(), "nmea: PASHR invalid heading: abc");
        match err {
            Error::InvalidFields { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "heading");
                assert_eq!(errors[1].field, "true  heading");
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn decoding_is_idempotent() {
        let first = Pashr::try_from(GOOD).expect("sentence should decode");
        let second = Pashr::try_from(GOOD).expect("sentence should decode");

        assert_eq!(first, second);
    }
}
