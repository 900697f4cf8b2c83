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

use crate::{Error, FieldReader, RawSentence, Sentence};

/// GNSS dilution of precision and active satellites.
///
/// Format: `$--GSA,a,x,xx,xx,xx,xx,xx,xx,xx,xx,xx,xx,xx,xx,x.x,x.x,x.x*hh`
///
/// The decoder is hand-written: the twelve satellite slots form a
/// variable-length list rather than a fixed field layout.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gsa {
    pub sentence: RawSentence,
    /// `A` automatic or `M` manual 2D/3D selection.
    pub mode: String,
    /// Fix type: `1` no fix, `2` 2D, `3` 3D.
    pub fix_type: String,
    /// PRNs of the satellites used in the solution.
    pub satellites: Vec<String>,
    pub pdop: f64,
    pub hdop: f64,
    pub vdop: f64,
}

impl Sentence for Gsa {
    const TYPE: &'static str = "GSA";

    fn decode(sentence: RawSentence) -> Result<Self, Error> {
        sentence.assert_type(Self::TYPE)?;
        let mut fields = FieldReader::new(&sentence);
        let mode = fields.enum_string(0, "selection mode", &["A", "M"]);
        let fix_type = fields.enum_string(1, "fix type", &["1", "2", "3"]);
        let satellites = fields.string_list(2, 14, "satellite prn");
        let pdop = fields.float64(14, "pdop");
        let hdop = fields.float64(15, "hdop");
        let vdop = fields.float64(16, "vdop");
        fields.finish()?;
        Ok(Self {
            sentence,
            mode,
            fix_type,
            satellites,
            pdop,
            hdop,
            vdop,
        })
    }
}

impl TryFrom<&str> for Gsa {
    type Error = Error;

    fn try_from(line: &str) -> Result<Self, Error> {
        RawSentence::parse(line).and_then(Self::decode)
    }
}
