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

/// True heading.
///
/// Format: `$--HDT,x.x,T*hh`
#[derive(Clone, PartialEq, Debug, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[nmea(sentence = "HDT")]
pub struct Hdt {
    pub sentence: RawSentence,
    /// Heading in degrees relative to true north.
    #[nmea(name = "heading")]
    pub heading: f64,
    #[nmea(name = "heading reference", values("T"))]
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_heading() {
        let hdt = Hdt::try_from("$GPHDT,274.07,T*03").expect("sentence should decode");

        assert_eq!(hdt.heading, 274.07);
        assert_eq!(hdt.reference, "T");
    }
}
