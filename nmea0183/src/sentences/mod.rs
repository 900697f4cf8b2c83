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

//! Sentence type decoders.
//!
//! Each sentence type is a record struct implementing
//! [`Sentence`](crate::Sentence), most of them through the derive macro,
//! and decodes with a fixed sequence of typed field reads. [`parse`]
//! dispatches a raw line to the decoder registered for its type
//! identifier.

mod gga;
mod gll;
mod gsa;
mod hdt;
mod pashr;
mod rmc;
mod vtg;
mod zda;

pub use gga::Gga;
pub use gll::Gll;
pub use gsa::Gsa;
pub use hdt::Hdt;
pub use pashr::Pashr;
pub use rmc::Rmc;
pub use vtg::Vtg;
pub use zda::Zda;

use log::trace;

use crate::{Error, RawSentence, Sentence};

/// A decoded sentence of any supported type.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SentenceData {
    Gga(Gga),
    Gll(Gll),
    Gsa(Gsa),
    Hdt(Hdt),
    Pashr(Pashr),
    Rmc(Rmc),
    Vtg(Vtg),
    Zda(Zda),
}

/// Decodes one sentence line, dispatching on the type identifier.
///
/// # Examples
///
/// ```
/// use nmea0183::sentences::{parse, SentenceData};
///
/// # fn main() -> Result<(), nmea0183::Error> {
/// let data = parse("$GPHDT,274.07,T*03")?;
///
/// if let SentenceData::Hdt(hdt) = data {
///     println!("heading {:.2}", hdt.heading);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the tokenizer's and decoder's errors unchanged, and
/// [`Error::UnsupportedSentence`] if no decoder is registered for the
/// sentence's type identifier.
pub fn parse(line: &str) -> Result<SentenceData, Error> {
    let sentence = RawSentence::parse(line)?;
    trace!("decoding {} sentence", sentence.prefix());

    let sentence_type = sentence.sentence_type().to_owned();
    match sentence_type.as_str() {
        Gga::TYPE => Gga::decode(sentence).map(SentenceData::Gga),
        Gll::TYPE => Gll::decode(sentence).map(SentenceData::Gll),
        Gsa::TYPE => Gsa::decode(sentence).map(SentenceData::Gsa),
        Hdt::TYPE => Hdt::decode(sentence).map(SentenceData::Hdt),
        Pashr::TYPE => Pashr::decode(sentence).map(SentenceData::Pashr),
        Rmc::TYPE => Rmc::decode(sentence).map(SentenceData::Rmc),
        Vtg::TYPE => Vtg::decode(sentence).map(SentenceData::Vtg),
        Zda::TYPE => Zda::decode(sentence).map(SentenceData::Zda),
        _ => Err(Error::UnsupportedSentence {
            prefix: sentence.prefix(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASHR: &str = "$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*07";

    #[test]
    fn dispatches_on_type_identifier() {
        let data = parse(PASHR).expect("sentence should decode");

        match data {
            SentenceData::Pashr(pashr) => assert_eq!(pashr.heading, 224.19),
            other => panic!("expected a PASHR record, got {other:?}"),
        }
    }

    #[test]
    fn fails_on_unsupported_prefix() {
        let err = parse("$GPXTE,A,A,0.67,L,N*6F").expect_err("prefix should not be supported");

        assert_eq!(
            err,
            Error::UnsupportedSentence {
                prefix: "GPXTE".to_owned()
            }
        );
        assert_eq!(err.to_string(), "nmea: sentence prefix 'GPXTE' not supported");
    }

    #[test]
    fn fails_loudly_on_misdispatch() {
        let err =
            Pashr::try_from("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
                .expect_err("type should not match");

        assert_eq!(err.to_string(), "nmea: GPGGA invalid type: GGA");
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse(PASHR).expect("sentence should decode");
        let second = parse(PASHR).expect("sentence should decode");

        assert_eq!(first, second);
    }
}
