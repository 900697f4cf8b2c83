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

use crate::Error;

/// Sentence start marker.
pub const SENTENCE_START: char = '$';

/// Field delimiter within the sentence body.
pub const FIELD_SEP: char = ',';

/// Delimiter between the sentence body and the checksum digits.
pub const CHECKSUM_SEP: char = '*';

/// A tokenized sentence before per-field interpretation.
///
/// Tokenizing splits one raw line into the talker and type identifiers and
/// the ordered raw field strings, and verifies the transmitted checksum.
/// The checksum is verified before any field is interpreted, so a decoder
/// never sees a corrupted body.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSentence {
    talker: String,
    sentence_type: String,
    fields: Vec<String>,
    checksum: u8,
    raw: String,
}

impl RawSentence {
    /// Tokenizes one sentence line and verifies its checksum.
    ///
    /// The line runs from the `$` start marker through the two checksum
    /// digits; a trailing line terminator is accepted and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSentence`] if the framing is broken and
    /// [`Error::ChecksumMismatch`] if the transmitted checksum does not
    /// match the one computed over the sentence body.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let raw = line.trim();

        if !raw.is_ascii() {
            return Err(Error::MalformedSentence {
                reason: "sentence is not ASCII",
            });
        }

        let Some(body_with_sum) = raw.strip_prefix(SENTENCE_START) else {
            return Err(Error::MalformedSentence {
                reason: "sentence does not start with a '$'",
            });
        };

        let Some((body, sum)) = body_with_sum.split_once(CHECKSUM_SEP) else {
            return Err(Error::MalformedSentence {
                reason: "sentence does not contain checksum separator",
            });
        };

        if body.is_empty() {
            return Err(Error::MalformedSentence {
                reason: "sentence body is empty",
            });
        }

        let expected = parse_checksum(sum)?;
        let computed = xor_checksum(body);
        if computed != expected {
            return Err(Error::ChecksumMismatch { computed, expected });
        }

        let mut fields: Vec<String> = body.split(FIELD_SEP).map(str::to_owned).collect();
        let prefix = fields.remove(0);
        let (talker, sentence_type) = split_prefix(&prefix);

        Ok(Self {
            talker,
            sentence_type,
            fields,
            checksum: expected,
            raw: raw.to_owned(),
        })
    }

    /// The talker identifier, e.g. `GP`, or `P` for proprietary sentences.
    pub fn talker(&self) -> &str {
        &self.talker
    }

    /// The sentence type identifier, e.g. `GGA` or `ASHR`.
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// The raw field strings in sentence order. Entries may be empty.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The transmitted checksum byte.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The talker and type identifiers as transmitted, e.g. `GPGGA`.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.talker, self.sentence_type)
    }

    /// Checks that the sentence is of the expected type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedType`] if a sentence of another type was
    /// dispatched to this decoder.
    pub fn assert_type(&self, expected: &str) -> Result<(), Error> {
        if self.sentence_type == expected {
            Ok(())
        } else {
            Err(Error::UnexpectedType {
                prefix: self.prefix(),
                found: self.sentence_type.clone(),
            })
        }
    }
}

impl fmt::Display for RawSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// An NMEA sentence type.
///
/// Each sentence type supplies its type identifier and a decoder taking a
/// tokenized sentence. The decoder body is a fixed sequence of
/// [`FieldReader`](crate::FieldReader) calls, one per field in the type's
/// defined order.
pub trait Sentence: Sized {
    /// The sentence type identifier this decoder accepts, e.g. `"GGA"`.
    const TYPE: &'static str;

    /// Decodes a tokenized sentence into this record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedType`] for a sentence of another type and
    /// [`Error::InvalidFields`] carrying every field failure of the pass.
    fn decode(sentence: RawSentence) -> Result<Self, Error>;
}

/// XOR of all bytes between the start marker and the checksum delimiter.
fn xor_checksum(body: &str) -> u8 {
    body.bytes().fold(0, |sum, b| sum ^ b)
}

fn parse_checksum(sum: &str) -> Result<u8, Error> {
    let reason = "sentence checksum is not two hexadecimal digits";
    if sum.len() == 2 && sum.bytes().all(|b| b.is_ascii_hexdigit()) {
        u8::from_str_radix(sum, 16).map_err(|_| Error::MalformedSentence { reason })
    } else {
        Err(Error::MalformedSentence { reason })
    }
}

/// Splits the transmitted prefix into talker and type identifiers.
///
/// Proprietary sentences carry a single `P` talker before the type.
fn split_prefix(prefix: &str) -> (String, String) {
    if let Some(rest) = prefix.strip_prefix('P') {
        ("P".to_owned(), rest.to_owned())
    } else if prefix.len() < 2 {
        (prefix.to_owned(), String::new())
    } else {
        (prefix[..2].to_owned(), prefix[2..].to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_talker_and_fields() {
        let sentence = RawSentence::parse("$GPGGA,1,2,3*4A").expect("sentence should parse");

        assert_eq!(sentence.talker(), "GP");
        assert_eq!(sentence.sentence_type(), "GGA");
        assert_eq!(sentence.prefix(), "GPGGA");
        assert_eq!(sentence.fields(), ["1", "2", "3"]);
        assert_eq!(sentence.checksum(), 0x4A);
    }

    #[test]
    fn tokenizes_proprietary_talker() {
        let sentence = RawSentence::parse("$PGRMZ,93,f,3*21").expect("sentence should parse");

        assert_eq!(sentence.talker(), "P");
        assert_eq!(sentence.sentence_type(), "GRMZ");
        assert_eq!(sentence.prefix(), "PGRMZ");
    }

    #[test]
    fn keeps_empty_fields() {
        let sentence = RawSentence::parse("$GPGLL,,,,,225444,V*07").expect("sentence should parse");

        assert_eq!(sentence.fields(), ["", "", "", "", "225444", "V"]);
    }

    #[test]
    fn accepts_line_terminator_and_lowercase_checksum() {
        let sentence = RawSentence::parse("$GPGGA,1,2,3*4a\r\n").expect("sentence should parse");

        assert_eq!(sentence.checksum(), 0x4A);
        assert_eq!(sentence.to_string(), "$GPGGA,1,2,3*4a");
    }

    #[test]
    fn rejects_missing_start_marker() {
        assert_eq!(
            RawSentence::parse("GPGGA,1,2,3*4A"),
            Err(Error::MalformedSentence {
                reason: "sentence does not start with a '$'"
            })
        );
    }

    #[test]
    fn rejects_missing_checksum_separator() {
        assert_eq!(
            RawSentence::parse("$GPGGA,1,2,3"),
            Err(Error::MalformedSentence {
                reason: "sentence does not contain checksum separator"
            })
        );
    }

    #[test]
    fn rejects_malformed_checksum_digits() {
        for line in ["$GPGGA,1*4", "$GPGGA,1*4Z", "$GPGGA,1*04B"] {
            assert_eq!(
                RawSentence::parse(line),
                Err(Error::MalformedSentence {
                    reason: "sentence checksum is not two hexadecimal digits"
                })
            );
        }
    }

    #[test]
    fn rejects_empty_body() {
        assert_eq!(
            RawSentence::parse("$*00"),
            Err(Error::MalformedSentence {
                reason: "sentence body is empty"
            })
        );
    }

    #[test]
    fn rejects_non_ascii_sentence() {
        assert_eq!(
            RawSentence::parse("$GPGGA,é*00"),
            Err(Error::MalformedSentence {
                reason: "sentence is not ASCII"
            })
        );
    }

    #[test]
    fn rejects_checksum_mismatch() {
        let err = RawSentence::parse("$GPGGA,1*FF").expect_err("checksum should mismatch");

        assert_eq!(
            err,
            Error::ChecksumMismatch {
                computed: 0x4B,
                expected: 0xFF
            }
        );
        assert_eq!(
            err.to_string(),
            "nmea: sentence checksum mismatch [4B != FF]"
        );
    }

    #[test]
    fn asserts_sentence_type() {
        let sentence = RawSentence::parse("$GPGGA,1,2,3*4A").expect("sentence should parse");

        assert!(sentence.assert_type("GGA").is_ok());

        let err = sentence
            .assert_type("ASHR")
            .expect_err("type should not match");
        assert_eq!(err.to_string(), "nmea: GPGGA invalid type: GGA");
    }
}
