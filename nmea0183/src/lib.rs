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

//! NMEA 0183 sentence parser.
//!
//! This crate decodes checksum-protected, comma-delimited NMEA 0183
//! sentences into typed [records](crate::sentences). A raw line is
//! tokenized into a [`RawSentence`] with its checksum verified up front,
//! and each field is then converted through a [`FieldReader`] that collects
//! every failure of a decode pass instead of stopping at the first one — a
//! noisy serial feed often corrupts several fields at once, and the single
//! returned error names them all.
//!
//! # Examples
//!
//! Decode a proprietary attitude sentence and read its angles:
//!
//! ```
//! use nmea0183::sentences::Pashr;
//!
//! # fn main() -> Result<(), nmea0183::Error> {
//! let pashr = Pashr::try_from(
//!     "$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.10,0.101,0.113,0.267,1,0*07",
//! )?;
//!
//! println!("heading {} roll {} pitch {}", pashr.heading, pashr.roll, pashr.pitch);
//! # Ok(())
//! # }
//! ```
//!
//! Feeds carry many sentence types at once; [`sentences::parse`]
//! dispatches on the type identifier:
//!
//! ```
//! use nmea0183::sentences::{parse, SentenceData};
//!
//! # fn main() -> Result<(), nmea0183::Error> {
//! let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
//!
//! if let SentenceData::Gga(gga) = parse(line)? {
//!     println!("fix at {:.4}, {:.4}", gga.latitude, gga.longitude);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod error;
mod reader;
mod sentence;

// Re-export the derive macro for convenience
pub(crate) use nmea0183_derive::Sentence;

pub mod fields;
pub mod sentences;

pub use error::{Error, FieldError, FieldErrorKind};
pub use reader::FieldReader;
pub use sentence::{RawSentence, Sentence, CHECKSUM_SEP, FIELD_SEP, SENTENCE_START};
