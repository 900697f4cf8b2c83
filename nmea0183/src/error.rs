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

use std::error;
use std::fmt;

/// Failure of a single field conversion, collected during one decode pass.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FieldError {
    /// 0-based index into the sentence's field list.
    pub index: usize,
    /// Human-readable field name used in diagnostics.
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FieldErrorKind {
    /// The raw value could not be converted to the requested type.
    InvalidValue { value: String },
    /// The raw value is outside the caller-supplied allowed set.
    InvalidEnum {
        value: String,
        allowed: &'static [&'static str],
    },
}

impl FieldError {
    /// The raw value that failed conversion.
    pub fn value(&self) -> &str {
        match &self.kind {
            FieldErrorKind::InvalidValue { value } => value,
            FieldErrorKind::InvalidEnum { value, .. } => value,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.value())
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// Framing is broken before any field could be read.
    MalformedSentence { reason: &'static str },
    /// Computed and transmitted checksum differ.
    ChecksumMismatch { computed: u8, expected: u8 },
    /// No decoder is registered for the sentence prefix.
    UnsupportedSentence { prefix: String },
    /// The sentence reached a decoder for another type.
    UnexpectedType { prefix: String, found: String },
    /// One or more fields failed conversion or validation.
    ///
    /// The first failure drives the rendered message; `errors` keeps every
    /// failure of the decode pass for programmatic inspection.
    InvalidFields {
        prefix: String,
        errors: Vec<FieldError>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSentence { reason } => {
                write!(f, "nmea: {reason}")
            }
            Self::ChecksumMismatch { computed, expected } => {
                write!(
                    f,
                    "nmea: sentence checksum mismatch [{computed:02X} != {expected:02X}]"
                )
            }
            Self::UnsupportedSentence { prefix } => {
                write!(f, "nmea: sentence prefix '{prefix}' not supported")
            }
            Self::UnexpectedType { prefix, found } => {
                write!(f, "nmea: {prefix} invalid type: {found}")
            }
            Self::InvalidFields { prefix, errors } => match errors.first() {
                Some(error) => write!(f, "nmea: {prefix} {error}"),
                None => write!(f, "nmea: {prefix} invalid sentence"),
            },
        }
    }
}

impl error::Error for Error {}
